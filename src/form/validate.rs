use std::collections::BTreeMap;

use super::{Field, FormValues};
use crate::record::{Location, Name, PersonRecord};

pub const PHONE_MIN: u64 = 1_000_000_000;
pub const PHONE_MAX: u64 = 9_999_999_999;
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

/// One message per invalid field, in display order.
pub type FieldErrors = BTreeMap<Field, String>;

/// Form values that passed [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidForm {
    values: FormValues,
    phone: u64,
}

impl ValidForm {
    /// Build the record a submission stores. `email` is not on the form, so
    /// the caller decides what to carry over.
    pub fn to_record(&self, email: Option<String>) -> PersonRecord {
        PersonRecord {
            name: Name {
                first: self.values.first_name.clone(),
                last: self.values.last_name.clone(),
            },
            location: Location {
                city: self.values.city.clone(),
                state: self.values.state.clone(),
                country: self.values.country.clone(),
            },
            email,
            phone: self.phone.to_string(),
        }
    }
}

pub fn validate(values: &FormValues) -> Result<ValidForm, FieldErrors> {
    let mut errors = FieldErrors::new();

    let phone = match check_phone(&values.phone_no) {
        Ok(n) => Some(n),
        Err(msg) => {
            errors.insert(Field::PhoneNo, msg.to_string());
            None
        }
    };

    if let Err(msg) = check_name(&values.first_name, "Firstname is required") {
        errors.insert(Field::FirstName, msg.to_string());
    }
    if let Err(msg) = check_name(&values.last_name, "Lastname is required") {
        errors.insert(Field::LastName, msg.to_string());
    }

    for (field, value) in [
        (Field::City, &values.city),
        (Field::State, &values.state),
        (Field::Country, &values.country),
    ] {
        if value.is_empty() {
            errors.insert(field, "Required".to_string());
        }
    }

    match phone {
        Some(phone) if errors.is_empty() => Ok(ValidForm {
            values: values.clone(),
            phone,
        }),
        _ => Err(errors),
    }
}

/// Rules apply in order and the first failure wins.
fn check_phone(raw: &str) -> Result<u64, &'static str> {
    if raw.is_empty() {
        return Err("Required");
    }
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let n: f64 = digits
        .parse()
        .ok()
        .filter(|n: &f64| n.is_finite())
        .ok_or("Enter a valid number")?;
    if n <= 0.0 {
        return Err("Can't start with a minus");
    }
    if n.fract() != 0.0 {
        return Err("Can't include a decimal point");
    }
    if n < PHONE_MIN as f64 {
        return Err("Must be of 10 digit");
    }
    if n > PHONE_MAX as f64 {
        return Err("must be 10 digit");
    }
    Ok(n as u64)
}

fn check_name(value: &str, required: &'static str) -> Result<(), &'static str> {
    let len = value.chars().count();
    if len == 0 {
        Err(required)
    } else if len < NAME_MIN_CHARS {
        Err("Too Short!")
    } else if len > NAME_MAX_CHARS {
        Err("Too Long!")
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            phone_no: "1234567890".into(),
            country: "Z".into(),
            city: "X".into(),
            state: "Y".into(),
        }
    }

    fn phone_error(phone: &str) -> Option<String> {
        let values = FormValues {
            phone_no: phone.into(),
            ..valid_values()
        };
        validate(&values).err().and_then(|e| e.get(&Field::PhoneNo).cloned())
    }

    #[test]
    fn valid_values_pass() {
        let valid = validate(&valid_values()).unwrap();
        assert_eq!(valid.phone, 1_234_567_890);
    }

    #[test]
    fn five_digit_phone_is_too_short() {
        assert_eq!(phone_error("12345").as_deref(), Some("Must be of 10 digit"));
    }

    #[test]
    fn eleven_digit_phone_is_too_long() {
        assert_eq!(
            phone_error("12345678901").as_deref(),
            Some("must be 10 digit")
        );
    }

    #[test]
    fn negative_phone_is_rejected() {
        assert_eq!(
            phone_error("-5").as_deref(),
            Some("Can't start with a minus")
        );
        assert_eq!(phone_error("0").as_deref(), Some("Can't start with a minus"));
    }

    #[test]
    fn fractional_phone_is_rejected() {
        assert_eq!(
            phone_error("1234567890.5").as_deref(),
            Some("Can't include a decimal point")
        );
    }

    #[test]
    fn non_numeric_phone_is_rejected() {
        assert_eq!(
            phone_error("(272) 790-0888").as_deref(),
            Some("Enter a valid number")
        );
        assert_eq!(phone_error("NaN").as_deref(), Some("Enter a valid number"));
        assert_eq!(phone_error("inf").as_deref(), Some("Enter a valid number"));
    }

    #[test]
    fn phone_bounds_are_inclusive() {
        assert_eq!(phone_error("1000000000"), None);
        assert_eq!(phone_error("9999999999"), None);
        assert_eq!(phone_error("999999999").as_deref(), Some("Must be of 10 digit"));
    }

    #[test]
    fn phone_surrounding_whitespace_is_ignored() {
        let values = FormValues {
            phone_no: " 1234567890 ".into(),
            ..valid_values()
        };
        assert_eq!(validate(&values).unwrap().phone, 1_234_567_890);
    }

    #[test]
    fn phone_inner_whitespace_is_ignored() {
        let values = FormValues {
            phone_no: "123 456 7890".into(),
            ..valid_values()
        };
        let valid = validate(&values).unwrap();
        assert_eq!(valid.phone, 1_234_567_890);
        assert_eq!(valid.to_record(None).phone, "1234567890");
    }

    #[test]
    fn whitespace_only_phone_is_not_a_number() {
        assert_eq!(phone_error("   ").as_deref(), Some("Enter a valid number"));
    }

    #[test]
    fn all_empty_reports_every_field() {
        let errors = validate(&FormValues::default()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[&Field::FirstName], "Firstname is required");
        assert_eq!(errors[&Field::LastName], "Lastname is required");
        assert_eq!(errors[&Field::PhoneNo], "Required");
        assert_eq!(errors[&Field::City], "Required");
        assert_eq!(errors[&Field::State], "Required");
        assert_eq!(errors[&Field::Country], "Required");
    }

    #[test]
    fn name_length_limits() {
        let short = FormValues {
            first_name: "A".into(),
            ..valid_values()
        };
        assert_eq!(validate(&short).unwrap_err()[&Field::FirstName], "Too Short!");

        let long = FormValues {
            last_name: "x".repeat(51),
            ..valid_values()
        };
        assert_eq!(validate(&long).unwrap_err()[&Field::LastName], "Too Long!");

        let edge = FormValues {
            first_name: "x".repeat(50),
            last_name: "xy".into(),
            ..valid_values()
        };
        assert!(validate(&edge).is_ok());
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        let values = FormValues {
            first_name: "Ö".into(),
            ..valid_values()
        };
        assert_eq!(validate(&values).unwrap_err()[&Field::FirstName], "Too Short!");
    }

    #[test]
    fn to_record_maps_fields() {
        let rec = validate(&valid_values()).unwrap().to_record(None);
        assert_eq!(rec.name, Name { first: "Ann".into(), last: "Lee".into() });
        assert_eq!(rec.location.city, "X");
        assert_eq!(rec.location.state, "Y");
        assert_eq!(rec.location.country, "Z");
        assert_eq!(rec.phone, "1234567890");
        assert_eq!(rec.email, None);
    }

    #[test]
    fn to_record_stores_canonical_phone() {
        let values = FormValues {
            phone_no: "1.5e9".into(),
            ..valid_values()
        };
        assert_eq!(validate(&values).unwrap().to_record(None).phone, "1500000000");
    }
}
