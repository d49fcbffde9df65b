use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// One person entry in the list.
///
/// Decoding is lenient: the sample API nests far more than this, and any
/// missing piece decodes as an empty string rather than failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonRecord {
    pub name: Name,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(deserialize_with = "phone_from_string_or_number")]
    pub phone: String,
}

impl PersonRecord {
    /// "City, State, Country", skipping empty parts.
    pub fn place(&self) -> String {
        [
            self.location.city.as_str(),
            self.location.state.as_str(),
            self.location.country.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn full_name(&self) -> String {
        match (self.name.first.is_empty(), self.name.last.is_empty()) {
            (false, false) => format!("{} {}", self.name.first, self.name.last),
            (false, true) => self.name.first.clone(),
            (true, false) => self.name.last.clone(),
            (true, true) => "(unnamed)".to_string(),
        }
    }
}

/// Wire shape of the sample API: `{ "results": [...], "info": {...} }`.
#[derive(Debug, Deserialize)]
pub struct Batch {
    #[serde(default)]
    pub results: Vec<PersonRecord>,
}

pub fn decode_batch(bytes: &[u8]) -> Result<Vec<PersonRecord>, serde_json::Error> {
    let batch: Batch = serde_json::from_slice(bytes)?;
    Ok(batch.results)
}

fn phone_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Phone {
        Text(String),
        Integer(i64),
        Float(f64),
        Missing(()),
    }

    Ok(match Phone::deserialize(deserializer)? {
        Phone::Text(s) => s,
        Phone::Integer(n) => n.to_string(),
        Phone::Float(f) => f.to_string(),
        Phone::Missing(()) => String::new(),
    })
}

#[cfg(test)]
pub(crate) fn sample_records(count: usize) -> Vec<PersonRecord> {
    (0..count)
        .map(|i| PersonRecord {
            name: Name {
                first: format!("First{i}"),
                last: format!("Last{i}"),
            },
            location: Location {
                city: format!("City{i}"),
                state: format!("State{i}"),
                country: format!("Country{i}"),
            },
            email: Some(format!("user{i}@example.com")),
            phone: format!("55500000{i:02}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "results": [
            {
                "gender": "female",
                "name": { "title": "Ms", "first": "Ann", "last": "Lee" },
                "location": {
                    "street": { "number": 12, "name": "Main St" },
                    "city": "Leeds",
                    "state": "West Yorkshire",
                    "country": "United Kingdom",
                    "postcode": 12345
                },
                "email": "ann.lee@example.com",
                "phone": "017683 48516"
            },
            {
                "name": { "first": "Bo" },
                "phone": 1234567890
            }
        ],
        "info": { "seed": "abc", "results": 2, "page": 1, "version": "1.4" }
    }"#;

    #[test]
    fn decodes_sample_api_payload() {
        let records = decode_batch(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.first, "Ann");
        assert_eq!(records[0].location.country, "United Kingdom");
        assert_eq!(records[0].email.as_deref(), Some("ann.lee@example.com"));
        assert_eq!(records[0].phone, "017683 48516");
    }

    #[test]
    fn missing_fields_decode_as_empty() {
        let records = decode_batch(SAMPLE.as_bytes()).unwrap();
        let bo = &records[1];
        assert_eq!(bo.name.last, "");
        assert_eq!(bo.location, Location::default());
        assert_eq!(bo.email, None);
    }

    #[test]
    fn numeric_phone_becomes_string() {
        let records = decode_batch(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records[1].phone, "1234567890");
    }

    #[test]
    fn payload_without_results_is_empty() {
        let records = decode_batch(br#"{"info": {}}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn non_json_payload_is_an_error() {
        assert!(decode_batch(b"<html>down</html>").is_err());
    }

    #[test]
    fn place_skips_empty_parts() {
        let mut rec = sample_records(1).remove(0);
        assert_eq!(rec.place(), "City0, State0, Country0");
        rec.location.state.clear();
        assert_eq!(rec.place(), "City0, Country0");
    }

    #[test]
    fn full_name_handles_missing_halves() {
        let mut rec = PersonRecord::default();
        assert_eq!(rec.full_name(), "(unnamed)");
        rec.name.last = "Lee".into();
        assert_eq!(rec.full_name(), "Lee");
        rec.name.first = "Ann".into();
        assert_eq!(rec.full_name(), "Ann Lee");
    }
}
