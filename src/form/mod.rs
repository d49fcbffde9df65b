mod input;
mod validate;

pub use input::TextInput;
pub use validate::{FieldErrors, validate};

use std::collections::BTreeSet;

use crate::record::PersonRecord;

/// The six inputs of the record dialog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNo,
    Country,
    City,
    State,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FirstName,
        Field::LastName,
        Field::PhoneNo,
        Field::Country,
        Field::City,
        Field::State,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::PhoneNo => "Phone",
            Field::Country => "Country",
            Field::City => "City",
            Field::State => "State",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Raw form contents. An empty string means the field was left blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub phone_no: String,
    pub country: String,
    pub city: String,
    pub state: String,
}

impl FormValues {
    pub fn from_record(record: &PersonRecord) -> Self {
        Self {
            first_name: record.name.first.clone(),
            last_name: record.name.last.clone(),
            phone_no: record.phone.clone(),
            country: record.location.country.clone(),
            city: record.location.city.clone(),
            state: record.location.state.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNo => &self.phone_no,
            Field::Country => &self.country,
            Field::City => &self.city,
            Field::State => &self.state,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::PhoneNo => self.phone_no = value,
            Field::Country => self.country = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
        }
    }
}

/// The open dialog: one input per field, the focused field, and which
/// fields have been visited.
#[derive(Debug, Clone)]
pub struct FormState {
    inputs: [TextInput; 6],
    pub focus: Field,
    touched: BTreeSet<Field>,
}

impl FormState {
    pub fn new(initial: &FormValues) -> Self {
        Self {
            inputs: Field::ALL.map(|f| TextInput::from_text(initial.get(f))),
            focus: Field::FirstName,
            touched: BTreeSet::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(&FormValues::default())
    }

    pub fn values(&self) -> FormValues {
        let mut values = FormValues::default();
        for field in Field::ALL {
            values.set(field, self.input(field).as_string());
        }
        values
    }

    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        &mut self.inputs[self.focus.index()]
    }

    // -- Focus --

    /// Leaving a field marks it touched, like a blur.
    pub fn next_field(&mut self) {
        let next = (self.focus.index() + 1) % Field::ALL.len();
        self.focus_field(Field::ALL[next]);
    }

    pub fn prev_field(&mut self) {
        let len = Field::ALL.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus_field(Field::ALL[prev]);
    }

    pub fn focus_field(&mut self, field: Field) {
        if field != self.focus {
            self.touched.insert(self.focus);
            self.focus = field;
        }
    }

    // -- Touched tracking --

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    /// Errors for the current values, limited to touched fields.
    pub fn visible_errors(&self) -> FieldErrors {
        match validate(&self.values()) {
            Ok(_) => FieldErrors::new(),
            Err(mut errors) => {
                errors.retain(|field, _| self.is_touched(*field));
                errors
            }
        }
    }
}
