use tracing::{debug, info};

use super::EditorState;
use crate::error::EditorError;
use crate::form::{FormState, FormValues, validate};
use crate::mode::Mode;

impl EditorState {
    pub fn open_create_form(&mut self) {
        self.selected = None;
        self.menu_open = false;
        self.mode = Mode::CreatingNew;
        self.form = Some(FormState::empty());
        debug!("opened create form");
    }

    pub fn open_edit_form(&mut self, index: usize) -> Result<(), EditorError> {
        let record = self.records.get(index).ok_or(EditorError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })?;
        let initial = FormValues::from_record(record);
        self.selected = Some(index);
        self.menu_open = false;
        self.mode = Mode::EditingSelected;
        self.form = Some(FormState::new(&initial));
        debug!("opened edit form for record {index}");
        Ok(())
    }

    /// Submit whatever the open form currently holds.
    pub fn submit(&mut self) -> Result<(), EditorError> {
        let values = self
            .form
            .as_ref()
            .ok_or(EditorError::NoOpenForm)?
            .values();
        self.submit_values(values)
    }

    /// Validate `values` and write them according to `mode`: append when
    /// creating, replace in place when editing.
    pub fn submit_values(&mut self, values: FormValues) -> Result<(), EditorError> {
        let form = self.form.as_mut().ok_or(EditorError::NoOpenForm)?;
        let valid = match validate(&values) {
            Ok(valid) => valid,
            Err(errors) => {
                form.touch_all();
                return Err(EditorError::Invalid(errors));
            }
        };

        match self.mode {
            Mode::CreatingNew => {
                let record = valid.to_record(None);
                info!("added {}", record.full_name());
                self.set_status(format!("Added {}", record.full_name()));
                self.records.push(record);
                self.cursor = self.records.len() - 1;
            }
            Mode::EditingSelected => {
                let index = self.checked_selection()?;
                let email = self.records[index].email.clone();
                let record = valid.to_record(email);
                info!("updated record {index}: {}", record.full_name());
                self.set_status(format!("Updated {}", record.full_name()));
                self.records[index] = record;
                self.cursor = index;
            }
            // A form is never open while viewing.
            Mode::Viewing => return Err(EditorError::NoOpenForm),
        }

        self.close_form();
        Ok(())
    }

    /// Drop the form and its edits. `records` is not touched.
    pub fn close_form(&mut self) {
        self.form = None;
        self.selected = None;
        self.mode = Mode::Viewing;
    }

    /// The selection, checked against the current list.
    pub(crate) fn checked_selection(&self) -> Result<usize, EditorError> {
        let index = self.selected.ok_or(EditorError::NoSelection)?;
        if index >= self.records.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(index)
    }
}
