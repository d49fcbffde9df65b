use tracing::info;

use super::EditorState;
use crate::error::EditorError;

impl EditorState {
    /// Target the highlighted row and offer Edit/Delete for it.
    pub fn open_menu(&mut self) {
        if self.records.is_empty() {
            return;
        }
        self.selected = Some(self.cursor);
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
        self.selected = None;
    }

    pub fn edit_selected(&mut self) -> Result<(), EditorError> {
        let index = self.checked_selection()?;
        self.open_edit_form(index)
    }

    /// Remove the selected record. Later records shift down by one.
    pub fn delete_selected(&mut self) -> Result<(), EditorError> {
        let index = self.checked_selection()?;
        let removed = self.records.remove(index);
        info!("deleted record {index}: {}", removed.full_name());
        self.set_status(format!("Deleted {}", removed.full_name()));
        self.selected = None;
        self.menu_open = false;
        self.clamp_cursor();
        Ok(())
    }
}
