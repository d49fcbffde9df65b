use super::EditorState;

impl EditorState {
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor < self.max_row() {
            self.cursor += 1;
        }
    }

    pub fn goto_top(&mut self) {
        self.cursor = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.cursor = self.max_row();
    }

    /// Ensure scroll_offset keeps the cursor visible within `visible_rows`.
    pub fn adjust_scroll(&mut self, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        if self.cursor >= self.scroll_offset + visible_rows {
            self.scroll_offset = self.cursor - visible_rows + 1;
        }
    }

    /// The last valid cursor row, 0 for an empty list.
    pub(crate) fn max_row(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    /// Pull the cursor back inside the list after it shrinks.
    pub(crate) fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.max_row());
    }
}
