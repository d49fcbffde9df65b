mod dialog;
mod keymap;
mod list;
mod menu;

pub use keymap::handle_key;

use tracing::{error, info, warn};

use crate::error::EditorError;
use crate::form::FormState;
use crate::loader::LoadResult;
use crate::mode::Mode;
use crate::record::PersonRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed,
}

/// Everything the UI can ask the editor to do.
#[derive(Debug)]
pub enum Action {
    Loaded(LoadResult),

    // List
    MoveUp,
    MoveDown,
    GotoTop,
    GotoBottom,

    // Menu
    OpenMenu,
    CloseMenu,
    EditSelected,
    DeleteSelected,

    // Form lifecycle
    OpenCreateForm,
    OpenEditForm(usize),
    Submit,
    CloseForm,

    // Form editing
    NextField,
    PrevField,
    Input(char),
    Backspace,
    Delete,
    DeleteWordBack,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    Quit,
    Noop,
}

pub struct EditorState {
    pub records: Vec<PersonRecord>,
    /// Target of a pending Edit/Delete. Always a valid index when `Some`.
    pub selected: Option<usize>,
    pub mode: Mode,
    /// `Some` exactly when `mode` is not `Viewing`.
    pub form: Option<FormState>,
    pub menu_open: bool,
    /// Highlighted row.
    pub cursor: usize,
    pub scroll_offset: usize,
    pub load: LoadState,
    pub status: Option<String>,
    pub running: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            selected: None,
            mode: Mode::Viewing,
            form: None,
            menu_open: false,
            cursor: 0,
            scroll_offset: 0,
            load: LoadState::Pending,
            status: None,
            running: true,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Apply the outcome of the startup fetch. Only the first outcome counts.
    pub fn load(&mut self, result: LoadResult) {
        if self.load != LoadState::Pending {
            warn!("ignoring a second load result");
            return;
        }
        match result {
            Ok(records) => {
                info!("loaded {} records", records.len());
                self.set_status(format!("Loaded {} users", records.len()));
                self.records = records;
                self.load = LoadState::Loaded;
            }
            Err(e) => {
                error!("failed to load records: {e}");
                self.records.clear();
                self.set_status(format!("Could not load users: {e}"));
                self.load = LoadState::Failed;
            }
        }
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// Apply one action. Rejected actions leave `records` untouched.
    pub fn update(&mut self, action: Action) -> Result<(), EditorError> {
        match action {
            Action::Loaded(result) => self.load(result),

            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::GotoTop => self.goto_top(),
            Action::GotoBottom => self.goto_bottom(),

            Action::OpenMenu => self.open_menu(),
            Action::CloseMenu => self.close_menu(),
            Action::EditSelected => self.edit_selected()?,
            Action::DeleteSelected => self.delete_selected()?,

            Action::OpenCreateForm => self.open_create_form(),
            Action::OpenEditForm(index) => self.open_edit_form(index)?,
            Action::Submit => self.submit()?,
            Action::CloseForm => self.close_form(),

            Action::NextField => self.with_form(FormState::next_field)?,
            Action::PrevField => self.with_form(FormState::prev_field)?,
            Action::Input(ch) => self.with_form(|f| f.focused_input_mut().insert_char(ch))?,
            Action::Backspace => self.with_form(|f| f.focused_input_mut().delete_char_back())?,
            Action::Delete => self.with_form(|f| f.focused_input_mut().delete_char_at())?,
            Action::DeleteWordBack => {
                self.with_form(|f| f.focused_input_mut().delete_word_back())?;
            }
            Action::CursorLeft => self.with_form(|f| f.focused_input_mut().move_left())?,
            Action::CursorRight => self.with_form(|f| f.focused_input_mut().move_right())?,
            Action::CursorHome => self.with_form(|f| f.focused_input_mut().move_home())?,
            Action::CursorEnd => self.with_form(|f| f.focused_input_mut().move_end())?,

            Action::Quit => self.quit(),
            Action::Noop => {}
        }
        Ok(())
    }

    /// Like [`update`](Self::update), but a rejection is logged and shown
    /// in the status bar instead of returned.
    pub fn dispatch(&mut self, action: Action) {
        if let Err(e) = self.update(action) {
            match &e {
                EditorError::Invalid(errors) => {
                    info!("submission blocked: {errors:?}");
                    self.set_status(format!("Cannot save: {e}"));
                }
                _ => {
                    warn!("rejected action: {e}");
                    self.set_status(e.to_string());
                }
            }
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    fn with_form(&mut self, f: impl FnOnce(&mut FormState)) -> Result<(), EditorError> {
        let form = self.form.as_mut().ok_or(EditorError::NoOpenForm)?;
        f(form);
        Ok(())
    }
}

/// Pure form of [`EditorState::dispatch`]: `state × action → state`.
#[cfg(test)]
pub fn reduce(mut state: EditorState, action: Action) -> EditorState {
    state.dispatch(action);
    state
}

#[cfg(test)]
pub(crate) fn test_state(count: usize) -> EditorState {
    let mut state = EditorState::new();
    state.load(Ok(crate::record::sample_records(count)));
    state
}
