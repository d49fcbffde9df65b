use super::{Action, EditorState, LoadState};
use crate::mode::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into an action for the current state.
pub fn handle_key(state: &EditorState, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Noop;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match state.mode {
        Mode::Viewing if state.load == LoadState::Pending => handle_loading_key(key),
        Mode::Viewing if state.menu_open => handle_menu_key(key),
        Mode::Viewing => handle_list_key(state, key),
        Mode::CreatingNew | Mode::EditingSelected => handle_form_key(key),
    }
}

fn handle_loading_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Noop,
    }
}

fn handle_list_key(state: &EditorState, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Movement
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GotoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GotoBottom,

        // Record actions
        KeyCode::Char('n') => Action::OpenCreateForm,
        KeyCode::Char('e') if !state.records.is_empty() => Action::OpenEditForm(state.cursor),
        KeyCode::Char('m') | KeyCode::Enter => Action::OpenMenu,

        _ => Action::Noop,
    }
}

fn handle_menu_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('e') | KeyCode::Enter => Action::EditSelected,
        KeyCode::Char('d') | KeyCode::Char('x') => Action::DeleteSelected,
        KeyCode::Char('m') | KeyCode::Esc => Action::CloseMenu,
        _ => Action::Noop,
    }
}

fn handle_form_key(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Action::CloseForm,
        KeyCode::Enter => Action::Submit,
        KeyCode::Char('s') if ctrl => Action::Submit,
        KeyCode::Char('w') if ctrl => Action::DeleteWordBack,

        // Field focus
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,

        // In-field editing
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,

        // Printable characters
        KeyCode::Char(c) if !ctrl => Action::Input(c),

        _ => Action::Noop,
    }
}
