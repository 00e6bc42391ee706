use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Board command decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Focus the previous column
    Prev,
    /// Focus the next column
    Next,
    SelectUp,
    SelectDown,
    /// Move the selected task to the next status
    Advance,
    NewTask,
    EditTask,
    Delete,
    Quit,
}

/// Form command decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Confirm,
    Abort,
    Quit,
    /// Forwarded to the active text field
    Edit(KeyEvent),
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn board_action(key: KeyEvent) -> Option<BoardAction> {
    if is_ctrl_c(&key) {
        return Some(BoardAction::Quit);
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    let action = match key.code {
        KeyCode::Left | KeyCode::Char('h') => BoardAction::Prev,
        KeyCode::Right | KeyCode::Char('l') => BoardAction::Next,
        KeyCode::Up | KeyCode::Char('k') => BoardAction::SelectUp,
        KeyCode::Down | KeyCode::Char('j') => BoardAction::SelectDown,
        KeyCode::Char('m') => BoardAction::Advance,
        KeyCode::Char('n') => BoardAction::NewTask,
        KeyCode::Char('e') => BoardAction::EditTask,
        KeyCode::Char('d') => BoardAction::Delete,
        KeyCode::Char('q') => BoardAction::Quit,
        _ => return None,
    };
    Some(action)
}

pub fn form_action(key: KeyEvent) -> FormAction {
    if is_ctrl_c(&key) {
        return FormAction::Quit;
    }
    match key.code {
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::ALT) => FormAction::Confirm,
        KeyCode::Esc => FormAction::Abort,
        _ => FormAction::Edit(key),
    }
}
