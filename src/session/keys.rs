//! Key model and the binding table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A decoded key press: either a printable character or a named key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// A letter pressed with Ctrl, lowercased.
    Ctrl(char),
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Enter,
    Tab,
    Esc,
    F(u8),
}

impl Key {
    /// Translate a crossterm key event. Keys with no binding and no
    /// character yield `None`.
    #[must_use]
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let key = match event.code {
            KeyCode::Char(c) if ctrl => Self::Ctrl(c.to_ascii_lowercase()),
            KeyCode::Char('\u{7f}' | '\u{8}') => Self::Backspace,
            KeyCode::Char(c) => Self::Char(c),
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Home => Self::Home,
            KeyCode::End => Self::End,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Delete => Self::Delete,
            KeyCode::Enter => Self::Enter,
            KeyCode::Tab => Self::Tab,
            KeyCode::Esc => Self::Esc,
            KeyCode::F(n) => Self::F(n),
            _ => return None,
        };
        Some(key)
    }
}

/// What a key does in the editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    /// Split the line, or save in single-row entry.
    Enter,
    Tab,
    DeleteToEnd,
    DeleteToStart,
    Help,
    Save,
    Cancel,
    Abort,
    Insert(char),
    Ignore,
}

/// Named bindings first; anything else printable is typed.
#[must_use]
pub fn action_for(key: Key) -> Action {
    if let Some(action) = bound_action(key) {
        return action;
    }
    match key {
        Key::Char(c) if !c.is_control() => Action::Insert(c),
        _ => Action::Ignore,
    }
}

fn bound_action(key: Key) -> Option<Action> {
    let action = match key {
        Key::Left => Action::Left,
        Key::Right => Action::Right,
        Key::Up => Action::Up,
        Key::Down => Action::Down,
        Key::Home => Action::Home,
        Key::End => Action::End,
        Key::PageUp => Action::PageUp,
        Key::PageDown => Action::PageDown,
        Key::Backspace | Key::Ctrl('h') => Action::Backspace,
        Key::Delete => Action::Delete,
        Key::Enter | Key::Ctrl('j' | 'm') | Key::Char('\n' | '\r') => Action::Enter,
        Key::Tab | Key::Char('\t') => Action::Tab,
        Key::F(1) => Action::Help,
        Key::F(2) | Key::Ctrl('x') => Action::Save,
        Key::F(5) | Key::Esc => Action::Cancel,
        Key::Ctrl('k') => Action::DeleteToEnd,
        Key::Ctrl('u') => Action::DeleteToStart,
        Key::Ctrl('c' | 'd') => Action::Abort,
        _ => return None,
    };
    Some(action)
}

/// Lines of the help popup.
pub const HELP_LINES: &[&str] = &[
    "Save and exit                 : F2 or Ctrl-X",
    "                                (Enter in single-line entry)",
    "Exit without saving           : F5 or Esc",
    "Abort                         : Ctrl-C or Ctrl-D",
    "Cursor movement               : Arrow keys",
    "Move to beginning of line     : Home",
    "Move to end of line           : End",
    "Page up / page down           : PgUp / PgDn",
    "Delete char left of cursor    : Backspace",
    "Delete char under cursor      : Del",
    "Insert line at cursor         : Enter",
    "Insert four spaces            : Tab",
    "Delete to end of line         : Ctrl-K",
    "Delete to beginning of line   : Ctrl-U",
    "Help                          : F1",
];
