//! Key handling: crossterm key events to form actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

impl Key {
    /// Convert a crossterm key code, dropping keys the form has no use for.
    pub fn from_code(code: KeyCode) -> Option<Self> {
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };
        Some(key)
    }
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// What a key press asks the form to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Text editing inside the focused input.
    Edit(Key, Modifiers),
    FocusNext,
    FocusPrev,
    Submit,
    Reset,
    Quit,
}

/// Map a key to an action.
pub fn action_for(key: Key, modifiers: Modifiers) -> Action {
    match key {
        Key::Escape => Action::Quit,
        Key::Char('c') if modifiers.ctrl => Action::Quit,
        Key::Char('r') if modifiers.ctrl => Action::Reset,
        Key::Enter => Action::Submit,
        Key::Tab | Key::Down => Action::FocusNext,
        Key::BackTab | Key::Up => Action::FocusPrev,
        _ => Action::Edit(key, modifiers),
    }
}

/// Translate a raw crossterm key event. Releases and repeats are ignored.
pub fn translate(event: KeyEvent) -> Option<Action> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let key = Key::from_code(event.code)?;
    let action = action_for(key, event.modifiers.into());
    log::trace!("key {:?} -> {:?}", event.code, action);
    Some(action)
}
