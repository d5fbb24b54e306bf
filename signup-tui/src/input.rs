//! Single-line text input buffer.

use crate::event::{Key, Modifiers};

/// Mask character for secret inputs.
const MASK: char = '•';

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled.
    Ignored,
}

/// Text content and cursor of one input. The cursor is a character index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text as it should be drawn.
    pub fn display(&self, masked: bool) -> String {
        if masked {
            std::iter::repeat_n(MASK, self.text.chars().count()).collect()
        } else {
            self.text.clone()
        }
    }

    /// Handle a key press for text editing.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                TextEditResult::Changed
            }
            Key::Backspace => self.changed_if(Self::delete_back),
            Key::Delete => self.changed_if(Self::delete_forward),
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                TextEditResult::Handled
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                TextEditResult::Handled
            }
            Key::Home => {
                self.cursor = 0;
                TextEditResult::Handled
            }
            Key::End => {
                self.cursor = self.len();
                TextEditResult::Handled
            }
            _ => TextEditResult::Ignored,
        }
    }

    fn changed_if(&mut self, edit: fn(&mut Self) -> bool) -> TextEditResult {
        if edit(self) {
            TextEditResult::Changed
        } else {
            TextEditResult::Handled
        }
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(byte_pos);
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
        alt: false,
    };

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_key(Key::Char(c), Modifiers::default());
        }
    }

    fn filled(s: &str) -> TextInput {
        let mut input = TextInput::default();
        type_str(&mut input, s);
        input
    }

    #[test]
    fn test_typing_appends() {
        let mut input = TextInput::default();
        type_str(&mut input, "Alice");
        assert_eq!(input.text(), "Alice");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_insert_in_middle_multibyte() {
        let mut input = filled("Zoë");
        input.handle_key(Key::Left, Modifiers::default());
        input.handle_key(Key::Char('x'), Modifiers::default());
        assert_eq!(input.text(), "Zoxë");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = filled("abcd");
        assert_eq!(input.handle_key(Key::Backspace, Modifiers::default()), TextEditResult::Changed);
        assert_eq!(input.text(), "abc");

        input.handle_key(Key::Home, Modifiers::default());
        assert_eq!(input.handle_key(Key::Backspace, Modifiers::default()), TextEditResult::Handled);
        assert_eq!(input.handle_key(Key::Delete, Modifiers::default()), TextEditResult::Changed);
        assert_eq!(input.text(), "bc");

        input.handle_key(Key::End, Modifiers::default());
        assert_eq!(input.handle_key(Key::Delete, Modifiers::default()), TextEditResult::Handled);
    }

    #[test]
    fn test_cursor_clamped() {
        let mut input = filled("ab");
        input.handle_key(Key::Right, Modifiers::default());
        assert_eq!(input.cursor(), 2);
        for _ in 0..5 {
            input.handle_key(Key::Left, Modifiers::default());
        }
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_ctrl_chars_ignored() {
        let mut input = TextInput::default();
        assert_eq!(input.handle_key(Key::Char('a'), CTRL), TextEditResult::Ignored);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_masked_display() {
        let input = filled("Xk7mQzpt");
        assert_eq!(input.display(true), "••••••••");
        assert_eq!(input.display(false), "Xk7mQzpt");
    }

    #[test]
    fn test_clear() {
        let mut input = filled("abc");
        input.clear();
        assert_eq!(input, TextInput::default());
    }
}
