use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::rsvp::{ATTENDING_FIELD, FULL_NAME_FIELD, PLUS_ONE_FIELD, PLUS_ONE_NAME_FIELD};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Attending,
    PlusOne,
    PlusOneName,
    Submit,
}

impl FieldId {
    pub const ORDER: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Attending,
        FieldId::PlusOne,
        FieldId::PlusOneName,
        FieldId::Submit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full name",
            FieldId::Attending => "Attending?",
            FieldId::PlusOne => "Bringing a plus-one?",
            FieldId::PlusOneName => "Plus-one's name",
            FieldId::Submit => "Submit",
        }
    }

    /// Name of the matching form input, if any.
    pub fn input_name(self) -> Option<&'static str> {
        match self {
            FieldId::FullName => Some(FULL_NAME_FIELD),
            FieldId::Attending => Some(ATTENDING_FIELD),
            FieldId::PlusOne => Some(PLUS_ONE_FIELD),
            FieldId::PlusOneName => Some(PLUS_ONE_NAME_FIELD),
            FieldId::Submit => None,
        }
    }

    pub fn is_radio(self) -> bool {
        matches!(self, FieldId::Attending | FieldId::PlusOne)
    }
}

/// Single-line text buffer; the cursor counts chars, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        let len = self.value.chars().count();
        match key.code {
            KeyCode::Char(ch) if !ch.is_control() => {
                let at = self.byte_offset(self.cursor);
                self.value.insert(at, ch);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let at = self.byte_offset(self.cursor - 1);
                self.value.remove(at);
                self.cursor -= 1;
                true
            }
            KeyCode::Delete if self.cursor < len => {
                let at = self.byte_offset(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                true
            }
            KeyCode::Right if self.cursor < len => {
                self.cursor += 1;
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = len;
                true
            }
            _ => false,
        }
    }

    /// Text before the cursor, used to place the terminal caret.
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.byte_offset(self.cursor)]
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.value
            .char_indices()
            .nth(chars)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn inserts_at_cursor_with_multibyte_chars() {
        let mut input = TextInput::default();
        for ch in "Zë".chars() {
            assert!(input.handle_key(&press(KeyCode::Char(ch))));
        }
        assert!(input.handle_key(&press(KeyCode::Left)));
        assert!(input.handle_key(&press(KeyCode::Char('o'))));
        assert_eq!(input.value(), "Zoë");
        assert_eq!(input.before_cursor(), "Zo");
    }

    #[test]
    fn backspace_and_delete_edit_around_cursor() {
        let mut input = TextInput::default();
        input.set("abc");
        assert!(input.handle_key(&press(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");
        assert!(input.handle_key(&press(KeyCode::Home)));
        assert!(input.handle_key(&press(KeyCode::Delete)));
        assert_eq!(input.value(), "b");
        assert!(!input.handle_key(&press(KeyCode::Backspace)));
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut input = TextInput::default();
        let chord = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!input.handle_key(&chord));
        assert!(input.value().is_empty());
    }
}
