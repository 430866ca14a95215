//! Form state: the two text fields and keyboard focus.

/// Single-line text field with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars (0..=len).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Inserts text at the cursor. Newlines are dropped (single-line field).
    ///
    /// Returns true if the value changed.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if text.is_empty() {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.value, self.cursor);
        self.value.insert_str(byte_idx, &text);
        self.cursor += text.chars().count();
        true
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf))
    }

    /// Backspace semantics.
    pub fn delete_prev_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.value, self.cursor - 1);
        let end = char_to_byte_index(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete-key semantics.
    pub fn delete_next_char(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let start = char_to_byte_index(&self.value, self.cursor);
        let end = char_to_byte_index(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
        true
    }

    /// Clears everything before the cursor (Ctrl+U).
    pub fn delete_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let end = char_to_byte_index(&self.value, self.cursor);
        self.value.replace_range(..end, "");
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }
}

fn char_to_byte_index(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map_or(text.len(), |(i, _)| i)
}

/// Which field an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Keyboard focus on the login card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Email => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Email => Focus::Submit,
            Focus::Password => Focus::Email,
            Focus::Submit => Focus::Password,
        }
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Email => Some(Field::Email),
            Focus::Password => Some(Field::Password),
            Focus::Submit => None,
        }
    }
}

/// Email and password inputs plus focus.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub email: TextField,
    pub password: TextField,
    pub focus: Focus,
}

impl FormState {
    pub fn field(&self, field: Field) -> &TextField {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextField {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor() {
        let mut field = TextField::default();
        assert!(field.insert_str("kumar"));
        assert!(field.insert_char('@'));
        assert_eq!(field.value(), "kumar@");
        assert_eq!(field.cursor(), 6);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = TextField::default();
        field.insert_str("kuar");
        field.move_left();
        field.move_left();
        field.insert_char('m');
        assert_eq!(field.value(), "kumar");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_insert_drops_newlines() {
        let mut field = TextField::default();
        assert!(field.insert_str("a\nb\r\n"));
        assert_eq!(field.value(), "ab");
        assert!(!field.insert_str("\n"));
    }

    #[test]
    fn test_delete_prev_and_next() {
        let mut field = TextField::default();
        field.insert_str("héllo");
        assert!(field.delete_prev_char());
        assert_eq!(field.value(), "héll");

        field.move_home();
        assert!(!field.delete_prev_char());
        field.move_right();
        assert!(field.delete_next_char());
        assert_eq!(field.value(), "hll");

        field.move_end();
        assert!(!field.delete_next_char());
    }

    #[test]
    fn test_delete_to_start() {
        let mut field = TextField::default();
        field.insert_str("12345");
        field.move_left();
        assert!(field.delete_to_start());
        assert_eq!(field.value(), "5");
        assert_eq!(field.cursor(), 0);
        assert!(!field.delete_to_start());
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut field = TextField::default();
        field.insert_str("ab");
        field.move_right();
        assert_eq!(field.cursor(), 2);
        field.move_home();
        field.move_left();
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::Email.next(), Focus::Password);
        assert_eq!(Focus::Submit.next(), Focus::Email);
        assert_eq!(Focus::Email.prev(), Focus::Submit);
        assert_eq!(Focus::Submit.field(), None);
        assert_eq!(Focus::Password.field(), Some(Field::Password));
    }
}
