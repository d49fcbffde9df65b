use ropey::Rope;
use unicode_width::UnicodeWidthChar;

/// A single-line text input backed by a rope.
///
/// The cursor is a char index in `0..=len_chars()`. Newlines are never
/// inserted, so the rope always holds exactly one line.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    rope: Rope,
    cursor: usize,
}

impl TextInput {
    /// Start with `text` and the cursor at its end.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(&single_line(text));
        let cursor = rope.len_chars();
        Self { rope, cursor }
    }

    pub fn as_string(&self) -> String {
        self.rope.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Terminal cells taken by the text left of the cursor.
    pub fn cursor_width(&self) -> usize {
        self.rope
            .slice(..self.cursor())
            .chars()
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    // -- Mutation --

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' || ch == '\r' {
            return;
        }
        self.rope.insert_char(self.cursor, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Does nothing at column 0.
    pub fn delete_char_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.rope.remove(self.cursor - 1..self.cursor);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor. Does nothing at the end.
    pub fn delete_char_at(&mut self) {
        if self.cursor >= self.len_chars() {
            return;
        }
        self.rope.remove(self.cursor..self.cursor + 1);
    }

    /// Delete back to the start of the previous word, shell `Ctrl-W` style:
    /// trailing whitespace first, then one run of same-class characters.
    pub fn delete_word_back(&mut self) {
        let chars: Vec<char> = self.rope.chars().collect();
        let end = self.cursor;
        let mut pos = end;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        if pos > 0 {
            let class = char_class(chars[pos - 1]);
            while pos > 0 && char_class(chars[pos - 1]) == class {
                pos -= 1;
            }
        }

        if pos < end {
            self.rope.remove(pos..end);
            self.cursor = pos;
        }
    }

    // -- Cursor movement --

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len_chars() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len_chars();
    }
}

/// 0 = whitespace, 1 = word (alphanumeric / underscore), 2 = punctuation.
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_alphanumeric() || c == '_' {
        1
    } else {
        2
    }
}

fn single_line(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_puts_cursor_at_end() {
        let input = TextInput::from_text("hello");
        assert_eq!(input.cursor(), 5);
        assert_eq!(input.as_string(), "hello");
    }

    #[test]
    fn from_text_strips_newlines() {
        let input = TextInput::from_text("a\nb\r\n");
        assert_eq!(input.as_string(), "ab");
    }

    #[test]
    fn insert_char_mid_line() {
        let mut input = TextInput::from_text("hello");
        input.move_home();
        input.move_right();
        input.move_right();
        input.insert_char('X');
        assert_eq!(input.as_string(), "heXllo");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn insert_newline_is_ignored() {
        let mut input = TextInput::default();
        input.insert_char('\n');
        assert_eq!(input.len_chars(), 0);
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_char_back_mid_line() {
        let mut input = TextInput::from_text("hello");
        input.move_left();
        input.move_left();
        input.delete_char_back();
        assert_eq!(input.as_string(), "helo");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_char_back_at_start_does_nothing() {
        let mut input = TextInput::from_text("hello");
        input.move_home();
        input.delete_char_back();
        assert_eq!(input.as_string(), "hello");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_char_at_removes_under_cursor() {
        let mut input = TextInput::from_text("abc");
        input.move_home();
        input.delete_char_at();
        assert_eq!(input.as_string(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_char_at_end_does_nothing() {
        let mut input = TextInput::from_text("abc");
        input.delete_char_at();
        assert_eq!(input.as_string(), "abc");
    }

    #[test]
    fn delete_word_back_removes_last_word_and_space() {
        let mut input = TextInput::from_text("New York  ");
        input.delete_word_back();
        assert_eq!(input.as_string(), "New ");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn delete_word_back_stops_at_punctuation() {
        let mut input = TextInput::from_text("foo.bar");
        input.delete_word_back();
        assert_eq!(input.as_string(), "foo.");
        input.delete_word_back();
        assert_eq!(input.as_string(), "foo");
    }

    #[test]
    fn delete_word_back_at_start_does_nothing() {
        let mut input = TextInput::from_text("word");
        input.move_home();
        input.delete_word_back();
        assert_eq!(input.as_string(), "word");
    }

    #[test]
    fn move_right_stops_at_end() {
        let mut input = TextInput::from_text("ab");
        for _ in 0..10 {
            input.move_right();
        }
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn handles_multibyte_chars() {
        let mut input = TextInput::from_text("Zürich");
        input.move_home();
        input.move_right();
        input.move_right();
        input.delete_char_back();
        assert_eq!(input.as_string(), "Zrich");
        assert_eq!(input.len_chars(), 5);
    }

    #[test]
    fn cursor_width_counts_wide_chars_as_two_cells() {
        let mut input = TextInput::from_text("東京x");
        assert_eq!(input.cursor_width(), 5);
        input.move_left();
        assert_eq!(input.cursor_width(), 4);
        input.move_home();
        assert_eq!(input.cursor_width(), 0);
    }
}
