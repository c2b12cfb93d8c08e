//! Search bar editing (pure state transitions).
//!
//! All functions are pure: they take the line by value and return the
//! updated line. The cursor is a character index, never a byte index.

/// Text being typed into the search bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputLine {
    /// Current text.
    pub text: String,
    /// Cursor position in characters, `0..=text.chars().count()`.
    pub cursor: usize,
}

impl InputLine {
    /// Line holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Insert a character at the cursor and advance it.
pub fn insert_char(mut line: InputLine, ch: char) -> InputLine {
    let at = line.byte_offset(line.cursor);
    line.text.insert(at, ch);
    line.cursor += 1;
    line
}

/// Delete the character before the cursor. No-op at position 0.
pub fn backspace(mut line: InputLine) -> InputLine {
    if line.cursor == 0 {
        return line;
    }
    let at = line.byte_offset(line.cursor - 1);
    line.text.remove(at);
    line.cursor -= 1;
    line
}

/// Delete the character under the cursor. No-op at the end.
pub fn delete(mut line: InputLine) -> InputLine {
    if line.cursor >= line.char_len() {
        return line;
    }
    let at = line.byte_offset(line.cursor);
    line.text.remove(at);
    line
}

/// Move the cursor left, saturating at 0.
pub fn cursor_left(line: InputLine) -> InputLine {
    InputLine {
        cursor: line.cursor.saturating_sub(1),
        ..line
    }
}

/// Move the cursor right, saturating at the end of the text.
pub fn cursor_right(line: InputLine) -> InputLine {
    let max = line.char_len();
    InputLine {
        cursor: (line.cursor + 1).min(max),
        ..line
    }
}

/// Move the cursor to the start.
pub fn cursor_home(line: InputLine) -> InputLine {
    InputLine { cursor: 0, ..line }
}

/// Move the cursor to the end.
pub fn cursor_end(line: InputLine) -> InputLine {
    let cursor = line.char_len();
    InputLine { cursor, ..line }
}

/// Clear the line.
pub fn clear(_line: InputLine) -> InputLine {
    InputLine::default()
}
