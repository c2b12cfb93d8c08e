//! Search bar widget.

use crate::state::InputLine;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Title shown on the search bar border.
pub const SEARCH_TITLE: &str = "Search artists";
/// Title shown while the text fails validation.
pub const INVALID_TITLE: &str = "Search artists (enter a name)";

/// Search bar widget.
///
/// The border turns to the palette's invalid style while the text fails
/// validation. The cursor cell is drawn only while the bar has focus.
pub struct SearchBar<'a> {
    line: &'a InputLine,
    valid: bool,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    /// Create new SearchBar widget.
    pub fn new(line: &'a InputLine, valid: bool, focused: bool, palette: &'a Palette) -> Self {
        Self {
            line,
            valid,
            focused,
            palette,
        }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        if !self.focused {
            return vec![Span::raw(self.line.text.clone())];
        }

        let cursor = self.line.cursor;
        let before: String = self.line.text.chars().take(cursor).collect();
        let mut after = self.line.text.chars().skip(cursor);
        let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".into());
        let rest: String = after.collect();

        vec![
            Span::raw(before),
            Span::styled(cursor_char, self.palette.input_cursor),
            Span::raw(rest),
        ]
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, border_style) = if self.valid {
            (SEARCH_TITLE, self.palette.pane_border(self.focused))
        } else {
            (INVALID_TITLE, self.palette.invalid_border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(border_style);

        Paragraph::new(Line::from(self.spans()))
            .block(block)
            .render(area, buf);
    }
}
