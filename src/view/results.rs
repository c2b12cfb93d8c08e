//! Results pane: status lines or a list of artist cards.

use crate::model::SearchResultItem;
use crate::state::SearchUiState;
use crate::view::constants::CARD_HEIGHT;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown before the first search.
pub const IDLE_HINT: &str = "Type an artist name and press Enter";
/// Shown while a search is in flight.
pub const LOADING_TEXT: &str = "Searching…";
/// Shown when a search matched nothing.
pub const EMPTY_TEXT: &str = "No results found";
/// Thumbnail line for items showing the local placeholder.
pub const NO_IMAGE_TEXT: &str = "no image";

const CURSOR_MARKER: &str = "▶ ";
const NO_MARKER: &str = "  ";

// ===== Geometry =====

/// Number of whole cards that fit in `inner_height` rows.
pub fn visible_cards(inner_height: u16) -> usize {
    usize::from(inner_height / CARD_HEIGHT)
}

/// First card to draw so that `cursor` stays visible.
pub fn visible_offset(cursor: Option<usize>, visible: usize) -> usize {
    match cursor {
        Some(index) if visible > 0 && index >= visible => index + 1 - visible,
        _ => 0,
    }
}

/// Map a terminal cell to the card drawn there.
///
/// `inner` is the pane area inside its border; `offset` and `len` are the
/// first drawn card and the number of items.
pub fn hit_test(inner: Rect, offset: usize, len: usize, column: u16, row: u16) -> Option<usize> {
    let inside = column >= inner.x
        && column < inner.x + inner.width
        && row >= inner.y
        && row < inner.y + inner.height;
    if !inside {
        return None;
    }

    let card = usize::from((row - inner.y) / CARD_HEIGHT);
    if card >= visible_cards(inner.height) {
        return None;
    }
    let index = offset + card;
    (index < len).then_some(index)
}

/// Cut `text` to at most `max_width` display columns, adding an ellipsis
/// when anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

// ===== Widget =====

/// Results pane widget.
pub struct ResultsPane<'a> {
    state: &'a SearchUiState,
    active: Option<&'a SearchResultItem>,
    cursor: Option<usize>,
    offset: usize,
    focused: bool,
    palette: &'a Palette,
}

impl<'a> ResultsPane<'a> {
    /// Create the pane. `cursor` is drawn only while `focused`.
    pub fn new(
        state: &'a SearchUiState,
        active: Option<&'a SearchResultItem>,
        cursor: Option<usize>,
        offset: usize,
        focused: bool,
        palette: &'a Palette,
    ) -> Self {
        Self {
            state,
            active,
            cursor,
            offset,
            focused,
            palette,
        }
    }

    fn card_lines(&self, index: usize, item: &SearchResultItem, width: usize) -> [Line<'static>; 2] {
        let is_active = self.active.is_some_and(|a| a.id == item.id);
        let is_cursor = self.focused && self.cursor == Some(index);

        let base = if is_active {
            self.palette.active_card
        } else {
            Style::default()
        };
        let marker = if is_cursor { CURSOR_MARKER } else { NO_MARKER };
        let text_width = width.saturating_sub(NO_MARKER.width());

        let title = Line::from(vec![
            Span::styled(marker, base),
            Span::styled(truncate_to_width(&item.title, text_width), base),
        ])
        .style(base);

        let thumb = if item.has_placeholder_thumbnail() {
            NO_IMAGE_TEXT.to_string()
        } else {
            truncate_to_width(&item.thumbnail_url, text_width)
        };
        let thumb_style = if is_active { base } else { self.palette.muted };
        let thumbnail = Line::from(vec![
            Span::styled(NO_MARKER, base),
            Span::styled(thumb, thumb_style),
        ])
        .style(base);

        [title, thumbnail]
    }
}

impl Widget for ResultsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.state {
            SearchUiState::Results(items) => format!("Results ({})", items.len()),
            _ => "Results".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(self.palette.pane_border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = match self.state {
            SearchUiState::Idle => vec![Line::styled(IDLE_HINT, self.palette.muted)],
            SearchUiState::Loading => vec![Line::from(LOADING_TEXT)],
            SearchUiState::Empty => vec![Line::from(EMPTY_TEXT)],
            SearchUiState::Error(message) => {
                vec![Line::styled(message.clone(), self.palette.error)]
            }
            SearchUiState::Results(items) => {
                let width = usize::from(inner.width);
                items
                    .iter()
                    .enumerate()
                    .skip(self.offset)
                    .take(visible_cards(inner.height))
                    .flat_map(|(index, item)| self.card_lines(index, item, width))
                    .collect()
            }
        };

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
