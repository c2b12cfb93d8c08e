//! Detail pane: the selected artist's record.

use crate::model::ArtistDetail;
use crate::state::DetailUiState;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Shown while no card is selected.
pub const IDLE_TEXT: &str = "Select an artist to see details";
/// Shown while a detail fetch is in flight.
pub const LOADING_TEXT: &str = "Loading details…";

/// Text lines for a loaded record.
///
/// Nationality and biography lines are omitted when absent.
pub fn detail_lines(detail: &ArtistDetail, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(detail.heading(), palette.heading)];

    if let Some(nationality) = &detail.nationality {
        lines.push(Line::from(vec![
            Span::styled("Nationality: ", palette.muted),
            Span::raw(nationality.clone()),
        ]));
    }

    if let Some(biography) = &detail.biography {
        lines.push(Line::default());
        lines.extend(biography.lines().map(|l| Line::from(l.to_string())));
    }

    lines
}

/// Detail pane widget.
pub struct DetailPane<'a> {
    state: &'a DetailUiState,
    palette: &'a Palette,
}

impl<'a> DetailPane<'a> {
    /// Create the pane.
    pub fn new(state: &'a DetailUiState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Details")
            .border_style(self.palette.border);

        let lines = match self.state {
            DetailUiState::Idle => vec![Line::styled(IDLE_TEXT, self.palette.muted)],
            DetailUiState::Loading(_) => vec![Line::from(LOADING_TEXT)],
            DetailUiState::Error(message) => {
                vec![Line::styled(message.clone(), self.palette.error)]
            }
            DetailUiState::Ready(detail) => detail_lines(detail, self.palette),
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
