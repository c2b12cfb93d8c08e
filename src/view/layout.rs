//! Screen layout rendering.
//!
//! Search bar (top), results (left), details (right), status bar (bottom).
//! Area calculation is pure so the event loop can hit-test mouse clicks
//! against the same rectangles that were drawn.

use crate::state::{FocusPane, InputLine, SearchUiState, Snapshot};
use crate::view::constants::{RESULTS_WIDTH_PERCENT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::detail_pane::DetailPane;
use crate::view::results::{visible_cards, visible_offset, ResultsPane};
use crate::view::search_bar::SearchBar;
use crate::view::styles::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rectangles of every pane for one frame size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Search bar including its border.
    pub search: Rect,
    /// Results pane including its border.
    pub results: Rect,
    /// Detail pane including its border.
    pub detail: Rect,
    /// One-line status bar.
    pub status: Rect,
}

impl ScreenAreas {
    /// Results area inside the pane border, where cards are drawn.
    pub fn results_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.results)
    }
}

/// Split `area` into the four panes.
pub fn calculate_areas(area: Rect) -> ScreenAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(RESULTS_WIDTH_PERCENT),
            Constraint::Percentage(100 - RESULTS_WIDTH_PERCENT),
        ])
        .split(vertical[1]);

    ScreenAreas {
        search: vertical[0],
        results: horizontal[0],
        detail: horizontal[1],
        status: vertical[2],
    }
}

/// Everything one frame draws.
pub struct ScreenModel<'a> {
    /// Published controller state.
    pub snapshot: &'a Snapshot,
    /// Search bar contents.
    pub input: &'a InputLine,
    /// Pane receiving keys.
    pub focus: FocusPane,
    /// Results cursor row, if any.
    pub cursor: Option<usize>,
    /// Styles.
    pub palette: &'a Palette,
}

/// First card drawn in the results pane for this model and layout.
pub fn results_offset(model: &ScreenModel<'_>, areas: &ScreenAreas) -> usize {
    let visible = visible_cards(areas.results_inner().height);
    visible_offset(model.cursor, visible)
}

/// Status bar text: what the results show plus the key hints for the focused pane.
pub fn status_text(snapshot: &Snapshot, focus: FocusPane) -> String {
    let summary = match (&snapshot.search, snapshot.query.as_deref()) {
        (SearchUiState::Loading, Some(q)) => format!("Searching \"{q}\""),
        (SearchUiState::Results(items), Some(q)) => {
            format!("{} result(s) for \"{q}\"", items.len())
        }
        (SearchUiState::Empty, Some(q)) => format!("No results for \"{q}\""),
        (SearchUiState::Error(msg), _) => msg.clone(),
        _ => "Ready".to_string(),
    };

    let hints = match focus {
        FocusPane::Search => "Enter search · Tab results · Esc clear · Ctrl+C quit",
        FocusPane::Results => "↑↓ move · Enter select · Tab search · q quit",
    };

    format!("{summary} | {hints}")
}

/// Render the whole screen. Returns the areas that were used.
pub fn render_layout(frame: &mut Frame, model: &ScreenModel<'_>) -> ScreenAreas {
    let areas = calculate_areas(frame.area());
    let offset = results_offset(model, &areas);

    frame.render_widget(
        SearchBar::new(
            model.input,
            model.snapshot.input_valid,
            model.focus == FocusPane::Search,
            model.palette,
        ),
        areas.search,
    );

    frame.render_widget(
        ResultsPane::new(
            &model.snapshot.search,
            model.snapshot.selection.as_ref(),
            model.cursor,
            offset,
            model.focus == FocusPane::Results,
            model.palette,
        ),
        areas.results,
    );

    frame.render_widget(
        DetailPane::new(&model.snapshot.detail, model.palette),
        areas.detail,
    );

    frame.render_widget(
        Paragraph::new(Line::styled(
            status_text(model.snapshot, model.focus),
            model.palette.muted,
        )),
        areas.status,
    );

    areas
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
