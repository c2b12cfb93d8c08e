//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod detail_pane;
mod layout;
mod results;
mod search_bar;
mod styles;

pub use detail_pane::{detail_lines, DetailPane};
pub use layout::{calculate_areas, render_layout, status_text, ScreenAreas, ScreenModel};
pub use results::{hit_test, truncate_to_width, visible_offset, ResultsPane};
pub use search_bar::SearchBar;
pub use styles::{ColorConfig, Palette};

use crate::app::App;
use crate::catalog::ArtistCatalog;
use crate::model::AppError;
use crate::state::{input, Completion, FocusPane, InputLine, ResultsCursor, Snapshot};
use crossterm::{
    event::{
        Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// What woke the event loop.
enum Step {
    Terminal(Event),
    Completion(Completion),
    Closed,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, C>
where
    B: ratatui::backend::Backend,
    C: ArtistCatalog + 'static,
{
    terminal: Terminal<B>,
    app: App<C>,
    snapshots: watch::Receiver<Snapshot>,
    input: InputLine,
    focus: FocusPane,
    cursor: ResultsCursor,
    palette: Palette,
    /// Results area inside the border and first drawn card, from the last frame.
    last_results: Option<(Rect, usize)>,
}

impl<B, C> TuiApp<B, C>
where
    B: ratatui::backend::Backend,
    C: ArtistCatalog + 'static,
{
    /// Wrap an existing terminal and app.
    pub fn with_terminal(terminal: Terminal<B>, app: App<C>, palette: Palette) -> Self {
        let snapshots = app.subscribe();
        Self {
            terminal,
            app,
            snapshots,
            input: InputLine::default(),
            focus: FocusPane::Search,
            cursor: ResultsCursor::reset(),
            palette,
            last_results: None,
        }
    }

    /// Put `query` in the search bar and submit it.
    pub fn submit_initial_query(&mut self, query: &str) {
        self.input = InputLine::with_text(query);
        self.submit();
    }

    /// Run the event loop until the user quits or the terminal closes.
    ///
    /// Redraws after a key, mouse or resize event, and after a completion
    /// only if it changed the published snapshot.
    pub async fn run_with_events<S>(&mut self, mut events: S) -> Result<(), TuiError>
    where
        S: futures::Stream<Item = io::Result<Event>> + Unpin,
    {
        self.draw()?;

        loop {
            let step = tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => Step::Terminal(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => Step::Closed,
                },
                Some(completion) = self.app.next_completion() => Step::Completion(completion),
            };

            match step {
                Step::Closed => return Ok(()),
                Step::Terminal(event) => {
                    if self.handle_event(event) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Step::Completion(completion) => {
                    self.app.apply(completion);
                    if self.snapshots.has_changed().unwrap_or(true) {
                        self.draw()?;
                    }
                }
            }
        }
    }

    /// Handle one terminal event. Returns true if the app should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            _ => false,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Tab {
            self.focus = self.focus.toggle();
            return false;
        }

        match self.focus {
            FocusPane::Search => self.handle_search_key(key),
            FocusPane::Results => self.handle_results_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Down => self.focus = FocusPane::Results,
            _ => {
                let before = self.input.text.clone();
                let line = std::mem::take(&mut self.input);
                self.input = match key.code {
                    KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input::insert_char(line, ch)
                    }
                    KeyCode::Backspace => input::backspace(line),
                    KeyCode::Delete => input::delete(line),
                    KeyCode::Left => input::cursor_left(line),
                    KeyCode::Right => input::cursor_right(line),
                    KeyCode::Home => input::cursor_home(line),
                    KeyCode::End => input::cursor_end(line),
                    KeyCode::Esc => input::clear(line),
                    _ => line,
                };

                if self.input.text != before {
                    self.app.input_changed(&self.input.text);
                }
            }
        }
        false
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> bool {
        let len = self.app.snapshot().search.items().len();
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Up => self.cursor = self.cursor.up(),
            KeyCode::Down => self.cursor = self.cursor.down(len),
            KeyCode::Enter => self.select_at_cursor(),
            KeyCode::Esc => self.focus = FocusPane::Search,
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some((inner, offset)) = self.last_results else {
            return;
        };

        let len = self.app.snapshot().search.items().len();
        if let Some(index) = hit_test(inner, offset, len, mouse.column, mouse.row) {
            debug!(index, "result clicked");
            self.focus = FocusPane::Results;
            self.cursor = ResultsCursor::at(index);
            self.select_at_cursor();
        }
    }

    fn submit(&mut self) {
        match self.app.submit_query(&self.input.text) {
            Ok(()) => {
                self.cursor = ResultsCursor::reset();
            }
            Err(err) => debug!(error = %err, "submit rejected"),
        }
    }

    fn select_at_cursor(&mut self) {
        let snapshot = self.app.snapshot();
        let items = snapshot.search.items();
        let Some(item) = self.cursor.index(items.len()).map(|i| items[i].clone()) else {
            return;
        };
        self.app.click_result(item);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let snapshot = self.snapshots.borrow_and_update().clone();
        let cursor = self.cursor.index(snapshot.search.items().len());
        let model = ScreenModel {
            snapshot: &snapshot,
            input: &self.input,
            focus: self.focus,
            cursor,
            palette: &self.palette,
        };

        let mut areas = None;
        self.terminal.draw(|frame| {
            areas = Some(render_layout(frame, &model));
        })?;

        self.last_results = areas.map(|areas| {
            let offset = layout::results_offset(&model, &areas);
            (areas.results_inner(), offset)
        });
        Ok(())
    }
}

// ===== Terminal entry point =====

/// Initialize the terminal, run the event loop, and restore the terminal.
///
/// Logging must be initialized by the caller. `initial_query` is submitted
/// once before the first event.
pub async fn run<C>(
    app: App<C>,
    palette: Palette,
    initial_query: Option<String>,
) -> Result<(), TuiError>
where
    C: ArtistCatalog + 'static,
{
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(crossterm::event::EnableMouseCapture)?;
    let terminal: Terminal<CrosstermBackend<Stdout>> = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut tui = TuiApp::with_terminal(terminal, app, palette);
    if let Some(query) = initial_query {
        tui.submit_initial_query(&query);
    }

    // Run the app and ensure cleanup happens even on error
    let result = tui.run_with_events(EventStream::new()).await;
    restore_terminal()?;
    info!("terminal restored");

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
