//! Composition of the search, detail and selection state.
//!
//! The controller is the only owner of the sessions. Every public method
//! is one atomic step: it mutates, then publishes exactly one
//! [`Snapshot`] on a watch channel. Observers never see a half-applied
//! transition such as "new search loading but old detail still open".

use crate::model::{ArtistDetail, SearchResultItem, TransportError, ValidationError};
use crate::state::detail::{DetailRequest, DetailSession, DetailToken, DetailUiState};
use crate::state::request_slot::CancelHandle;
use crate::state::search::{SearchRequest, SearchSession, SearchToken, SearchUiState};
use crate::state::selection::SelectionCoordinator;
use tokio::sync::watch;
use tracing::debug;

// ===== Completion =====

/// A finished catalog call, tagged with the token it was issued under.
#[derive(Debug)]
pub enum Completion {
    /// A search finished.
    Search {
        /// Token of the search.
        token: SearchToken,
        /// What the catalog returned.
        outcome: Result<Vec<SearchResultItem>, TransportError>,
    },
    /// A detail fetch finished.
    Detail {
        /// Token of the fetch.
        token: DetailToken,
        /// What the catalog returned.
        outcome: Result<ArtistDetail, TransportError>,
    },
}

// ===== Snapshot =====

/// Everything the renderer needs, captured after one atomic step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Results pane.
    pub search: SearchUiState,
    /// Detail pane.
    pub detail: DetailUiState,
    /// Active card.
    pub selection: Option<SearchResultItem>,
    /// Whether the search bar's current text passes validation.
    pub input_valid: bool,
    /// Query of the most recently started search.
    pub query: Option<String>,
}

// ===== Controller =====

/// Owner of both sessions and the selection.
#[derive(Debug)]
pub struct Controller {
    search: SearchSession,
    detail: DetailSession,
    selection: SelectionCoordinator,
    input_valid: bool,
    publisher: watch::Sender<Snapshot>,
}

impl Controller {
    /// Create an idle controller.
    pub fn new(min_query_chars: usize) -> Self {
        let search = SearchSession::new(min_query_chars);
        // The empty search bar is not an error until the user interacts
        let input_valid = true;
        let (publisher, _) = watch::channel(Snapshot {
            input_valid,
            ..Snapshot::default()
        });

        Self {
            search,
            detail: DetailSession::new(),
            selection: SelectionCoordinator::new(),
            input_valid,
            publisher,
        }
    }

    /// Subscribe to snapshots. The receiver starts at the latest one.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.publisher.subscribe()
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.publisher.borrow().clone()
    }

    /// Results pane state.
    pub fn search_state(&self) -> &SearchUiState {
        self.search.state()
    }

    /// Detail pane state.
    pub fn detail_state(&self) -> &DetailUiState {
        self.detail.state()
    }

    /// Active card.
    pub fn selection(&self) -> Option<&SearchResultItem> {
        self.selection.active()
    }

    /// Whether the last seen input text was valid.
    pub fn input_valid(&self) -> bool {
        self.input_valid
    }

    /// Live validity feedback for the search bar. Issues no request.
    pub fn on_input_changed(&mut self, text: &str) -> bool {
        let valid = self.search.is_valid(text);
        if valid != self.input_valid {
            self.input_valid = valid;
            self.publish();
        }
        valid
    }

    /// Submit the search bar.
    ///
    /// Invalid text marks the input as erroneous and issues nothing. Valid
    /// text clears the selection, closes the detail pane and starts the
    /// search, all before any response can arrive.
    pub fn on_submit_query(&mut self, text: &str) -> Result<SearchRequest, ValidationError> {
        let request = match self.search.run(text) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "query rejected");
                self.input_valid = false;
                self.publish();
                return Err(err);
            }
        };

        self.input_valid = true;
        self.selection.clear();
        self.detail.close();
        self.publish();
        Ok(request)
    }

    /// A result card was clicked.
    ///
    /// Returns the detail request to dispatch, or `None` when the card was
    /// already active.
    pub fn on_click_result(&mut self, item: SearchResultItem) -> Option<DetailRequest> {
        let request = self.selection.select(item, &mut self.detail)?;
        self.publish();
        Some(request)
    }

    /// Register the cancellation handle for a dispatched search.
    pub fn attach_search(&mut self, token: SearchToken, handle: Box<dyn CancelHandle>) -> bool {
        self.search.attach(token, handle)
    }

    /// Register the cancellation handle for a dispatched detail fetch.
    pub fn attach_detail(&mut self, token: DetailToken, handle: Box<dyn CancelHandle>) -> bool {
        self.detail.attach(token, handle)
    }

    /// Apply a finished catalog call. Returns `true` if anything visible changed.
    ///
    /// Superseded completions change nothing and publish nothing.
    pub fn apply(&mut self, completion: Completion) -> bool {
        match completion {
            Completion::Search { token, outcome } => self.apply_search_settled(token, outcome),
            Completion::Detail { token, outcome } => self.apply_detail_settled(token, outcome),
        }
    }

    /// Apply a finished search.
    pub fn apply_search_settled(
        &mut self,
        token: SearchToken,
        outcome: Result<Vec<SearchResultItem>, TransportError>,
    ) -> bool {
        let changed = self.search.settle(token, outcome);
        if changed {
            self.publish();
        }
        changed
    }

    /// Apply a finished detail fetch.
    pub fn apply_detail_settled(
        &mut self,
        token: DetailToken,
        outcome: Result<ArtistDetail, TransportError>,
    ) -> bool {
        let changed = self.detail.settle(token, outcome);
        if changed {
            self.publish();
        }
        changed
    }

    fn publish(&self) {
        self.publisher.send_replace(Snapshot {
            search: self.search.state().clone(),
            detail: self.detail.state().clone(),
            selection: self.selection.active().cloned(),
            input_valid: self.input_valid,
            query: self.search.query().map(|q| q.as_str().to_string()),
        });
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
