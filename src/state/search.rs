//! Search session state machine.
//!
//! SearchUiState is a sum type with exactly one state current at a time:
//! - Idle: nothing searched yet
//! - Loading: a search is in flight
//! - Empty: the last search matched nothing
//! - Results: the last search returned items, in server order
//! - Error: the last search failed

use crate::model::{SearchQuery, SearchResultItem, TransportError, ValidationError};
use crate::state::request_slot::{CancelHandle, RequestSlot, RequestToken, Settlement};
use tracing::{info, warn};

/// Message shown when a search request fails.
pub const SEARCH_FAILED: &str = "search failed";

/// Token type for search requests.
pub type SearchToken = RequestToken<Vec<SearchResultItem>>;

// ===== SearchUiState =====

/// Visible state of the results pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchUiState {
    /// No search issued yet.
    #[default]
    Idle,
    /// A search is in flight.
    Loading,
    /// The search succeeded with zero matches.
    Empty,
    /// The search succeeded; items are in display order.
    Results(Vec<SearchResultItem>),
    /// The search failed.
    Error(String),
}

impl SearchUiState {
    /// Items currently displayed, empty unless in `Results`.
    pub fn items(&self) -> &[SearchResultItem] {
        match self {
            SearchUiState::Results(items) => items,
            _ => &[],
        }
    }

    /// Whether the loading indicator should show.
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchUiState::Loading)
    }
}

// ===== SearchRequest =====

/// Command for the dispatcher: run `query` and settle with `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Token the settlement must carry.
    pub token: SearchToken,
    /// Validated query text.
    pub query: SearchQuery,
}

// ===== SearchSession =====

/// Runs searches through its own [`RequestSlot`] and classifies outcomes.
#[derive(Debug)]
pub struct SearchSession {
    slot: RequestSlot<Vec<SearchResultItem>>,
    state: SearchUiState,
    query: Option<SearchQuery>,
    min_query_chars: usize,
}

impl SearchSession {
    /// Create an idle session with the given validity threshold.
    pub fn new(min_query_chars: usize) -> Self {
        Self {
            slot: RequestSlot::new("search"),
            state: SearchUiState::Idle,
            query: None,
            min_query_chars,
        }
    }

    /// Current visible state.
    pub fn state(&self) -> &SearchUiState {
        &self.state
    }

    /// Query of the most recently started search.
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Minimum query length in characters.
    pub fn min_query_chars(&self) -> usize {
        self.min_query_chars
    }

    /// Validity predicate used by [`run`](Self::run).
    pub fn is_valid(&self, text: &str) -> bool {
        crate::model::is_valid(text, self.min_query_chars)
    }

    /// Start a search for `text`.
    ///
    /// Invalid text issues nothing and leaves the state untouched.
    /// Valid text moves to `Loading`, supersedes any in-flight search,
    /// and returns the request to dispatch.
    pub fn run(&mut self, text: &str) -> Result<SearchRequest, ValidationError> {
        let query = SearchQuery::parse(text, self.min_query_chars)?;
        let token = self.slot.start();

        info!(query = %query, token = token.sequence(), "search started");
        self.state = SearchUiState::Loading;
        self.query = Some(query.clone());

        Ok(SearchRequest { token, query })
    }

    /// Register the cancellation handle for an in-flight search.
    pub fn attach(&mut self, token: SearchToken, handle: Box<dyn CancelHandle>) -> bool {
        self.slot.attach(token, handle)
    }

    /// Whether `token` belongs to the live search.
    pub fn is_current(&self, token: SearchToken) -> bool {
        self.slot.is_current(token)
    }

    /// Apply a settlement. Returns `true` if the visible state changed.
    pub fn settle(
        &mut self,
        token: SearchToken,
        outcome: Result<Vec<SearchResultItem>, TransportError>,
    ) -> bool {
        let next = match self.slot.settle(token, outcome) {
            Settlement::Superseded => return false,
            Settlement::Failure(err) => {
                warn!(token = token.sequence(), error = %err, "search failed");
                SearchUiState::Error(SEARCH_FAILED.to_string())
            }
            Settlement::Success(items) if items.is_empty() => SearchUiState::Empty,
            Settlement::Success(items) => {
                info!(token = token.sequence(), count = items.len(), "search settled");
                SearchUiState::Results(items)
            }
        };

        self.state = next;
        true
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
