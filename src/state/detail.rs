//! Detail pane state machine.

use crate::model::{ArtistDetail, ArtistId, TransportError};
use crate::state::request_slot::{CancelHandle, RequestSlot, RequestToken, Settlement};
use tracing::{info, warn};

/// Message shown when a detail request fails.
pub const DETAILS_FAILED: &str = "details failed";

/// Token type for detail requests.
pub type DetailToken = RequestToken<ArtistDetail>;

/// Visible state of the detail pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailUiState {
    /// Pane closed.
    #[default]
    Idle,
    /// Fetching the record for this artist.
    Loading(ArtistId),
    /// Record loaded.
    Ready(ArtistDetail),
    /// The fetch failed.
    Error(String),
}

impl DetailUiState {
    /// Whether the loading indicator should show.
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailUiState::Loading(_))
    }
}

/// Command for the dispatcher: fetch `id` and settle with `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    /// Token the settlement must carry.
    pub token: DetailToken,
    /// Artist to fetch.
    pub id: ArtistId,
}

/// Runs detail fetches through its own [`RequestSlot`].
#[derive(Debug)]
pub struct DetailSession {
    slot: RequestSlot<ArtistDetail>,
    state: DetailUiState,
}

impl Default for DetailSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailSession {
    /// Create a session with the pane closed.
    pub fn new() -> Self {
        Self {
            slot: RequestSlot::new("detail"),
            state: DetailUiState::Idle,
        }
    }

    /// Current visible state.
    pub fn state(&self) -> &DetailUiState {
        &self.state
    }

    /// Start fetching `id`, superseding any in-flight fetch.
    pub fn run(&mut self, id: ArtistId) -> DetailRequest {
        let token = self.slot.start();
        info!(artist = %id, token = token.sequence(), "detail fetch started");
        self.state = DetailUiState::Loading(id.clone());
        DetailRequest { token, id }
    }

    /// Close the pane and retire any in-flight fetch.
    pub fn close(&mut self) {
        self.slot.cancel();
        self.state = DetailUiState::Idle;
    }

    /// Register the cancellation handle for an in-flight fetch.
    pub fn attach(&mut self, token: DetailToken, handle: Box<dyn CancelHandle>) -> bool {
        self.slot.attach(token, handle)
    }

    /// Whether `token` belongs to the live fetch.
    pub fn is_current(&self, token: DetailToken) -> bool {
        self.slot.is_current(token)
    }

    /// Apply a settlement. Returns `true` if the visible state changed.
    pub fn settle(
        &mut self,
        token: DetailToken,
        outcome: Result<ArtistDetail, TransportError>,
    ) -> bool {
        self.state = match self.slot.settle(token, outcome) {
            Settlement::Superseded => return false,
            Settlement::Failure(err) => {
                warn!(token = token.sequence(), error = %err, "detail fetch failed");
                DetailUiState::Error(DETAILS_FAILED.to_string())
            }
            Settlement::Success(detail) => DetailUiState::Ready(detail),
        };
        true
    }
}
