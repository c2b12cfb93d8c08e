//! UI state machines (pure).
//!
//! The supersession core lives here: [`RequestSlot`] and the sessions
//! built on it. Nothing in this module performs I/O; catalog calls are
//! returned as request values for the shell to dispatch.

pub mod controller;
pub mod detail;
pub mod input;
pub mod navigation;
pub mod request_slot;
pub mod search;
pub mod selection;

// Re-export for convenience
pub use controller::{Completion, Controller, Snapshot};
pub use detail::{DetailRequest, DetailSession, DetailToken, DetailUiState, DETAILS_FAILED};
pub use input::InputLine;
pub use navigation::{FocusPane, ResultsCursor};
pub use request_slot::{CancelHandle, RequestSlot, RequestToken, Settlement};
pub use search::{SearchRequest, SearchSession, SearchToken, SearchUiState, SEARCH_FAILED};
pub use selection::SelectionCoordinator;
