//! Active result selection.
//!
//! State machine:
//! - `None --select(x)--> Some(x)` starts a detail fetch for `x`
//! - `Some(x) --select(y), y != x--> Some(y)` starts a fetch for `y`
//! - `Some(x) --select(x)--> Some(x)` no side effect
//! - `Some(x) --clear()--> None`

use crate::model::SearchResultItem;
use crate::state::detail::{DetailRequest, DetailSession};
use tracing::debug;

/// Owner of the "active card" highlight.
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    active: Option<SearchResultItem>,
}

impl SelectionCoordinator {
    /// Create with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active item, if any.
    pub fn active(&self) -> Option<&SearchResultItem> {
        self.active.as_ref()
    }

    /// Whether `item` is the active selection (compared by id).
    pub fn is_active(&self, item: &SearchResultItem) -> bool {
        self.active.as_ref().is_some_and(|a| a.id == item.id)
    }

    /// Activate `item` and start fetching its detail.
    ///
    /// Re-selecting the active item does nothing and returns `None`.
    /// The previous item is replaced in the same step, so two items are
    /// never active together.
    pub fn select(
        &mut self,
        item: SearchResultItem,
        detail: &mut DetailSession,
    ) -> Option<DetailRequest> {
        if self.is_active(&item) {
            debug!(artist = %item.id, "re-selected active item; ignoring");
            return None;
        }

        let id = item.id.clone();
        if let Some(previous) = self.active.replace(item) {
            debug!(from = %previous.id, to = %id, "selection moved");
        }
        Some(detail.run(id))
    }

    /// Deactivate any active item without fetching anything.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtistId;
    use crate::state::DetailUiState;

    fn item(id: &str) -> SearchResultItem {
        SearchResultItem::new(ArtistId::new(id).expect("valid id"), id, "thumb.jpg")
    }

    #[test]
    fn select_from_empty_starts_fetch() {
        let mut selection = SelectionCoordinator::new();
        let mut detail = DetailSession::new();

        let request = selection.select(item("a"), &mut detail);

        assert!(request.is_some());
        assert!(selection.is_active(&item("a")));
        assert!(detail.state().is_loading());
    }

    #[test]
    fn select_same_item_twice_fetches_once() {
        let mut selection = SelectionCoordinator::new();
        let mut detail = DetailSession::new();

        let first = selection.select(item("a"), &mut detail);
        let second = selection.select(item("a"), &mut detail);

        assert!(first.is_some());
        assert!(second.is_none());
        let first = first.expect("first select fetches");
        assert!(detail.is_current(first.token), "re-select must not restart the fetch");
    }

    #[test]
    fn select_other_item_replaces_active() {
        let mut selection = SelectionCoordinator::new();
        let mut detail = DetailSession::new();

        selection.select(item("a"), &mut detail);
        let request = selection.select(item("b"), &mut detail).expect("fetch b");

        assert!(!selection.is_active(&item("a")));
        assert!(selection.is_active(&item("b")));
        assert_eq!(request.id.as_str(), "b");
    }

    #[test]
    fn clear_deactivates_without_fetch() {
        let mut selection = SelectionCoordinator::new();
        let mut detail = DetailSession::new();
        selection.select(item("a"), &mut detail);
        detail.close();

        selection.clear();

        assert!(selection.active().is_none());
        assert_eq!(detail.state(), &DetailUiState::Idle);
    }

    #[test]
    fn select_after_clear_fetches_again() {
        let mut selection = SelectionCoordinator::new();
        let mut detail = DetailSession::new();
        selection.select(item("a"), &mut detail);
        selection.clear();

        assert!(selection.select(item("a"), &mut detail).is_some());
    }
}
