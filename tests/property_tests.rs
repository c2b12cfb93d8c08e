//! Property-based tests for supersession and validation invariants.
//!
//! Tests validate:
//! 1. Tokens strictly increase within a slot
//! 2. Whatever order completions arrive in, the latest search wins
//! 3. Whatever order detail completions arrive in, the pane shows the last selection
//! 4. Query validation matches its trim-and-count definition
//! 5. Artist ids reject empty and whitespace-only input

use artscout::model::{ArtistDetail, ArtistId, SearchQuery, SearchResultItem, ValidationError};
use artscout::state::{Completion, Controller, DetailUiState, RequestSlot, SearchUiState};
use proptest::prelude::*;

// ===== Helpers =====

fn results_for(index: usize) -> Vec<SearchResultItem> {
    let id = ArtistId::new(format!("artist-{index}")).unwrap();
    vec![SearchResultItem::new(id, format!("Artist {index}"), "thumb.jpg")]
}

fn detail_for(index: usize) -> ArtistDetail {
    ArtistDetail {
        id: ArtistId::new(format!("artist-{index}")).unwrap(),
        name: format!("Artist {index}"),
        birth_year: None,
        death_year: None,
        nationality: None,
        biography: None,
    }
}

/// A count in `1..=max` and a shuffled order of `0..count`.
fn count_and_order(max: usize) -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1..=max).prop_flat_map(|n| (Just(n), Just((0..n).collect::<Vec<_>>()).prop_shuffle()))
}

// ===== Property 1: Token ordering =====

proptest! {
    #[test]
    fn tokens_strictly_increase(starts in 1usize..50) {
        let mut slot: RequestSlot<()> = RequestSlot::new("prop");
        let mut previous = slot.start();
        for _ in 1..starts {
            let next = slot.start();
            prop_assert!(next > previous);
            prop_assert!(!slot.is_current(previous));
            previous = next;
        }
        prop_assert!(slot.is_current(previous));
    }
}

// ===== Property 2: Latest search wins =====

proptest! {
    #[test]
    fn latest_search_wins_in_any_arrival_order((n, order) in count_and_order(8)) {
        let mut controller = Controller::new(1);
        let requests: Vec<_> = (0..n)
            .map(|i| controller.on_submit_query(&format!("query {i}")).unwrap())
            .collect();

        let mut applied = 0;
        for index in order {
            let changed = controller.apply(Completion::Search {
                token: requests[index].token,
                outcome: Ok(results_for(index)),
            });
            if changed {
                applied += 1;
                prop_assert_eq!(index, n - 1, "only the latest search may apply");
            }
        }

        prop_assert_eq!(applied, 1);
        prop_assert_eq!(
            controller.search_state(),
            &SearchUiState::Results(results_for(n - 1))
        );
    }
}

// ===== Property 3: Last selection wins =====

proptest! {
    #[test]
    fn last_selection_wins_in_any_arrival_order((n, order) in count_and_order(8)) {
        let mut controller = Controller::new(1);
        let requests: Vec<_> = (0..n)
            .map(|i| {
                let item = results_for(i).remove(0);
                controller.on_click_result(item).expect("distinct item starts a fetch")
            })
            .collect();

        for index in order {
            controller.apply(Completion::Detail {
                token: requests[index].token,
                outcome: Ok(detail_for(index)),
            });
        }

        prop_assert_eq!(controller.detail_state(), &DetailUiState::Ready(detail_for(n - 1)));
        prop_assert_eq!(
            controller.selection().map(|s| s.id.clone()),
            Some(detail_for(n - 1).id)
        );
    }
}

// ===== Property 4: Query validation =====

proptest! {
    #[test]
    fn query_validity_matches_trimmed_char_count(raw in "\\PC{0,12}", min in 1usize..5) {
        let trimmed = raw.trim();
        let chars = trimmed.chars().count();

        match SearchQuery::parse(&raw, min) {
            Ok(query) => {
                prop_assert!(chars >= min);
                prop_assert_eq!(query.as_str(), trimmed);
            }
            Err(ValidationError::Empty) => prop_assert_eq!(chars, 0),
            Err(ValidationError::TooShort { min: m, actual }) => {
                prop_assert_eq!(m, min);
                prop_assert_eq!(actual, chars);
                prop_assert!(actual > 0 && actual < min);
            }
        }
    }

    #[test]
    fn whitespace_only_query_is_always_empty(raw in "[ \\t\\n]{0,10}") {
        prop_assert_eq!(SearchQuery::parse(&raw, 1), Err(ValidationError::Empty));
    }
}

// ===== Property 5: Artist ids =====

proptest! {
    #[test]
    fn artist_id_rejects_blank(raw in "[ \\t]{0,6}") {
        prop_assert!(ArtistId::new(raw).is_err());
    }

    #[test]
    fn artist_id_accepts_slugs(raw in "[a-z0-9][a-z0-9-]{0,30}") {
        let id = ArtistId::new(raw.clone()).unwrap();
        prop_assert_eq!(id.as_str(), raw.as_str());
    }
}
