//! Tests for SearchSession and SearchUiState.

use super::*;
use crate::model::ArtistId;

// ===== Test Helpers =====

fn item(id: &str, title: &str) -> SearchResultItem {
    SearchResultItem::new(
        ArtistId::new(id).expect("valid id"),
        title,
        "https://example.test/square.jpg",
    )
}

// ===== run =====

#[test]
fn new_session_is_idle() {
    let session = SearchSession::new(1);
    assert_eq!(session.state(), &SearchUiState::Idle);
    assert!(session.query().is_none());
}

#[test]
fn run_with_valid_query_enters_loading() {
    let mut session = SearchSession::new(1);
    let request = session.run("  Monet ").expect("valid query");

    assert_eq!(session.state(), &SearchUiState::Loading);
    assert_eq!(request.query.as_str(), "Monet");
    assert!(session.is_current(request.token));
}

#[test]
fn run_with_invalid_query_never_enters_loading() {
    let mut session = SearchSession::new(1);

    assert_eq!(session.run("   "), Err(ValidationError::Empty));
    assert_eq!(session.state(), &SearchUiState::Idle);
}

#[test]
fn run_with_invalid_query_keeps_previous_results() {
    let mut session = SearchSession::new(3);
    let request = session.run("Monet").expect("valid query");
    session.settle(request.token, Ok(vec![item("monet", "Claude Monet")]));

    assert!(session.run("ab").is_err());
    assert_eq!(session.state().items().len(), 1);
}

#[test]
fn invalid_run_does_not_supersede_in_flight_search() {
    let mut session = SearchSession::new(1);
    let request = session.run("Monet").expect("valid query");

    let _ = session.run("");

    assert!(session.is_current(request.token));
}

// ===== settle classification =====

#[test]
fn zero_results_is_empty_not_error() {
    let mut session = SearchSession::new(1);
    let request = session.run("zzzzzz").expect("valid query");

    assert!(session.settle(request.token, Ok(vec![])));
    assert_eq!(session.state(), &SearchUiState::Empty);
}

#[test]
fn results_keep_server_order() {
    let mut session = SearchSession::new(1);
    let request = session.run("Man").expect("valid query");
    let items = vec![
        item("manet", "Édouard Manet"),
        item("man-ray", "Man Ray"),
        item("mantegna", "Andrea Mantegna"),
    ];

    session.settle(request.token, Ok(items.clone()));

    assert_eq!(session.state(), &SearchUiState::Results(items));
}

#[test]
fn failure_becomes_static_error_message() {
    let mut session = SearchSession::new(1);
    let request = session.run("Monet").expect("valid query");

    session.settle(request.token, Err(TransportError::Network("reset".into())));

    assert_eq!(
        session.state(),
        &SearchUiState::Error(SEARCH_FAILED.to_string())
    );
}

#[test]
fn stale_settlement_is_ignored() {
    let mut session = SearchSession::new(1);
    let monet = session.run("Monet").expect("valid query");
    let manet = session.run("Manet").expect("valid query");

    assert!(session.settle(manet.token, Ok(vec![item("manet", "Édouard Manet")])));
    assert!(!session.settle(monet.token, Ok(vec![item("monet", "Claude Monet")])));

    assert_eq!(session.state().items()[0].title, "Édouard Manet");
}

#[test]
fn stale_failure_does_not_replace_loading() {
    let mut session = SearchSession::new(1);
    let monet = session.run("Monet").expect("valid query");
    session.run("Manet").expect("valid query");

    assert!(!session.settle(monet.token, Err(TransportError::Status(500))));
    assert!(session.state().is_loading());
}

#[test]
fn query_tracks_latest_started_search() {
    let mut session = SearchSession::new(1);
    session.run("Monet").expect("valid query");
    session.run("Manet").expect("valid query");

    assert_eq!(session.query().map(|q| q.as_str()), Some("Manet"));
}
