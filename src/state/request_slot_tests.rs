//! Tests for RequestSlot and RequestToken.

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ===== Test Helpers =====

#[derive(Clone, Default)]
struct CountingHandle {
    cancels: Arc<AtomicUsize>,
}

impl CountingHandle {
    fn count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

impl CancelHandle for CountingHandle {
    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

fn slot() -> RequestSlot<&'static str> {
    RequestSlot::new("test")
}

// ===== start / is_current =====

#[test]
fn new_slot_is_idle() {
    let slot = slot();
    assert!(!slot.is_busy());
    assert_eq!(slot.issued(), 0);
}

#[test]
fn start_returns_current_token() {
    let mut slot = slot();
    let token = slot.start();

    assert!(slot.is_current(token));
    assert!(slot.is_busy());
}

#[test]
fn tokens_increase_strictly() {
    let mut slot = slot();
    let a = slot.start();
    let b = slot.start();
    let c = slot.start();

    assert!(a < b && b < c);
    assert_eq!(c.sequence(), 3);
}

#[test]
fn start_retires_previous_token() {
    let mut slot = slot();
    let first = slot.start();
    let second = slot.start();

    assert!(!slot.is_current(first));
    assert!(slot.is_current(second));
}

// ===== settle =====

#[test]
fn settle_current_success_forwards_value() {
    let mut slot = slot();
    let token = slot.start();

    assert_eq!(slot.settle(token, Ok("done")), Settlement::Success("done"));
    assert!(!slot.is_busy(), "slot should return to empty after settling");
}

#[test]
fn settle_current_failure_forwards_error() {
    let mut slot = slot();
    let token = slot.start();

    let settlement = slot.settle(token, Err(TransportError::Status(502)));
    assert_eq!(settlement, Settlement::Failure(TransportError::Status(502)));
}

#[test]
fn settle_stale_token_is_superseded() {
    let mut slot = slot();
    let first = slot.start();
    let second = slot.start();

    assert_eq!(slot.settle(first, Ok("old")), Settlement::Superseded);
    assert!(slot.is_current(second), "stale settle must not clear current");
}

#[test]
fn settle_twice_second_is_superseded() {
    let mut slot = slot();
    let token = slot.start();

    assert!(slot.settle(token, Ok("once")).is_live());
    assert_eq!(slot.settle(token, Ok("twice")), Settlement::Superseded);
}

#[test]
fn latest_wins_when_older_arrives_last() {
    let mut slot = slot();
    let older = slot.start();
    let newer = slot.start();

    assert_eq!(slot.settle(newer, Ok("newer")), Settlement::Success("newer"));
    assert_eq!(slot.settle(older, Ok("older")), Settlement::Superseded);
}

// ===== cancellation =====

#[test]
fn start_cancels_attached_handle() {
    let mut slot = slot();
    let handle = CountingHandle::default();

    let first = slot.start();
    assert!(slot.attach(first, Box::new(handle.clone())));
    slot.start();

    assert_eq!(handle.count(), 1);
}

#[test]
fn attach_for_stale_token_cancels_immediately() {
    let mut slot = slot();
    let handle = CountingHandle::default();

    let first = slot.start();
    slot.start();

    assert!(!slot.attach(first, Box::new(handle.clone())));
    assert_eq!(handle.count(), 1);
}

#[test]
fn settling_current_does_not_cancel_its_handle() {
    let mut slot = slot();
    let handle = CountingHandle::default();

    let token = slot.start();
    slot.attach(token, Box::new(handle.clone()));
    slot.settle(token, Ok("done"));
    slot.start();

    assert_eq!(handle.count(), 0, "a settled operation must not be aborted later");
}

#[test]
fn cancel_retires_without_new_token() {
    let mut slot = slot();
    let handle = CountingHandle::default();

    let token = slot.start();
    slot.attach(token, Box::new(handle.clone()));
    slot.cancel();

    assert!(!slot.is_busy());
    assert_eq!(handle.count(), 1);
    assert_eq!(slot.settle(token, Ok("late")), Settlement::Superseded);
}

#[test]
fn cancel_on_idle_slot_is_noop() {
    let mut slot = slot();
    slot.cancel();
    assert!(!slot.is_busy());
    assert_eq!(slot.issued(), 0);
}

#[tokio::test]
async fn abort_handle_cancels_spawned_task() {
    let mut slot: RequestSlot<()> = RequestSlot::new("tokio");
    let token = slot.start();
    let task = tokio::spawn(std::future::pending::<()>());
    slot.attach(token, Box::new(task.abort_handle()));

    slot.start();

    let joined = task.await;
    assert!(joined.expect_err("task should be aborted").is_cancelled());
}
