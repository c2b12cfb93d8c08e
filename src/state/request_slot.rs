//! Single-flight request tracking.
//!
//! A [`RequestSlot`] owns at most one live operation of one kind. Every
//! [`RequestSlot::start`] retires the previous token, so a settlement
//! carrying an older token is recognised as stale no matter when it
//! arrives. Cancellation of the underlying work is advisory: the slot
//! asks the previous task to stop, but correctness rests on the token
//! comparison in [`RequestSlot::settle`], not on the abort succeeding.

use crate::model::TransportError;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

// ===== RequestToken =====

/// Identity of one issued operation within a slot.
///
/// Tokens are strictly increasing in creation order. The payload type
/// parameter keeps tokens of different slots from being mixed up.
pub struct RequestToken<T> {
    sequence: u64,
    _payload: PhantomData<fn() -> T>,
}

impl<T> RequestToken<T> {
    fn new(sequence: u64) -> Self {
        Self {
            sequence,
            _payload: PhantomData,
        }
    }

    /// Position of this token in the slot's issue order (first token is 1).
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

// Manual impls: derive would put bounds on T.
impl<T> Clone for RequestToken<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RequestToken<T> {}

impl<T> PartialEq for RequestToken<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
    }
}

impl<T> Eq for RequestToken<T> {}

impl<T> PartialOrd for RequestToken<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for RequestToken<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sequence.cmp(&other.sequence)
    }
}

impl<T> fmt::Debug for RequestToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestToken(#{})", self.sequence)
    }
}

// ===== Cancellation =====

/// Best-effort cancellation of the work behind a token.
pub trait CancelHandle: Send {
    /// Ask the underlying operation to stop. May be a no-op.
    fn cancel(&self);
}

impl CancelHandle for tokio::task::AbortHandle {
    fn cancel(&self) {
        self.abort();
    }
}

// ===== Settlement =====

/// Outcome of settling a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement<T> {
    /// The current operation succeeded.
    Success(T),
    /// The current operation failed.
    Failure(TransportError),
    /// The token was no longer current; the outcome was discarded.
    Superseded,
}

impl<T> Settlement<T> {
    /// Whether this settlement may affect visible state.
    #[cfg(test)]
    pub(crate) fn is_live(&self) -> bool {
        !matches!(self, Settlement::Superseded)
    }
}

// ===== RequestSlot =====

/// Owner of at most one live operation of a given kind.
pub struct RequestSlot<T> {
    name: &'static str,
    issued: u64,
    current: Option<RequestToken<T>>,
    in_flight: Option<Box<dyn CancelHandle>>,
}

impl<T> RequestSlot<T> {
    /// Create an empty slot. `name` only labels log events.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            issued: 0,
            current: None,
            in_flight: None,
        }
    }

    /// Begin a new operation, superseding any previous one.
    ///
    /// The previous token (if any) stops being current and its task is
    /// asked to cancel.
    pub fn start(&mut self) -> RequestToken<T> {
        self.retire("superseded");

        self.issued += 1;
        let token = RequestToken::new(self.issued);
        self.current = Some(token);
        trace!(slot = self.name, token = token.sequence(), "request started");
        token
    }

    /// Register the cancellation handle for `token`'s operation.
    ///
    /// A handle for a token that is no longer current is cancelled
    /// immediately. Returns whether the handle was stored.
    pub fn attach(&mut self, token: RequestToken<T>, handle: Box<dyn CancelHandle>) -> bool {
        if self.is_current(token) {
            if let Some(previous) = self.in_flight.replace(handle) {
                previous.cancel();
            }
            true
        } else {
            handle.cancel();
            false
        }
    }

    /// Retire the current operation without starting a new one.
    ///
    /// Its eventual settlement will be `Superseded`.
    pub fn cancel(&mut self) {
        self.retire("cancelled");
    }

    /// Whether `token` is the slot's current token.
    pub fn is_current(&self, token: RequestToken<T>) -> bool {
        self.current == Some(token)
    }

    /// Whether an operation is live.
    #[cfg(test)]
    pub(crate) fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Number of operations started over the slot's lifetime.
    #[cfg(test)]
    pub(crate) fn issued(&self) -> u64 {
        self.issued
    }

    /// Settle the operation identified by `token`.
    ///
    /// A stale token yields `Superseded` and leaves the slot untouched.
    /// The current token empties the slot and forwards the outcome.
    pub fn settle(
        &mut self,
        token: RequestToken<T>,
        outcome: Result<T, TransportError>,
    ) -> Settlement<T> {
        if !self.is_current(token) {
            debug!(
                slot = self.name,
                token = token.sequence(),
                current = ?self.current,
                "discarding superseded settlement"
            );
            return Settlement::Superseded;
        }

        self.current = None;
        // The task is finishing on its own; dropping the handle does not abort it.
        self.in_flight = None;

        match outcome {
            Ok(value) => Settlement::Success(value),
            Err(err) => Settlement::Failure(err),
        }
    }

    fn retire(&mut self, reason: &'static str) {
        if let Some(previous) = self.current.take() {
            debug!(slot = self.name, token = previous.sequence(), reason, "request retired");
        }
        if let Some(handle) = self.in_flight.take() {
            handle.cancel();
        }
    }
}

impl<T> fmt::Debug for RequestSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSlot")
            .field("name", &self.name)
            .field("issued", &self.issued)
            .field("current", &self.current)
            .field("has_handle", &self.in_flight.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "request_slot_tests.rs"]
mod tests;
