//! Monotonic request tickets for discarding stale responses.
//!
//! A page that refetches on every filter change can have several requests in
//! flight. Each fetch takes a ticket; when its response lands it is applied
//! only if no newer ticket has been issued since.

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issued by `RequestSequence::begin`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Shared counter; clones observe the same sequence.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new logical fetch, superseding all earlier tickets.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// `Some(value)` if `ticket` is still the latest, `None` otherwise.
    pub fn accept<T>(&self, ticket: RequestTicket, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }

    /// Supersede every outstanding ticket without starting a new fetch.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::Relaxed);
    }
}
