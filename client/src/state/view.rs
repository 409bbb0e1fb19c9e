//! Typed fetch state and request/lifetime binding.
//!
//! DESIGN
//! ======
//! `ViewState` makes loading/error/loaded mutually exclusive by construction.
//! `RequestSeq` is shared (via `Arc`) between a view and its in-flight
//! requests: a completion is applied only if its ticket is still the newest
//! one and the view has not been torn down.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Fetch state for a single view.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    /// Request failed; holds the user-visible message.
    Failed(String),
    Loaded(T),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, String>> for ViewState<T> {
    fn from(outcome: Result<T, String>) -> Self {
        match outcome {
            Ok(value) => Self::Loaded(value),
            Err(message) => Self::Failed(message),
        }
    }
}

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Default)]
struct SeqInner {
    latest: AtomicU64,
    closed: AtomicBool,
}

/// Request sequence bound to one mounted view.
#[derive(Clone, Debug, Default)]
pub struct RequestSeq {
    inner: Arc<SeqInner>,
}

impl RequestSeq {
    /// Issue a ticket; any previously issued ticket becomes stale.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.inner.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether a completion for `ticket` may still be applied.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        !self.is_closed() && self.inner.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Mark the owning view as unmounted. Late completions are dropped.
    pub fn close(&self) {
        self.inner.closed.store(true, Ordering::Relaxed);
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Relaxed)
    }
}
