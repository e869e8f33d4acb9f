//! Request-sequence tokens
//!
//! Fetches are never cancelled. Each one is stamped with a [`RequestId`] and
//! only the result of the most recently issued request is applied; anything
//! older is stale and dropped.

use std::fmt;

/// Monotonic identifier of an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tracks the latest in-flight request of one page
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    issued: u64,
    pending: Option<RequestId>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request id, superseding any pending one
    pub fn begin(&mut self) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        self.pending = Some(id);
        id
    }

    /// Whether `id` is the request whose result should be applied
    pub fn is_current(&self, id: RequestId) -> bool {
        self.pending == Some(id)
    }

    /// Settle `id`. Returns `false` when the result is stale.
    pub fn finish(&mut self, id: RequestId) -> bool {
        if self.is_current(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
