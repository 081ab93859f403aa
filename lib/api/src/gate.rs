//! One-at-a-time submission.
//!
//! The voting view holds a permit while a vote request is in flight; any
//! further attempt is refused without a request being sent.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Admits at most one in-flight submission. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct SubmitGate {
    busy: Arc<AtomicBool>,
}

impl SubmitGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the gate, or returns `None` if a submission is in flight.
    #[must_use]
    pub fn try_begin(&self) -> Option<SubmitPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    /// Returns true while a permit is held.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission; dropping it reopens the gate.
#[derive(Debug)]
pub struct SubmitPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for SubmitPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
