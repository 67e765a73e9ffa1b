//! Mock time provider for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::traits::TimeProvider;

/// Mock time provider with a controllable clock. Clones share the clock,
/// so advancing one handle is visible to every service holding another.
#[derive(Debug, Clone)]
pub struct MockTime {
    now: Arc<AtomicU64>,
}

impl MockTime {
    /// Create a mock clock pinned at the given Unix timestamp.
    pub fn new(initial: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(initial)),
        }
    }

    /// Pin the clock to a specific value.
    pub fn set(&self, timestamp: u64) {
        self.now.store(timestamp, Ordering::SeqCst);
    }

    /// Advance the clock by the given number of seconds.
    pub fn advance(&self, seconds: u64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl TimeProvider for MockTime {
    fn now_unix(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
