//! Instant latency provider for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::traits::LatencyProvider;

/// Latency provider that resolves immediately and counts invocations,
/// so tests can assert that an operation simulated exactly one round-trip.
#[derive(Debug, Clone, Default)]
pub struct InstantLatency {
    calls: Arc<AtomicU64>,
}

impl InstantLatency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of simulated round-trips so far, across all clones.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LatencyProvider for InstantLatency {
    async fn simulate(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}
