//! Simulated-latency abstraction standing in for network and database I/O.

use std::ops::Range;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{LATENCY_MAX_MS, LATENCY_MIN_MS};
use crate::traits::random::{RandomSource, ThreadRng};

/// Trait for the artificial delay every service operation awaits before
/// touching its store.
///
/// The delay is a pure timing effect with no observable state change.
/// Tests inject an instant implementation; demos keep the randomized one.
#[async_trait]
pub trait LatencyProvider: Send + Sync {
    /// Suspend the caller for one simulated round-trip.
    async fn simulate(&self);
}

/// Production implementation that sleeps a uniformly random duration
/// drawn from a fixed millisecond range.
#[derive(Debug, Clone)]
pub struct UniformLatency<R: RandomSource = ThreadRng> {
    range_ms: Range<u64>,
    rng: R,
}

impl UniformLatency<ThreadRng> {
    /// Latency in the default range with the thread-local RNG.
    pub fn new() -> Self {
        Self::with_rng(ThreadRng::new())
    }
}

impl Default for UniformLatency<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> UniformLatency<R> {
    /// Latency in the default range with a custom random source.
    pub fn with_rng(rng: R) -> Self {
        Self::with_range(rng, LATENCY_MIN_MS..LATENCY_MAX_MS)
    }

    /// Latency in an explicit range. An empty range collapses to its start.
    pub fn with_range(rng: R, range_ms: Range<u64>) -> Self {
        Self { range_ms, rng }
    }

    /// Draw the next delay without sleeping.
    pub fn sample_ms(&self) -> u64 {
        let span = self.range_ms.end.saturating_sub(self.range_ms.start).max(1);
        self.range_ms.start + self.rng.next_u64() % span
    }
}

#[async_trait]
impl<R: RandomSource> LatencyProvider for UniformLatency<R> {
    async fn simulate(&self) {
        tokio::time::sleep(Duration::from_millis(self.sample_ms())).await;
    }
}
