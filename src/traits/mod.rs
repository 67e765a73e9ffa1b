//! Trait abstractions for dependency injection and testability.
//!
//! Every service operation depends on a clock (record timestamps) and a
//! latency source (simulated network round-trips). Both are injected as
//! traits so tests run instantly and deterministically while demos keep
//! the production timing behavior.

pub mod latency;
pub mod random;
pub mod time;

// Re-export all traits for crate-internal use.
// The public API surface is controlled by lib.rs re-exports.
pub use latency::LatencyProvider;
pub use random::RandomSource;
pub use time::TimeProvider;

// Re-export default implementations
pub use latency::UniformLatency;
pub use random::ThreadRng;
pub use time::SystemTimeProvider;
