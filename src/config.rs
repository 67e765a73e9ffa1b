//! Configuration constants for the marketplace data layer.
//!
//! This module centralizes magic numbers and catalogue values
//! to improve maintainability and enable easier tuning.

/// Lower bound of the simulated network latency, in milliseconds.
pub const LATENCY_MIN_MS: u64 = 200;

/// Upper bound (exclusive) of the simulated network latency, in milliseconds.
pub const LATENCY_MAX_MS: u64 = 500;

/// Maximum number of gallery images a listing may carry.
/// Enforced by callers during form validation, not by the service layer.
pub const MAX_LISTING_IMAGES: usize = 5;

/// Sentinel category that disables category filtering.
pub const CATEGORY_ALL: &str = "all";

/// The fixed category catalogue offered by the browse and sell views.
pub const CATEGORIES: [&str; 7] = [
    "Digital Art",
    "Services",
    "Gaming",
    "DeFi",
    "Virtual Real Estate",
    "Music",
    "Hardware",
];

/// Ticker of the cosmetic marketplace currency. Prices and order amounts
/// are denominated in atomic units of this currency.
pub const CURRENCY_TICKER: &str = "NXS";

/// Return the current Unix timestamp in seconds.
///
/// This is a convenience wrapper that avoids the boilerplate of
/// `SystemTimeProvider::new().now_unix()` in production code paths.
/// For testable code, prefer accepting a `TimeProvider` parameter instead.
pub fn now_unix() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
