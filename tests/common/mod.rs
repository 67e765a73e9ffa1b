pub mod harness;

pub use harness::{new_listing, new_order, MarketHarness, NOW};
