//! Test harness wiring the services to instant latency and a pinned clock.

use nexus_market::mocks::{InstantLatency, MockTime};
use nexus_market::{NewListing, NewOrder, SeedData, SharedMarketState};

/// The pinned test clock value (2024-07-26T13:20:00Z).
pub const NOW: u64 = 1_722_000_000;

/// A marketplace over empty or fixture-seeded stores, with handles to
/// the shared clock and the latency call counter.
pub struct MarketHarness {
    pub market: SharedMarketState<InstantLatency, MockTime>,
    pub time: MockTime,
    pub latency: InstantLatency,
}

#[allow(dead_code)]
impl MarketHarness {
    /// Empty stores.
    pub fn empty() -> Self {
        let time = MockTime::new(NOW);
        let latency = InstantLatency::new();
        Self {
            market: SharedMarketState::empty(latency.clone(), time.clone()),
            time,
            latency,
        }
    }

    /// Stores seeded from the embedded fixtures.
    pub fn seeded() -> Self {
        let time = MockTime::new(NOW);
        let latency = InstantLatency::new();
        let seed = Self::seed();
        Self {
            market: SharedMarketState::from_seed(&seed, latency.clone(), time.clone()),
            time,
            latency,
        }
    }

    /// The parsed fixture set, for asserting against store contents.
    pub fn seed() -> SeedData {
        SeedData::load().expect("embedded fixtures parse")
    }
}

/// A minimal valid listing draft.
pub fn new_listing(title: &str, seller: &str) -> NewListing {
    NewListing {
        title: title.to_string(),
        description: format!("{title} description"),
        price: 100,
        category: "Digital Art".to_string(),
        images: Vec::new(),
        seller: seller.to_string(),
    }
}

/// A minimal order draft.
pub fn new_order(buyer: &str, seller: &str, amount: u64) -> NewOrder {
    NewOrder {
        buyer: buyer.to_string(),
        seller: seller.to_string(),
        amount,
    }
}
