pub mod config;
pub mod error;
pub mod export;
pub mod marketplace;
pub mod seed;
pub mod services;
pub mod shared_state;
pub mod store;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod mocks;

pub use error::{MarketError, MarketResult};
pub use export::{read_archive, write_archive, ExportManifest};
pub use marketplace::{
    Listing, ListingPatch, ListingStatus, NewListing, NewOrder, NewUser, Order, OrderPatch,
    OrderStatus, User, UserPatch,
};
pub use seed::SeedData;
pub use services::{ListingOperations, OrderOperations, UserOperations};
pub use shared_state::{SellerStats, SharedMarketState};
pub use store::Store;
pub use traits::{
    LatencyProvider, RandomSource, SystemTimeProvider, ThreadRng, TimeProvider, UniformLatency,
};
