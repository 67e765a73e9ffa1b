//! Query and mutation services, the only mediators of store access.
//!
//! Every operation awaits the injected latency provider before touching
//! its store, standing in for a network round-trip, and returns defensive
//! copies so callers can never mutate store state through a return value.

pub mod listings;
pub mod orders;
pub mod users;

pub use listings::ListingOperations;
pub use orders::OrderOperations;
pub use users::UserOperations;
