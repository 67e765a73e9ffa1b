//! Bundled marketplace state handed to callers.
//!
//! `SharedMarketState` wires the three services over one latency/time
//! pair. The demo binary constructs one directly; tests build theirs
//! through the harness with instant latency and a pinned clock.

use serde::Serialize;

use crate::error::MarketResult;
use crate::marketplace::{Listing, ListingStatus, Order, OrderStatus, User};
use crate::seed::SeedData;
use crate::services::{ListingOperations, OrderOperations, UserOperations};
use crate::store::Store;
use crate::traits::{LatencyProvider, TimeProvider};

/// The three services over a common latency and time source.
#[derive(Clone)]
pub struct SharedMarketState<L, T> {
    pub listings: ListingOperations<L, T>,
    pub orders: OrderOperations<L, T>,
    pub users: UserOperations<L, T>,
}

impl<L, T> SharedMarketState<L, T>
where
    L: LatencyProvider + Clone,
    T: TimeProvider + Clone,
{
    /// Wire the services over explicit stores.
    pub fn new(
        listings: Store<Listing>,
        orders: Store<Order>,
        users: Store<User>,
        latency: L,
        time: T,
    ) -> Self {
        Self {
            listings: ListingOperations::new(listings, latency.clone(), time.clone()),
            orders: OrderOperations::new(orders, latency.clone(), time.clone()),
            users: UserOperations::new(users, latency, time),
        }
    }

    /// Empty stores, nothing seeded.
    pub fn empty(latency: L, time: T) -> Self {
        Self::new(Store::new(), Store::new(), Store::new(), latency, time)
    }

    /// Stores seeded from a parsed fixture set.
    pub fn from_seed(seed: &SeedData, latency: L, time: T) -> Self {
        Self::new(
            Store::seeded(&seed.listings),
            Store::seeded(&seed.orders),
            Store::seeded(&seed.users),
            latency,
            time,
        )
    }

    /// Stores seeded from the embedded fixtures.
    pub fn seeded(latency: L, time: T) -> MarketResult<Self> {
        Ok(Self::from_seed(&SeedData::load()?, latency, time))
    }

    /// Aggregates backing the seller dashboard, computed from the
    /// seller's listings and sales.
    pub async fn seller_stats(&self, seller: &str) -> MarketResult<SellerStats> {
        let listings = self.listings.get_by_seller(seller).await?;
        let sales = self.orders.get_by_seller(seller).await?;

        let completed: Vec<&Order> = sales
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .collect();

        Ok(SellerStats {
            total_listings: listings.len() as u64,
            active_listings: listings
                .iter()
                .filter(|l| l.status == ListingStatus::Active)
                .count() as u64,
            completed_sales: completed.len() as u64,
            total_revenue: completed.iter().map(|o| o.amount).sum(),
            pending_orders: sales
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .count() as u64,
        })
    }
}

/// Seller dashboard aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerStats {
    pub total_listings: u64,
    pub active_listings: u64,
    pub completed_sales: u64,
    /// Sum of completed sale amounts, in atomic NXS units.
    pub total_revenue: u64,
    pub pending_orders: u64,
}
