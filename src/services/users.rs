use tracing::{debug, info};

use crate::error::{MarketError, MarketResult};
use crate::marketplace::{NewUser, User, UserPatch};
use crate::store::Store;
use crate::traits::{LatencyProvider, TimeProvider};

/// Query and mutation operations for marketplace participants.
///
/// Users are keyed by wallet address; there is no numeric id.
#[derive(Clone)]
pub struct UserOperations<L, T> {
    store: Store<User>,
    latency: L,
    time: T,
}

impl<L: LatencyProvider, T: TimeProvider> UserOperations<L, T> {
    pub fn new(store: Store<User>, latency: L, time: T) -> Self {
        Self {
            store,
            latency,
            time,
        }
    }

    /// Every user, in insertion order.
    pub async fn get_all(&self) -> MarketResult<Vec<User>> {
        self.latency.simulate().await;
        let users = self.store.snapshot().await;
        debug!(count = users.len(), "fetched all users");
        Ok(users)
    }

    /// The user with the given address.
    pub async fn get_by_address(&self, address: &str) -> MarketResult<User> {
        self.latency.simulate().await;
        self.store
            .read(|records| records.iter().find(|u| u.address == address).cloned())
            .await
            .ok_or_else(|| MarketError::NotFound(format!("User {address} not found")))
    }

    /// Append a fresh account: zero rating, zero sales, joined now.
    pub async fn create(&self, new: NewUser) -> MarketResult<User> {
        self.latency.simulate().await;
        let joined_at = self.time.now_unix();
        let user = self
            .store
            .write(|records| {
                let user = User {
                    address: new.address,
                    rating: 0.0,
                    total_sales: 0,
                    joined_at,
                };
                records.push(user.clone());
                user
            })
            .await;
        info!(address = %user.address, "created user");
        Ok(user)
    }

    /// Merge a partial update onto the matched user.
    pub async fn update(&self, address: &str, patch: UserPatch) -> MarketResult<User> {
        self.latency.simulate().await;
        let updated = self
            .store
            .write(|records| {
                let user = records.iter_mut().find(|u| u.address == address)?;
                patch.apply(user);
                Some(user.clone())
            })
            .await
            .ok_or_else(|| MarketError::NotFound(format!("User {address} not found")))?;
        info!(address, "updated user");
        Ok(updated)
    }

    /// Overwrite the user's rating.
    pub async fn update_rating(&self, address: &str, rating: f64) -> MarketResult<User> {
        self.latency.simulate().await;
        let updated = self
            .store
            .write(|records| {
                let user = records.iter_mut().find(|u| u.address == address)?;
                user.rating = rating;
                Some(user.clone())
            })
            .await
            .ok_or_else(|| MarketError::NotFound(format!("User {address} not found")))?;
        info!(address, rating, "updated user rating");
        Ok(updated)
    }

    /// Bump the user's completed-sales counter by one.
    pub async fn increment_sales(&self, address: &str) -> MarketResult<User> {
        self.latency.simulate().await;
        let updated = self
            .store
            .write(|records| {
                let user = records.iter_mut().find(|u| u.address == address)?;
                user.total_sales += 1;
                Some(user.clone())
            })
            .await
            .ok_or_else(|| MarketError::NotFound(format!("User {address} not found")))?;
        info!(address, total_sales = updated.total_sales, "incremented sales");
        Ok(updated)
    }
}
