use serde::{Deserialize, Serialize};

/// A marketplace participant, keyed by wallet address rather than a
/// numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique key of the record. Cosmetic wallet address, never changes.
    pub address: String,

    /// Marketplace reputation, 0.0 for a fresh account
    pub rating: f64,

    /// Number of completed sales
    pub total_sales: u64,

    /// Unix timestamp stamped at creation, immutable
    pub joined_at: u64,
}

/// Caller-supplied fields for `UserOperations::create`.
///
/// `rating`, `total_sales`, and `joined_at` are stamped by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub address: String,
}

/// Partial update for a user. The address key and join timestamp cannot
/// be patched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub rating: Option<f64>,
    pub total_sales: Option<u64>,
}

impl UserPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    #[must_use]
    pub const fn total_sales(mut self, total_sales: u64) -> Self {
        self.total_sales = Some(total_sales);
        self
    }

    /// Merge the patch onto a record, overwriting only the set fields.
    pub(crate) fn apply(self, user: &mut User) {
        if let Some(rating) = self.rating {
            user.rating = rating;
        }
        if let Some(total_sales) = self.total_sales {
            user.total_sales = total_sales;
        }
    }
}
