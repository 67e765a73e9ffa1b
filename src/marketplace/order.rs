use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of an order in the purchase lifecycle.
///
/// The guarded paths move `pending -> confirmed -> completed`; either of
/// the first two states may be forced to `cancelled` through a generic
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting settlement
    Pending,
    /// Settled on the (cosmetic) chain, transaction hash recorded
    Confirmed,
    /// Goods delivered, purchase finished
    Completed,
    /// Abandoned before completion
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether the guarded service paths accept a move from `self` to `next`.
    pub const fn can_transition(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Confirmed, Self::Completed)
                | (Self::Pending | Self::Confirmed, Self::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchase transaction between a buyer and a seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique, immutable once assigned. Ids are never reused after deletion.
    pub id: u64,

    /// Identifier of the buying party
    pub buyer: String,

    /// Identifier of the selling party
    pub seller: String,

    /// Purchase amount in atomic NXS units
    pub amount: u64,

    /// Current lifecycle status
    pub status: OrderStatus,

    /// Cosmetic transaction hash, `None` until confirmation
    pub tx_hash: Option<String>,

    /// Unix timestamp stamped at creation, immutable
    pub timestamp: u64,
}

/// Caller-supplied fields for `OrderOperations::create`.
///
/// `id`, `status`, `tx_hash`, and `timestamp` are stamped by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub buyer: String,
    pub seller: String,
    pub amount: u64,
}

/// Partial update for an order. `None` fields are left untouched; the id
/// and creation timestamp cannot be patched.
///
/// This is the deliberately permissive escape hatch: it may force any
/// status, including transitions the guarded paths reject.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub buyer: Option<String>,
    pub seller: Option<String>,
    pub amount: Option<u64>,
    pub status: Option<OrderStatus>,
    /// Outer `None` leaves the hash untouched; `Some(None)` clears it.
    pub tx_hash: Option<Option<String>>,
}

impl OrderPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn buyer(mut self, buyer: impl Into<String>) -> Self {
        self.buyer = Some(buyer.into());
        self
    }

    #[must_use]
    pub fn seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = Some(seller.into());
        self
    }

    #[must_use]
    pub const fn amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub const fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn tx_hash(mut self, tx_hash: Option<String>) -> Self {
        self.tx_hash = Some(tx_hash);
        self
    }

    /// Merge the patch onto a record, overwriting only the set fields.
    pub(crate) fn apply(self, order: &mut Order) {
        if let Some(buyer) = self.buyer {
            order.buyer = buyer;
        }
        if let Some(seller) = self.seller {
            order.seller = seller;
        }
        if let Some(amount) = self.amount {
            order.amount = amount;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(tx_hash) = self.tx_hash {
            order.tx_hash = tx_hash;
        }
    }
}
