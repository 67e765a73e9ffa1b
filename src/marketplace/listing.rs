use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a listing in the marketplace catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Visible in the catalogue and purchasable
    Active,
    /// Held back from the catalogue, e.g. while a purchase settles
    Pending,
    /// Purchased; kept for the seller's history
    Sold,
}

impl ListingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item offered for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique, immutable once assigned. Ids are never reused after deletion.
    pub id: u64,

    /// Title of the item (publicly visible)
    pub title: String,

    /// Longer free-text description shown in the detail view
    pub description: String,

    /// Asking price in atomic NXS units
    pub price: u64,

    /// One of the fixed catalogue in `config::CATEGORIES`
    pub category: String,

    /// Gallery image URLs, at most `config::MAX_LISTING_IMAGES` entries
    pub images: Vec<String>,

    /// Identifier of the selling party
    pub seller: String,

    /// Current catalogue status
    pub status: ListingStatus,

    /// Unix timestamp stamped at creation, immutable
    pub created_at: u64,
}

impl Listing {
    /// Whether the listing shows up as purchasable.
    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }

    /// Case-insensitive exact category comparison used by the filters.
    pub(crate) fn in_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }

    /// Case-insensitive substring match of `needle` against title,
    /// description, or seller. `needle` must already be lowercased.
    pub(crate) fn matches_query(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.seller.to_lowercase().contains(needle)
    }
}

/// Caller-supplied fields for `ListingOperations::create`.
///
/// `id`, `status`, and `created_at` are stamped by the service. Field
/// validation (required fields, image count) is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: u64,
    pub category: String,
    pub images: Vec<String>,
    pub seller: String,
}

/// Partial update for a listing. `None` fields are left untouched;
/// the id and creation timestamp cannot be patched.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    pub seller: Option<String>,
    pub status: Option<ListingStatus>,
}

impl ListingPatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn price(mut self, price: u64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    #[must_use]
    pub fn seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = Some(seller.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ListingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Merge the patch onto a record, overwriting only the set fields.
    pub(crate) fn apply(self, listing: &mut Listing) {
        if let Some(title) = self.title {
            listing.title = title;
        }
        if let Some(description) = self.description {
            listing.description = description;
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(category) = self.category {
            listing.category = category;
        }
        if let Some(images) = self.images {
            listing.images = images;
        }
        if let Some(seller) = self.seller {
            listing.seller = seller;
        }
        if let Some(status) = self.status {
            listing.status = status;
        }
    }
}
