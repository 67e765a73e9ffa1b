use tracing::{debug, info};

use crate::config::CATEGORY_ALL;
use crate::error::{MarketError, MarketResult};
use crate::export;
use crate::marketplace::{Listing, ListingPatch, ListingStatus, NewListing};
use crate::store::{next_id, Store};
use crate::traits::{LatencyProvider, TimeProvider};

/// Query and mutation operations for the listing catalogue.
///
/// The service performs no field validation; required-field and image
/// count checks happen in the calling view before `create` is invoked.
#[derive(Clone)]
pub struct ListingOperations<L, T> {
    store: Store<Listing>,
    latency: L,
    time: T,
}

impl<L: LatencyProvider, T: TimeProvider> ListingOperations<L, T> {
    pub fn new(store: Store<Listing>, latency: L, time: T) -> Self {
        Self {
            store,
            latency,
            time,
        }
    }

    /// Every listing, in insertion order.
    pub async fn get_all(&self) -> MarketResult<Vec<Listing>> {
        self.latency.simulate().await;
        let listings = self.store.snapshot().await;
        debug!(count = listings.len(), "fetched all listings");
        Ok(listings)
    }

    /// The listing with the given id.
    pub async fn get_by_id(&self, id: u64) -> MarketResult<Listing> {
        self.latency.simulate().await;
        self.store
            .read(|records| records.iter().find(|l| l.id == id).cloned())
            .await
            .ok_or_else(|| MarketError::NotFound(format!("Listing {id} not found")))
    }

    /// Append a new listing. Forces `status` to active, stamps the
    /// creation time, and assigns the next free id.
    pub async fn create(&self, new: NewListing) -> MarketResult<Listing> {
        self.latency.simulate().await;
        let created_at = self.time.now_unix();
        let listing = self
            .store
            .write(|records| {
                let listing = Listing {
                    id: next_id(records.iter().map(|l| l.id)),
                    title: new.title,
                    description: new.description,
                    price: new.price,
                    category: new.category,
                    images: new.images,
                    seller: new.seller,
                    status: ListingStatus::Active,
                    created_at,
                };
                records.push(listing.clone());
                listing
            })
            .await;
        info!(id = listing.id, title = %listing.title, "created listing");
        Ok(listing)
    }

    /// Merge a partial update onto the matched listing.
    pub async fn update(&self, id: u64, patch: ListingPatch) -> MarketResult<Listing> {
        self.latency.simulate().await;
        let updated = self
            .store
            .write(|records| {
                let listing = records.iter_mut().find(|l| l.id == id)?;
                patch.apply(listing);
                Some(listing.clone())
            })
            .await
            .ok_or_else(|| MarketError::NotFound(format!("Listing {id} not found")))?;
        info!(id, "updated listing");
        Ok(updated)
    }

    /// Remove the matched listing. The freed id is never reassigned.
    pub async fn delete(&self, id: u64) -> MarketResult<()> {
        self.latency.simulate().await;
        let removed = self
            .store
            .write(|records| {
                let index = records.iter().position(|l| l.id == id)?;
                Some(records.remove(index))
            })
            .await;
        match removed {
            Some(listing) => {
                info!(id, title = %listing.title, "deleted listing");
                Ok(())
            }
            None => Err(MarketError::NotFound(format!("Listing {id} not found"))),
        }
    }

    /// Filter by category first (exact, case-insensitive, unless the
    /// sentinel "all"), then by case-insensitive substring match of
    /// `query` against title, description, or seller. An empty query
    /// skips the text filter. Order-preserving.
    pub async fn search(&self, query: &str, category: &str) -> MarketResult<Vec<Listing>> {
        self.latency.simulate().await;
        let needle = query.to_lowercase();
        let hits = self
            .store
            .read(|records| {
                records
                    .iter()
                    .filter(|l| category == CATEGORY_ALL || l.in_category(category))
                    .filter(|l| needle.is_empty() || l.matches_query(&needle))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        debug!(query, category, hits = hits.len(), "searched listings");
        Ok(hits)
    }

    /// Exact case-insensitive category filter; the sentinel "all"
    /// returns the whole catalogue.
    pub async fn get_by_category(&self, category: &str) -> MarketResult<Vec<Listing>> {
        self.latency.simulate().await;
        let listings = self
            .store
            .read(|records| {
                records
                    .iter()
                    .filter(|l| category == CATEGORY_ALL || l.in_category(category))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        debug!(category, count = listings.len(), "fetched listings by category");
        Ok(listings)
    }

    /// Exact, case-sensitive filter on the seller field.
    pub async fn get_by_seller(&self, seller: &str) -> MarketResult<Vec<Listing>> {
        self.latency.simulate().await;
        let listings = self
            .store
            .read(|records| {
                records
                    .iter()
                    .filter(|l| l.seller == seller)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        debug!(seller, count = listings.len(), "fetched listings by seller");
        Ok(listings)
    }

    /// Serialize the current catalogue into a gzipped tar archive
    /// holding a single JSON document.
    pub async fn export_archive(&self) -> MarketResult<Vec<u8>> {
        self.latency.simulate().await;
        let listings = self.store.snapshot().await;
        let bytes = export::write_archive("listings", &listings, self.time.now_unix())?;
        info!(
            count = listings.len(),
            bytes = bytes.len(),
            "exported listings archive"
        );
        Ok(bytes)
    }
}
