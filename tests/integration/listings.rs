//! Listing service integration tests.

use nexus_market::{ListingPatch, ListingStatus, MarketError};

use crate::common::{new_listing, MarketHarness, NOW};

#[tokio::test]
async fn create_stamps_forced_fields_and_chains_ids() {
    let h = MarketHarness::empty();

    let first = h
        .market
        .listings
        .create(new_listing("First", "Seller"))
        .await
        .unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.status, ListingStatus::Active);
    assert_eq!(first.created_at, NOW);

    h.time.advance(60);
    let second = h
        .market
        .listings
        .create(new_listing("Second", "Seller"))
        .await
        .unwrap();
    assert_eq!(second.id, 2);
    assert_eq!(second.created_at, NOW + 60);

    let fetched = h.market.listings.get_by_id(2).await.unwrap();
    assert_eq!(fetched, second);
}

#[tokio::test]
async fn get_by_id_rejects_unknown_ids() {
    let h = MarketHarness::seeded();

    let err = h.market.listings.get_by_id(999).await.unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
    assert!(err.to_string().contains("999"));
}

#[tokio::test]
async fn deleting_a_listing_frees_nothing() {
    let h = MarketHarness::seeded();
    let before = h.market.listings.get_all().await.unwrap();
    let max_id = before.iter().map(|l| l.id).max().unwrap();

    // Delete a non-max id, then look it up.
    h.market.listings.delete(3).await.unwrap();
    let err = h.market.listings.get_by_id(3).await.unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));

    // A later create continues past the historical maximum; the freed
    // id is not resurrected.
    let created = h
        .market
        .listings
        .create(new_listing("Replacement", "Seller"))
        .await
        .unwrap();
    assert_eq!(created.id, max_id + 1);

    // Deleting twice fails the second time.
    let err = h.market.listings.delete(3).await.unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
}

#[tokio::test]
async fn update_changes_only_the_patched_field() {
    let h = MarketHarness::seeded();
    let before = h.market.listings.get_by_id(1).await.unwrap();

    let after = h
        .market
        .listings
        .update(1, ListingPatch::new().price(9_999))
        .await
        .unwrap();

    assert_eq!(after.price, 9_999);
    assert_eq!(after.id, before.id);
    assert_eq!(after.title, before.title);
    assert_eq!(after.description, before.description);
    assert_eq!(after.category, before.category);
    assert_eq!(after.images, before.images);
    assert_eq!(after.seller, before.seller);
    assert_eq!(after.status, before.status);
    assert_eq!(after.created_at, before.created_at);

    let err = h
        .market
        .listings
        .update(999, ListingPatch::new().price(1))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
}

#[tokio::test]
async fn blank_search_returns_everything_in_order() {
    let h = MarketHarness::seeded();

    let all = h.market.listings.get_all().await.unwrap();
    let searched = h.market.listings.search("", "all").await.unwrap();

    assert_eq!(searched, all);
}

#[tokio::test]
async fn search_matches_title_description_or_seller() {
    let h = MarketHarness::empty();
    h.market
        .listings
        .create(new_listing("Alpha Art", "Gallery"))
        .await
        .unwrap();
    h.market
        .listings
        .create(new_listing("Landscape", "Alphaworks"))
        .await
        .unwrap();

    let hits = h.market.listings.search("alpha", "all").await.unwrap();
    assert_eq!(hits.len(), 2);

    let h = MarketHarness::empty();
    h.market
        .listings
        .create(new_listing("Beta", "Zed"))
        .await
        .unwrap();
    let hits = h.market.listings.search("alpha", "all").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn search_applies_the_category_filter_first() {
    let h = MarketHarness::seeded();

    // "synth" matches the sample kit, but only inside its own category.
    let hits = h.market.listings.search("synth", "Music").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 6);

    let hits = h.market.listings.search("synth", "Gaming").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn category_filter_is_case_insensitive_with_an_all_sentinel() {
    let h = MarketHarness::seeded();

    let lower = h.market.listings.get_by_category("digital art").await.unwrap();
    let upper = h.market.listings.get_by_category("DIGITAL ART").await.unwrap();
    assert_eq!(lower, upper);
    assert!(!lower.is_empty());

    let all = h.market.listings.get_by_category("all").await.unwrap();
    assert_eq!(all, h.market.listings.get_all().await.unwrap());
}

#[tokio::test]
async fn seller_filter_is_exact_and_case_sensitive() {
    let h = MarketHarness::seeded();

    let mine = h.market.listings.get_by_seller("CurrentUser").await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|l| l.seller == "CurrentUser"));

    let none = h.market.listings.get_by_seller("currentuser").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn returned_records_are_detached_from_the_store() {
    let h = MarketHarness::seeded();

    let mut all = h.market.listings.get_all().await.unwrap();
    all[0].title = "Vandalized".to_string();
    all.remove(1);

    let fresh = h.market.listings.get_by_id(1).await.unwrap();
    assert_eq!(fresh.title, "Neon Skyline Loop");
    assert_eq!(h.market.listings.get_all().await.unwrap().len(), 6);
}

#[tokio::test]
async fn every_operation_simulates_exactly_one_round_trip() {
    let h = MarketHarness::seeded();

    h.market.listings.get_all().await.unwrap();
    assert_eq!(h.latency.calls(), 1);

    // get_by_seller pays the same toll as every other read.
    h.market.listings.get_by_seller("CurrentUser").await.unwrap();
    assert_eq!(h.latency.calls(), 2);

    h.market.listings.search("", "all").await.unwrap();
    h.market.listings.get_by_category("Music").await.unwrap();
    h.market
        .listings
        .create(new_listing("Counted", "Seller"))
        .await
        .unwrap();
    assert_eq!(h.latency.calls(), 5);

    // Failed lookups still went through the round-trip.
    let _ = h.market.listings.get_by_id(999).await;
    assert_eq!(h.latency.calls(), 6);
}
