//! Archive export round-trip tests against the live services.

use nexus_market::{read_archive, Listing, Order};

use crate::common::{MarketHarness, NOW};

#[tokio::test]
async fn listings_archive_round_trips_the_catalogue() {
    let h = MarketHarness::seeded();

    let live = h.market.listings.get_all().await.unwrap();
    let bytes = h.market.listings.export_archive().await.unwrap();
    let manifest = read_archive::<Listing>("listings", &bytes).unwrap();

    assert_eq!(manifest.records, live);
    assert_eq!(manifest.total_count, live.len());
    assert_eq!(manifest.export_date, NOW);
}

#[tokio::test]
async fn orders_archive_round_trips_the_order_book() {
    let h = MarketHarness::seeded();

    let live = h.market.orders.get_all().await.unwrap();
    let bytes = h.market.orders.export_archive().await.unwrap();
    let manifest = read_archive::<Order>("orders", &bytes).unwrap();

    assert_eq!(manifest.records, live);
    assert_eq!(manifest.total_count, live.len());
}

#[tokio::test]
async fn export_reflects_mutations_up_to_the_call() {
    let h = MarketHarness::seeded();
    h.market.listings.delete(1).await.unwrap();

    let bytes = h.market.listings.export_archive().await.unwrap();
    let manifest = read_archive::<Listing>("listings", &bytes).unwrap();

    assert_eq!(manifest.total_count, 5);
    assert!(manifest.records.iter().all(|l| l.id != 1));
}
