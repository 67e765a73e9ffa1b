//! Concurrent-mutation tests: id assignment must stay race-free when
//! creates land from multiple tasks at once.

use std::collections::HashSet;

use crate::common::{new_listing, new_order, MarketHarness};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn rapid_fire_listing_creates_never_duplicate_ids() {
    let h = MarketHarness::empty();

    let mut handles = Vec::new();
    for i in 0..32 {
        let listings = h.market.listings.clone();
        handles.push(tokio::spawn(async move {
            listings
                .create(new_listing(&format!("Item {i}"), "Seller"))
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let id = handle.await.unwrap();
        assert!(ids.insert(id), "id {id} was minted twice");
    }
    assert_eq!(ids.len(), 32);
    assert_eq!(h.market.listings.get_all().await.unwrap().len(), 32);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn interleaved_order_creates_and_confirms_stay_consistent() {
    let h = MarketHarness::seeded();

    let mut handles = Vec::new();
    for i in 0..16 {
        let orders = h.market.orders.clone();
        handles.push(tokio::spawn(async move {
            let order = orders
                .create(new_order(&format!("Buyer {i}"), "Seller", 10 + i))
                .await
                .unwrap();
            orders
                .confirm_order(order.id, format!("0x{i:04x}"))
                .await
                .unwrap()
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let order = handle.await.unwrap();
        assert!(ids.insert(order.id));
        assert!(order.tx_hash.is_some());
    }
    assert_eq!(ids.len(), 16);
}
