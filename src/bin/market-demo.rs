//! Headless walkthrough of the mock marketplace data layer.
//!
//! Seeds the stores from the embedded fixtures, then plays the role of
//! the UI: browse, search, list an item, place and settle an order,
//! credit the seller, and export the catalogue archive. Every call goes
//! through the randomized latency, so the output paces like a real
//! client talking to a backend.
//!
//! Usage:
//!   market-demo [--out DIR]
//!
//! Logging goes to stderr via `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::Context;
use nexus_market::config::{self, CURRENCY_TICKER};
use nexus_market::{
    NewListing, NewOrder, NewUser, SharedMarketState, SystemTimeProvider, UniformLatency,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_out_dir() -> PathBuf {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--out" {
            if let Some(dir) = args.get(i + 1) {
                return PathBuf::from(dir);
            }
        }
    }
    PathBuf::from(".")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let out_dir = parse_out_dir();

    let market = SharedMarketState::seeded(UniformLatency::new(), SystemTimeProvider::new())
        .context("seeding the marketplace")?;

    // ── Browse ───────────────────────────────────────────────────────

    let catalogue = market.listings.get_all().await?;
    info!(count = catalogue.len(), "catalogue loaded");

    let art = market.listings.get_by_category("Digital Art").await?;
    info!(count = art.len(), "digital art on offer");

    let hits = market.listings.search("synth", config::CATEGORY_ALL).await?;
    for listing in &hits {
        info!(
            id = listing.id,
            title = %listing.title,
            price = listing.price,
            currency = CURRENCY_TICKER,
            "search hit"
        );
    }

    // ── Sell ─────────────────────────────────────────────────────────

    let listing = market
        .listings
        .create(NewListing {
            title: "Orbital Station Blueprint".to_string(),
            description: "Printable blueprint poster of the Meridian orbital station.".to_string(),
            price: 310,
            category: "Digital Art".to_string(),
            images: vec!["https://cdn.nexus.market/demo/blueprint.png".to_string()],
            seller: "CurrentUser".to_string(),
        })
        .await?;
    info!(id = listing.id, "new listing published");

    // ── Purchase flow ────────────────────────────────────────────────

    let order = market
        .orders
        .create(NewOrder {
            buyer: "PixelPioneer".to_string(),
            seller: listing.seller.clone(),
            amount: listing.price,
        })
        .await?;
    let order = market
        .orders
        .confirm_order(
            order.id,
            "0x7d1e55c0a3bf9a7c3308f5226fd36a2b16d60c6bd9f1b0e4ab6a5e2f90c4d813",
        )
        .await?;
    let order = market.orders.complete_order(order.id).await?;
    info!(id = order.id, status = %order.status, "order settled");

    let seller_account = market
        .users
        .create(NewUser {
            address: "0x1f9090aae28b8a3dceadf281b0f12828e676c326".to_string(),
        })
        .await?;
    let seller_account = market.users.increment_sales(&seller_account.address).await?;
    info!(
        address = %seller_account.address,
        total_sales = seller_account.total_sales,
        "seller credited"
    );

    let stats = market.seller_stats("CurrentUser").await?;
    info!(
        total_listings = stats.total_listings,
        active_listings = stats.active_listings,
        completed_sales = stats.completed_sales,
        total_revenue = stats.total_revenue,
        pending_orders = stats.pending_orders,
        "seller dashboard"
    );

    // ── Export ───────────────────────────────────────────────────────

    let archive = market.listings.export_archive().await?;
    let path = out_dir.join(format!("nexus-listings-{}.tar.gz", config::now_unix()));
    std::fs::write(&path, &archive)
        .with_context(|| format!("writing archive to {}", path.display()))?;
    info!(path = %path.display(), bytes = archive.len(), "catalogue exported");

    Ok(())
}
