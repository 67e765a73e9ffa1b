//! Embedded seed fixtures for the mock data layer.
//!
//! Three JSON documents compiled into the binary, parsed once per call
//! into the entity schema. The parsed copy is handed to `Store::seeded`,
//! which takes its own structural copy, so the fixtures themselves are
//! never aliased by a live store.

use serde::de::DeserializeOwned;

use crate::error::{MarketError, MarketResult};
use crate::marketplace::{Listing, Order, User};

const LISTINGS_JSON: &str = include_str!("../data/listings.json");
const ORDERS_JSON: &str = include_str!("../data/orders.json");
const USERS_JSON: &str = include_str!("../data/users.json");

/// A parsed copy of the three seed datasets.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub listings: Vec<Listing>,
    pub orders: Vec<Order>,
    pub users: Vec<User>,
}

impl SeedData {
    /// Parse the embedded fixtures. Every call returns a fresh copy.
    pub fn load() -> MarketResult<Self> {
        Ok(Self {
            listings: parse("listings", LISTINGS_JSON)?,
            orders: parse("orders", ORDERS_JSON)?,
            users: parse("users", USERS_JSON)?,
        })
    }
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> MarketResult<Vec<T>> {
    serde_json::from_str(raw)
        .map_err(|e| MarketError::Serialization(format!("seed fixture '{name}': {e}")))
}
