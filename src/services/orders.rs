use tracing::{debug, info};

use crate::error::{MarketError, MarketResult};
use crate::export;
use crate::marketplace::{NewOrder, Order, OrderPatch, OrderStatus};
use crate::store::{next_id, Store};
use crate::traits::{LatencyProvider, TimeProvider};

/// Query and mutation operations for purchase orders.
///
/// `confirm_order` and `complete_order` enforce the status state machine
/// and reject illegal moves with `InvalidTransition`. The generic
/// `update` stays permissive and may force any status, including
/// cancellation.
#[derive(Clone)]
pub struct OrderOperations<L, T> {
    store: Store<Order>,
    latency: L,
    time: T,
}

impl<L: LatencyProvider, T: TimeProvider> OrderOperations<L, T> {
    pub fn new(store: Store<Order>, latency: L, time: T) -> Self {
        Self {
            store,
            latency,
            time,
        }
    }

    /// Every order, in insertion order.
    pub async fn get_all(&self) -> MarketResult<Vec<Order>> {
        self.latency.simulate().await;
        let orders = self.store.snapshot().await;
        debug!(count = orders.len(), "fetched all orders");
        Ok(orders)
    }

    /// The order with the given id.
    pub async fn get_by_id(&self, id: u64) -> MarketResult<Order> {
        self.latency.simulate().await;
        self.store
            .read(|records| records.iter().find(|o| o.id == id).cloned())
            .await
            .ok_or_else(|| MarketError::NotFound(format!("Order {id} not found")))
    }

    /// Append a new order in `pending` state with no transaction hash,
    /// stamping the creation time and assigning the next free id.
    pub async fn create(&self, new: NewOrder) -> MarketResult<Order> {
        self.latency.simulate().await;
        let timestamp = self.time.now_unix();
        let order = self
            .store
            .write(|records| {
                let order = Order {
                    id: next_id(records.iter().map(|o| o.id)),
                    buyer: new.buyer,
                    seller: new.seller,
                    amount: new.amount,
                    status: OrderStatus::Pending,
                    tx_hash: None,
                    timestamp,
                };
                records.push(order.clone());
                order
            })
            .await;
        info!(id = order.id, amount = order.amount, "created order");
        Ok(order)
    }

    /// Merge a partial update onto the matched order. No transition
    /// guard applies here: the patch may force any status.
    pub async fn update(&self, id: u64, patch: OrderPatch) -> MarketResult<Order> {
        self.latency.simulate().await;
        let updated = self
            .store
            .write(|records| {
                let order = records.iter_mut().find(|o| o.id == id)?;
                patch.apply(order);
                Some(order.clone())
            })
            .await
            .ok_or_else(|| MarketError::NotFound(format!("Order {id} not found")))?;
        info!(id, status = %updated.status, "updated order");
        Ok(updated)
    }

    /// Remove the matched order. The freed id is never reassigned.
    pub async fn delete(&self, id: u64) -> MarketResult<()> {
        self.latency.simulate().await;
        let removed = self
            .store
            .write(|records| {
                let index = records.iter().position(|o| o.id == id)?;
                Some(records.remove(index))
            })
            .await;
        match removed {
            Some(_) => {
                info!(id, "deleted order");
                Ok(())
            }
            None => Err(MarketError::NotFound(format!("Order {id} not found"))),
        }
    }

    /// Exact-match filter on the buyer field.
    pub async fn get_by_buyer(&self, buyer: &str) -> MarketResult<Vec<Order>> {
        self.latency.simulate().await;
        let orders = self
            .store
            .read(|records| {
                records
                    .iter()
                    .filter(|o| o.buyer == buyer)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        debug!(buyer, count = orders.len(), "fetched orders by buyer");
        Ok(orders)
    }

    /// Exact-match filter on the seller field.
    pub async fn get_by_seller(&self, seller: &str) -> MarketResult<Vec<Order>> {
        self.latency.simulate().await;
        let orders = self
            .store
            .read(|records| {
                records
                    .iter()
                    .filter(|o| o.seller == seller)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .await;
        debug!(seller, count = orders.len(), "fetched orders by seller");
        Ok(orders)
    }

    /// Move a pending order to `confirmed` and record its transaction
    /// hash. Rejects any other starting status.
    pub async fn confirm_order(&self, id: u64, tx_hash: impl Into<String>) -> MarketResult<Order> {
        self.latency.simulate().await;
        let tx_hash = tx_hash.into();
        let confirmed = self
            .store
            .write(|records| {
                let order = records
                    .iter_mut()
                    .find(|o| o.id == id)
                    .ok_or_else(|| MarketError::NotFound(format!("Order {id} not found")))?;
                if !order.status.can_transition(OrderStatus::Confirmed) {
                    return Err(MarketError::InvalidTransition(format!(
                        "cannot confirm order {id} in status {}",
                        order.status
                    )));
                }
                order.status = OrderStatus::Confirmed;
                order.tx_hash = Some(tx_hash);
                Ok(order.clone())
            })
            .await?;
        info!(id, "confirmed order");
        Ok(confirmed)
    }

    /// Move a confirmed order to `completed`. Rejects any other
    /// starting status.
    pub async fn complete_order(&self, id: u64) -> MarketResult<Order> {
        self.latency.simulate().await;
        let completed = self
            .store
            .write(|records| {
                let order = records
                    .iter_mut()
                    .find(|o| o.id == id)
                    .ok_or_else(|| MarketError::NotFound(format!("Order {id} not found")))?;
                if !order.status.can_transition(OrderStatus::Completed) {
                    return Err(MarketError::InvalidTransition(format!(
                        "cannot complete order {id} in status {}",
                        order.status
                    )));
                }
                order.status = OrderStatus::Completed;
                Ok(order.clone())
            })
            .await?;
        info!(id, "completed order");
        Ok(completed)
    }

    /// Serialize the current order book into a gzipped tar archive
    /// holding a single JSON document.
    pub async fn export_archive(&self) -> MarketResult<Vec<u8>> {
        self.latency.simulate().await;
        let orders = self.store.snapshot().await;
        let bytes = export::write_archive("orders", &orders, self.time.now_unix())?;
        info!(
            count = orders.len(),
            bytes = bytes.len(),
            "exported orders archive"
        );
        Ok(bytes)
    }
}
