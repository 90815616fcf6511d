use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Order, OrderId, OrderStatus, OrderStoreError, Result,
    store::OrderStore,
};

/// In-memory order store implementation.
///
/// Stores orders in insertion order behind a single lock and provides the
/// same interface as the PostgreSQL implementation. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<Vec<Order>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Removes an order behind the engine's back, as an operator or a
    /// concurrent process might.
    pub async fn remove(&self, id: OrderId) -> Option<Order> {
        let mut orders = self.orders.write().await;
        let index = orders.iter().position(|o| o.id() == id)?;
        Some(orders.remove(index))
    }

    /// Makes every subsequent call fail with `Unavailable` until reset.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Clears all orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(OrderStoreError::Unavailable(
                "in-memory store switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        self.ensure_available()?;
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id() == id).cloned())
    }

    async fn create(&self, order: Order) -> Result<Order> {
        self.ensure_available()?;
        let mut orders = self.orders.write().await;

        if orders.iter().any(|o| o.id() == order.id()) {
            return Err(OrderStoreError::AlreadyExists(order.id()));
        }

        orders.push(order.clone());
        Ok(order)
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        self.ensure_available()?;
        let mut orders = self.orders.write().await;

        let slot = orders
            .iter_mut()
            .find(|o| o.id() == id)
            .ok_or(OrderStoreError::NotFound(id))?;

        let updated = slot.clone().with_status(status);
        *slot = updated.clone();

        Ok(updated)
    }

    async fn list(&self) -> Result<Vec<Order>> {
        self.ensure_available()?;
        Ok(self.orders.read().await.clone())
    }
}
