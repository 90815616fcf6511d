use async_trait::async_trait;

use crate::{Order, OrderId, OrderStatus, OrderStoreError, Result};

/// Core trait for order store implementations.
///
/// An order store is durable keyed storage for [`Order`] records. Orders are
/// never deleted; the only mutation after creation is a status change.
/// All implementations must be thread-safe (Send + Sync), and are expected to
/// serialize reads and writes for the same identifier. Concurrent writers to
/// one order are not coordinated: the last status written wins.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Retrieves an order by identifier.
    ///
    /// Returns None if no order has that identifier.
    async fn get(&self, id: OrderId) -> Result<Option<Order>>;

    /// Persists a newly built order and returns it as stored.
    ///
    /// Fails with `AlreadyExists` if the identifier is taken.
    async fn create(&self, order: Order) -> Result<Order>;

    /// Sets the status of an existing order and returns the updated order.
    ///
    /// Fails with `NotFound` if the order does not exist.
    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order>;

    /// Retrieves all orders, oldest first.
    async fn list(&self) -> Result<Vec<Order>>;
}

/// Extension trait providing convenience methods for order stores.
#[async_trait]
pub trait OrderStoreExt: OrderStore {
    /// Retrieves an order that is expected to exist.
    ///
    /// Fails with `NotFound` instead of returning None.
    async fn get_existing(&self, id: OrderId) -> Result<Order> {
        self.get(id).await?.ok_or(OrderStoreError::NotFound(id))
    }

    /// Checks if an order exists.
    async fn exists(&self, id: OrderId) -> Result<bool> {
        Ok(self.get(id).await?.is_some())
    }
}

// Blanket implementation for all OrderStore implementations
impl<T: OrderStore + ?Sized> OrderStoreExt for T {}

#[async_trait]
impl<T: OrderStore + ?Sized> OrderStore for std::sync::Arc<T> {
    async fn get(&self, id: OrderId) -> Result<Option<Order>> {
        (**self).get(id).await
    }

    async fn create(&self, order: Order) -> Result<Order> {
        (**self).create(order).await
    }

    async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order> {
        (**self).update_status(id, status).await
    }

    async fn list(&self) -> Result<Vec<Order>> {
        (**self).list().await
    }
}
