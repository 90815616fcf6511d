//! Order service: the lifecycle engine.

use common::{Order, OrderId, OrderStatus};
use order_store::{OrderStore, OrderStoreError, OrderStoreExt};

use crate::error::{OrderError, OrderFailure};

use super::{
    DelayWindow, DraftValidator, FieldRules, OrderDraft, OrderView, ShippingDecision,
    ShippingScheduler, WarehouseDecision, initial_status,
};

/// Service for managing orders.
///
/// Applies the lifecycle rules against an injected order store. Every
/// operation returns either the mapped order or an [`OrderFailure`]; store
/// errors are caught here and reported as a `StoreFailure` entry.
///
/// A failed operation may still have written to the store: moving or
/// shipping an order without a delivery address first records `Error`.
pub struct OrderService<S, V = FieldRules>
where
    S: OrderStore,
    V: DraftValidator,
{
    store: S,
    validator: V,
    scheduler: ShippingScheduler<S>,
}

impl<S> OrderService<S>
where
    S: OrderStore + Clone + 'static,
{
    /// Creates a service with the default field rules and shipping delay.
    pub fn new(store: S) -> Self {
        Self::with_shipping_delay(store, DelayWindow::default())
    }

    /// Creates a service with the default field rules and a custom
    /// shipping delay window.
    pub fn with_shipping_delay(store: S, window: DelayWindow) -> Self {
        Self::with_validator(store, FieldRules, window)
    }
}

impl<S, V> OrderService<S, V>
where
    S: OrderStore + Clone + 'static,
    V: DraftValidator,
{
    /// Creates a service with a custom draft validator.
    pub fn with_validator(store: S, validator: V, window: DelayWindow) -> Self {
        Self {
            scheduler: ShippingScheduler::new(store.clone(), window),
            store,
            validator,
        }
    }

    /// Returns a reference to the underlying order store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the shipping delay window.
    pub fn shipping_delay(&self) -> DelayWindow {
        self.scheduler.window()
    }

    /// Validates a draft and persists it as a new order.
    ///
    /// All field errors are returned together and nothing is persisted when
    /// validation fails. An order without a delivery address is still created,
    /// in `Error` status.
    #[tracing::instrument(skip(self, draft))]
    pub async fn create_order(&self, draft: OrderDraft) -> Result<OrderView, OrderFailure> {
        let errors = self.validator.validate(&draft);
        if let Some(failure) = OrderFailure::from_validation(&errors) {
            return Err(reject_draft(failure));
        }

        let order = draft.into_order().map_err(reject_draft)?;

        let status = initial_status(&order);
        let order = order.with_status(status);

        let order = self
            .store
            .create(order)
            .await
            .map_err(|e| reject(OrderError::from(e)))?;

        metrics::counter!("orders_created_total", "status" => status.as_str()).increment(1);
        tracing::info!(order_id = %order.id(), %status, "order created");

        Ok(OrderView::from(order))
    }

    /// Loads an order by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<OrderView, OrderFailure> {
        let order = self.fetch(order_id).await.map_err(reject)?;
        Ok(OrderView::from(order))
    }

    /// Lists every order, oldest first. An empty list is a success.
    #[tracing::instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderView>, OrderFailure> {
        let orders = self
            .store
            .list()
            .await
            .map_err(|e| reject(OrderError::from(e)))?;

        Ok(orders.iter().map(OrderView::from).collect())
    }

    /// Moves an order to the warehouse.
    ///
    /// Closed orders are rejected. High-value cash-on-delivery orders are
    /// returned to the customer, whether or not they have an address. Orders
    /// without an address are marked `Error` and the call fails. Anything
    /// else goes `InStock`.
    #[tracing::instrument(skip(self))]
    pub async fn move_to_warehouse(&self, order_id: OrderId) -> Result<OrderView, OrderFailure> {
        let order = self.fetch(order_id).await.map_err(reject)?;

        match WarehouseDecision::for_order(&order) {
            WarehouseDecision::RejectClosed => {
                Err(reject(OrderError::OrderAlreadyClosed(order_id)))
            }
            WarehouseDecision::ReturnToCustomer => {
                let order = self
                    .transition(order_id, OrderStatus::ReturnedToCustomer)
                    .await
                    .map_err(reject)?;
                Ok(OrderView::from(order))
            }
            WarehouseDecision::MissingAddress => {
                self.transition(order_id, OrderStatus::Error)
                    .await
                    .map_err(reject)?;
                Err(reject(OrderError::OrderWithoutDeliveryAddress(order_id)))
            }
            WarehouseDecision::Stock => {
                let order = self
                    .transition(order_id, OrderStatus::InStock)
                    .await
                    .map_err(reject)?;
                Ok(OrderView::from(order))
            }
        }
    }

    /// Hands an order to the carrier.
    ///
    /// On success the `InShipping` transition is scheduled in the background
    /// and the order is returned in its current, pre-shipping status; callers
    /// observe `InShipping` only by querying again after the delay window.
    #[tracing::instrument(skip(self))]
    pub async fn ship_order(&self, order_id: OrderId) -> Result<OrderView, OrderFailure> {
        let order = self.fetch(order_id).await.map_err(reject)?;

        match ShippingDecision::for_order(&order) {
            ShippingDecision::RejectClosed => {
                Err(reject(OrderError::OrderAlreadyClosed(order_id)))
            }
            ShippingDecision::MissingAddress => {
                self.transition(order_id, OrderStatus::Error)
                    .await
                    .map_err(reject)?;
                Err(reject(OrderError::OrderWithoutDeliveryAddress(order_id)))
            }
            ShippingDecision::Dispatch => {
                self.scheduler.schedule(order_id);
                Ok(OrderView::from(order))
            }
        }
    }

    /// Closes an order. Closing twice fails the second time.
    #[tracing::instrument(skip(self))]
    pub async fn close_order(&self, order_id: OrderId) -> Result<OrderView, OrderFailure> {
        let order = self.fetch(order_id).await.map_err(reject)?;

        if order.status().is_closed() {
            return Err(reject(OrderError::OrderAlreadyClosed(order_id)));
        }

        let order = self
            .transition(order_id, OrderStatus::Closed)
            .await
            .map_err(reject)?;
        Ok(OrderView::from(order))
    }

    async fn fetch(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.store
            .get_existing(order_id)
            .await
            .map_err(|e| match e {
                OrderStoreError::NotFound(id) => OrderError::OrderNotFound(id),
                other => other.into(),
            })
    }

    async fn transition(&self, order_id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self.store.update_status(order_id, status).await?;

        metrics::counter!("order_transitions_total", "status" => status.as_str()).increment(1);
        tracing::info!(%order_id, %status, "order status changed");

        Ok(order)
    }
}

fn reject(err: OrderError) -> OrderFailure {
    let code = err.code();
    metrics::counter!("order_rejections_total", "code" => code.as_str()).increment(1);
    match &err {
        OrderError::Store(message) => {
            tracing::error!(%code, error = %message, "order store failure")
        }
        _ => tracing::warn!(%code, reason = %err, "order operation rejected"),
    }
    err.into()
}

fn reject_draft(failure: OrderFailure) -> OrderFailure {
    for code in failure.codes() {
        metrics::counter!("order_rejections_total", "code" => code.as_str()).increment(1);
    }
    tracing::warn!(reason = %failure, "order draft rejected");
    failure
}
