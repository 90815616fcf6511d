//! Delayed `InShipping` transition.
//!
//! Shipping an order hands it to a carrier that picks it up some time later.
//! The pickup is modelled as a detached tokio task that sleeps for a random
//! delay and then writes `InShipping` to the store. The task is best-effort:
//! it is not persisted, not retried, cannot be cancelled or awaited, and is
//! lost if the process exits first. Nothing orders it against other writes
//! to the same order; whichever status is written last wins.

use std::time::Duration;

use common::{OrderId, OrderStatus};
use order_store::OrderStore;
use rand::Rng;
use tracing::Instrument;

/// Half-open range `[min, max)` the pickup delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    min: Duration,
    max: Duration,
}

impl DelayWindow {
    pub const DEFAULT_MIN_MS: u64 = 1000;
    pub const DEFAULT_MAX_MS: u64 = 5000;

    /// Creates a window, or None unless `min < max`.
    pub fn new(min: Duration, max: Duration) -> Option<Self> {
        (min < max).then_some(Self { min, max })
    }

    /// Creates a window from millisecond bounds, or None unless `min < max`.
    pub fn from_millis(min: u64, max: u64) -> Option<Self> {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draws a delay uniformly from the window.
    pub fn sample(&self) -> Duration {
        rand::thread_rng().gen_range(self.min..self.max)
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(Self::DEFAULT_MIN_MS),
            max: Duration::from_millis(Self::DEFAULT_MAX_MS),
        }
    }
}

/// Spawns fire-and-forget `InShipping` transitions.
#[derive(Clone)]
pub struct ShippingScheduler<S> {
    store: S,
    window: DelayWindow,
}

impl<S> ShippingScheduler<S>
where
    S: OrderStore + Clone + 'static,
{
    pub fn new(store: S, window: DelayWindow) -> Self {
        Self { store, window }
    }

    pub fn window(&self) -> DelayWindow {
        self.window
    }

    /// Schedules the transition and returns immediately.
    ///
    /// Must be called from within a tokio runtime. Failures of the eventual
    /// store write are logged and counted, never reported to the caller.
    pub fn schedule(&self, order_id: OrderId) {
        let delay = self.window.sample();
        let store = self.store.clone();

        metrics::histogram!("shipping_delay_seconds").record(delay.as_secs_f64());
        tracing::info!(
            %order_id,
            delay_ms = delay.as_millis() as u64,
            "shipping transition scheduled"
        );

        let span = tracing::info_span!("shipping_transition", %order_id);
        tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;

                match store.update_status(order_id, OrderStatus::InShipping).await {
                    Ok(_) => {
                        metrics::counter!(
                            "order_transitions_total",
                            "status" => OrderStatus::InShipping.as_str()
                        )
                        .increment(1);
                        tracing::info!("order picked up by carrier");
                    }
                    Err(e) => {
                        metrics::counter!("shipping_transitions_failed_total").increment(1);
                        tracing::warn!(error = %e, "shipping transition failed");
                    }
                }
            }
            .instrument(span),
        );
    }
}

#[cfg(test)]
mod tests {
    use common::{Amount, CustomerType, Order, PaymentMethod};
    use order_store::InMemoryOrderStore;

    use super::*;

    #[test]
    fn test_default_window() {
        let window = DelayWindow::default();
        assert_eq!(window.min(), Duration::from_millis(1000));
        assert_eq!(window.max(), Duration::from_millis(5000));
    }

    #[test]
    fn test_window_requires_min_below_max() {
        assert!(DelayWindow::from_millis(10, 20).is_some());
        assert!(DelayWindow::from_millis(20, 20).is_none());
        assert!(DelayWindow::from_millis(30, 20).is_none());
    }

    #[test]
    fn test_samples_stay_in_window() {
        let window = DelayWindow::default();
        for _ in 0..1000 {
            let delay = window.sample();
            assert!(delay >= window.min());
            assert!(delay < window.max());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_transition_happens_after_delay() {
        let store = InMemoryOrderStore::new();
        let order = store
            .create(Order::new(
                Amount::from_units(100),
                "Widget",
                CustomerType::Person,
                "1 Main St",
                PaymentMethod::Card,
            ))
            .await
            .unwrap();

        let window = DelayWindow::from_millis(100, 200).unwrap();
        let scheduler = ShippingScheduler::new(store.clone(), window);
        scheduler.schedule(order.id());

        tokio::time::sleep(Duration::from_millis(50)).await;
        let early = store.get(order.id()).await.unwrap().unwrap();
        assert_eq!(early.status(), OrderStatus::New);

        tokio::time::sleep(Duration::from_millis(200)).await;
        let late = store.get(order.id()).await.unwrap().unwrap();
        assert_eq!(late.status(), OrderStatus::InShipping);
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_order_is_swallowed() {
        let store = InMemoryOrderStore::new();
        let scheduler = ShippingScheduler::new(store.clone(), DelayWindow::default());

        scheduler.schedule(OrderId::new());
        tokio::time::sleep(Duration::from_secs(6)).await;

        assert_eq!(store.order_count().await, 0);
    }
}
