//! HTTP API server for the order lifecycle service.
//!
//! Provides REST endpoints for every order operation, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use domain::OrderService;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::{InMemoryOrderStore, OrderStore, OrderStoreError, PostgresOrderStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: OrderStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/orders", post(routes::orders::create::<S>))
        .route("/orders", get(routes::orders::list::<S>))
        .route("/orders/{id}", get(routes::orders::get::<S>))
        .route(
            "/orders/{id}/warehouse",
            post(routes::orders::warehouse::<S>),
        )
        .route("/orders/{id}/ship", post(routes::orders::ship::<S>))
        .route("/orders/{id}/close", post(routes::orders::close::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the application state around an order store.
pub fn create_state<S: OrderStore + Clone + 'static>(store: S, config: &Config) -> Arc<AppState<S>> {
    Arc::new(AppState {
        order_service: OrderService::with_shipping_delay(store, config.shipping_delay),
    })
}

/// Registers help text for the order metrics exported at `/metrics`.
pub fn describe_metrics() {
    metrics::describe_counter!("orders_created_total", "Orders accepted, by initial status");
    metrics::describe_counter!(
        "order_transitions_total",
        "Order status changes written, by target status"
    );
    metrics::describe_counter!(
        "order_rejections_total",
        "Failed order operations, by error code"
    );
    metrics::describe_counter!(
        "shipping_transitions_failed_total",
        "Background InShipping writes that failed"
    );
    metrics::describe_histogram!(
        "shipping_delay_seconds",
        metrics::Unit::Seconds,
        "Sampled carrier pickup delay"
    );
}

/// Opens the order store selected by the configuration.
///
/// With a `DATABASE_URL` this connects to Postgres and applies pending
/// migrations; without one, orders live in memory for the process lifetime.
pub async fn open_store(config: &Config) -> Result<Arc<dyn OrderStore>, OrderStoreError> {
    match &config.database_url {
        Some(url) => {
            let store = PostgresOrderStore::connect(url).await?;
            store.run_migrations().await?;
            tracing::info!("using Postgres order store");
            Ok(Arc::new(store))
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory order store");
            Ok(Arc::new(InMemoryOrderStore::new()))
        }
    }
}
