//! Order lifecycle endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use domain::{Amount, CustomerType, OrderDraft, OrderId, OrderService, OrderView, PaymentMethod};
use order_store::OrderStore;
use serde::Deserialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub order_service: OrderService<S>,
}

// -- Request types --

/// Body of `POST /orders`. Every field may be omitted; missing fields are
/// reported as validation errors.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub amount: Option<Amount>,
    pub product_name: Option<String>,
    pub customer_type: Option<CustomerType>,
    pub delivery_address: Option<String>,
    pub payment_method: Option<PaymentMethod>,
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(req: CreateOrderRequest) -> Self {
        OrderDraft {
            amount: req.amount,
            product_name: req.product_name,
            customer_type: req.customer_type,
            delivery_address: req.delivery_address.unwrap_or_default(),
            payment_method: req.payment_method,
        }
    }
}

// -- Handlers --

/// POST /orders: create a new order.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: OrderStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    WithRejection(Json(req), _): WithRejection<Json<CreateOrderRequest>, ApiError>,
) -> Result<(StatusCode, Json<OrderView>), ApiError> {
    let order = state.order_service.create_order(req.into()).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders: list every order, oldest first.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    Ok(Json(state.order_service.list_orders().await?))
}

/// GET /orders/{id}: load an order by ID.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(state.order_service.get_order(order_id).await?))
}

/// POST /orders/{id}/warehouse: move an order to the warehouse.
#[tracing::instrument(skip(state))]
pub async fn warehouse<S: OrderStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(state.order_service.move_to_warehouse(order_id).await?))
}

/// POST /orders/{id}/ship: hand an order to the carrier.
///
/// Responds with 202 since the `InShipping` transition happens later; the
/// body shows the order as it was when shipping was requested.
#[tracing::instrument(skip(state))]
pub async fn ship<S: OrderStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<OrderView>), ApiError> {
    let order_id = parse_order_id(&id)?;
    let order = state.order_service.ship_order(order_id).await?;
    Ok((StatusCode::ACCEPTED, Json(order)))
}

/// POST /orders/{id}/close: close an order.
#[tracing::instrument(skip(state))]
pub async fn close<S: OrderStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(state.order_service.close_order(order_id).await?))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::InvalidId(format!("Invalid ID format: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_address_gives_empty_address() {
        let req: CreateOrderRequest = serde_json::from_value(serde_json::json!({
            "amount": 150,
            "product_name": "Widget",
            "customer_type": "Person",
            "payment_method": "Card"
        }))
        .unwrap();

        let draft = OrderDraft::from(req);
        assert_eq!(draft.amount, Some(Amount::from_units(150)));
        assert_eq!(draft.delivery_address, "");
        assert_eq!(draft.payment_method, Some(PaymentMethod::Card));
    }

    #[test]
    fn test_empty_request_gives_empty_draft() {
        let req: CreateOrderRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(OrderDraft::from(req), OrderDraft::default());
    }

    #[test]
    fn test_parse_order_id() {
        let id = OrderId::new();
        assert_eq!(parse_order_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_order_id("not-a-uuid"),
            Err(ApiError::InvalidId(_))
        ));
    }
}
