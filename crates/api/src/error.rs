//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{ErrorCode, OrderFailure};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed order id in the request path.
    InvalidId(String),
    /// Request body that is not valid JSON or does not fit the request type.
    InvalidBody { status: StatusCode, message: String },
    /// Failure reported by the order service.
    Order(OrderFailure),
}

impl ApiError {
    /// Returns the HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Order(failure) => failure_status(failure),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::InvalidId(message) => serde_json::json!({
                "errors": [{ "code": "InvalidId", "field": "id", "message": message }]
            }),
            ApiError::InvalidBody { message, .. } => serde_json::json!({
                "errors": [{ "code": "InvalidBody", "field": null, "message": message }]
            }),
            ApiError::Order(failure) => {
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %failure, "internal server error");
                }
                serde_json::json!({ "errors": failure.errors() })
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn failure_status(failure: &OrderFailure) -> StatusCode {
    if failure.is_validation() {
        return StatusCode::UNPROCESSABLE_ENTITY;
    }

    match failure.codes().first() {
        Some(ErrorCode::OrderNotFound) => StatusCode::NOT_FOUND,
        Some(ErrorCode::OrderAlreadyClosed) => StatusCode::CONFLICT,
        Some(ErrorCode::OrderWithoutDeliveryAddress) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<OrderFailure> for ApiError {
    fn from(failure: OrderFailure) -> Self {
        ApiError::Order(failure)
    }
}
