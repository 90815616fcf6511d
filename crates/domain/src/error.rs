//! Domain error types.
//!
//! Engine operations never return a bare error: every failure is an
//! [`OrderFailure`], an ordered non-empty list of [`ErrorEntry`] values built
//! either from field validation errors or from a single [`OrderError`].

use common::OrderId;
use order_store::OrderStoreError;
use serde::Serialize;
use thiserror::Error;

use crate::order::ValidationError;

/// Stable identifier of every failure the engine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    AmountRequired,
    AmountTooLow,
    AmountTooHigh,
    ProductNameRequired,
    ProductNameTooLong,
    CustomerTypeRequired,
    PaymentMethodRequired,
    OrderNotFound,
    OrderAlreadyClosed,
    OrderWithoutDeliveryAddress,
    StoreFailure,
}

impl ErrorCode {
    /// Returns the code name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AmountRequired => "AmountRequired",
            ErrorCode::AmountTooLow => "AmountTooLow",
            ErrorCode::AmountTooHigh => "AmountTooHigh",
            ErrorCode::ProductNameRequired => "ProductNameRequired",
            ErrorCode::ProductNameTooLong => "ProductNameTooLong",
            ErrorCode::CustomerTypeRequired => "CustomerTypeRequired",
            ErrorCode::PaymentMethodRequired => "PaymentMethodRequired",
            ErrorCode::OrderNotFound => "OrderNotFound",
            ErrorCode::OrderAlreadyClosed => "OrderAlreadyClosed",
            ErrorCode::OrderWithoutDeliveryAddress => "OrderWithoutDeliveryAddress",
            ErrorCode::StoreFailure => "StoreFailure",
        }
    }

    /// Returns true for codes raised by field validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorCode::AmountRequired
                | ErrorCode::AmountTooLow
                | ErrorCode::AmountTooHigh
                | ErrorCode::ProductNameRequired
                | ErrorCode::ProductNameTooLong
                | ErrorCode::CustomerTypeRequired
                | ErrorCode::PaymentMethodRequired
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Business-rule errors raised by lifecycle operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// No order has the requested identifier.
    #[error("Order with id {0} not found.")]
    OrderNotFound(OrderId),

    /// The order is closed and cannot be advanced.
    #[error("Order with id {0} is already closed.")]
    OrderAlreadyClosed(OrderId),

    /// The order cannot be handled without a delivery address.
    #[error("Order with id {0} has no delivery address.")]
    OrderWithoutDeliveryAddress(OrderId),

    /// The order store failed unexpectedly.
    #[error("{0}")]
    Store(String),
}

impl OrderError {
    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            OrderError::OrderAlreadyClosed(_) => ErrorCode::OrderAlreadyClosed,
            OrderError::OrderWithoutDeliveryAddress(_) => ErrorCode::OrderWithoutDeliveryAddress,
            OrderError::Store(_) => ErrorCode::StoreFailure,
        }
    }
}

impl From<OrderStoreError> for OrderError {
    fn from(e: OrderStoreError) -> Self {
        OrderError::Store(e.to_string())
    }
}

/// One reported failure: a stable code, the offending field for validation
/// errors, and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub code: ErrorCode,
    pub field: Option<&'static str>,
    pub message: String,
}

impl From<&ValidationError> for ErrorEntry {
    fn from(e: &ValidationError) -> Self {
        Self {
            code: e.code(),
            field: Some(e.field()),
            message: e.to_string(),
        }
    }
}

impl From<&OrderError> for ErrorEntry {
    fn from(e: &OrderError) -> Self {
        Self {
            code: e.code(),
            field: None,
            message: e.to_string(),
        }
    }
}

/// Failure side of every engine operation.
///
/// Always holds at least one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFailure {
    errors: Vec<ErrorEntry>,
}

impl OrderFailure {
    /// Builds a failure from validation errors, or None if there are none.
    pub fn from_validation(errors: &[ValidationError]) -> Option<Self> {
        if errors.is_empty() {
            return None;
        }
        Some(Self {
            errors: errors.iter().map(ErrorEntry::from).collect(),
        })
    }

    /// Builds a failure from the required fields a draft lacks.
    ///
    /// Callers only reach this after finding at least one missing field.
    pub(crate) fn from_missing_fields(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self {
            errors: errors.iter().map(ErrorEntry::from).collect(),
        }
    }

    /// Returns the reported entries in order.
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// Consumes the failure and returns its entries.
    pub fn into_errors(self) -> Vec<ErrorEntry> {
        self.errors
    }

    /// Returns the codes of all entries in order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.errors.iter().map(|e| e.code).collect()
    }

    /// Returns true if any entry has the given code.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Returns true if the failure came from field validation.
    pub fn is_validation(&self) -> bool {
        self.errors.iter().all(|e| e.code.is_validation())
    }
}

impl From<OrderError> for OrderFailure {
    fn from(e: OrderError) -> Self {
        Self {
            errors: vec![ErrorEntry::from(&e)],
        }
    }
}

impl std::fmt::Display for OrderFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", entry.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for OrderFailure {}
