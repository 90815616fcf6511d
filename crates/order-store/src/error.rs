use common::UnknownCode;
use thiserror::Error;

use crate::OrderId;

/// Errors that can occur when interacting with the order store.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// The order was not found in the store.
    #[error("Order with id {0} not found.")]
    NotFound(OrderId),

    /// An order with the same identifier has already been stored.
    #[error("Order with id {0} already exists.")]
    AlreadyExists(OrderId),

    /// The store cannot serve requests right now.
    #[error("Order store unavailable: {0}")]
    Unavailable(String),

    /// A stored row could not be turned back into an order.
    #[error("Corrupt order record: {0}")]
    Corrupt(#[from] UnknownCode),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for order store operations.
pub type Result<T> = std::result::Result<T, OrderStoreError>;
