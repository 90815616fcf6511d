//! Domain layer for the order lifecycle service.
//!
//! This crate provides:
//! - Order drafts and field validation
//! - The order lifecycle rules (warehousing, shipping, closing)
//! - `OrderService`, the engine that applies those rules against an order store
//! - The background shipping transition scheduler
//! - `OrderView`, the outward-facing projection of an order

pub mod error;
pub mod order;

pub use common::{Amount, CustomerType, Order, OrderId, OrderStatus, PaymentMethod};
pub use error::{ErrorCode, ErrorEntry, OrderError, OrderFailure};
pub use order::{
    CASH_ON_DELIVERY_LIMIT, DelayWindow, DraftValidator, FieldRules, OrderDraft, OrderService,
    OrderView, PRODUCT_NAME_MAX_LEN, ShippingDecision, ShippingScheduler, ValidationError,
    WarehouseDecision,
};
