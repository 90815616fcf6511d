//! Shared types for the order lifecycle service.
//!
//! These are the records exchanged between the order store and the domain
//! layer: the order identifier, the amount value object, the lifecycle
//! status and the order record itself.

pub mod amount;
pub mod order;
pub mod types;

pub use amount::Amount;
pub use order::{CustomerType, Order, OrderStatus, PaymentMethod, UnknownCode};
pub use types::OrderId;
