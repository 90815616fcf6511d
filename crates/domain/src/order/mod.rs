//! Order lifecycle: drafts, validation, rules, engine and views.

mod draft;
mod rules;
mod scheduler;
mod service;
mod validation;
mod view;

pub use draft::OrderDraft;
pub use rules::{CASH_ON_DELIVERY_LIMIT, ShippingDecision, WarehouseDecision, initial_status};
pub use scheduler::{DelayWindow, ShippingScheduler};
pub use service::OrderService;
pub use validation::{DraftValidator, FieldRules, PRODUCT_NAME_MAX_LEN, ValidationError};
pub use view::OrderView;
