//! Order record and its lifecycle enums.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Amount, OrderId};

/// A stored numeric code did not match any known variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: i16,
}

/// The status of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// New ──► InStock ──► InShipping ──► Closed
///  │  │       │
///  │  └───────┴──► Error
///  └──► ReturnedToCustomer
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order has been accepted and awaits warehousing.
    #[default]
    New,

    /// Order has been moved to the warehouse.
    InStock,

    /// Carrier has picked the order up.
    InShipping,

    /// High-value cash-on-delivery order sent back at warehousing.
    ReturnedToCustomer,

    /// Order is defective (no delivery address).
    Error,

    /// Order is closed (terminal state).
    Closed,
}

impl OrderStatus {
    /// Returns true if no further lifecycle operation may change the order.
    pub fn is_closed(&self) -> bool {
        matches!(self, OrderStatus::Closed)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "New",
            OrderStatus::InStock => "InStock",
            OrderStatus::InShipping => "InShipping",
            OrderStatus::ReturnedToCustomer => "ReturnedToCustomer",
            OrderStatus::Error => "Error",
            OrderStatus::Closed => "Closed",
        }
    }

    /// Returns the stable numeric code used by persistent stores.
    pub fn code(&self) -> i16 {
        match self {
            OrderStatus::New => 1,
            OrderStatus::InStock => 2,
            OrderStatus::InShipping => 3,
            OrderStatus::ReturnedToCustomer => 4,
            OrderStatus::Error => 5,
            OrderStatus::Closed => 6,
        }
    }

    /// Parses a stable numeric code.
    pub fn from_code(code: i16) -> Result<Self, UnknownCode> {
        match code {
            1 => Ok(OrderStatus::New),
            2 => Ok(OrderStatus::InStock),
            3 => Ok(OrderStatus::InShipping),
            4 => Ok(OrderStatus::ReturnedToCustomer),
            5 => Ok(OrderStatus::Error),
            6 => Ok(OrderStatus::Closed),
            _ => Err(UnknownCode {
                kind: "order status",
                code,
            }),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Type of customer placing the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerType {
    Person,
    Company,
}

impl CustomerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::Person => "Person",
            CustomerType::Company => "Company",
        }
    }

    pub fn code(&self) -> i16 {
        match self {
            CustomerType::Person => 1,
            CustomerType::Company => 2,
        }
    }

    pub fn from_code(code: i16) -> Result<Self, UnknownCode> {
        match code {
            1 => Ok(CustomerType::Person),
            2 => Ok(CustomerType::Company),
            _ => Err(UnknownCode {
                kind: "customer type",
                code,
            }),
        }
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the customer pays for the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Card,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::CashOnDelivery => "CashOnDelivery",
        }
    }

    pub fn code(&self) -> i16 {
        match self {
            PaymentMethod::Card => 1,
            PaymentMethod::CashOnDelivery => 2,
        }
    }

    pub fn from_code(code: i16) -> Result<Self, UnknownCode> {
        match code {
            1 => Ok(PaymentMethod::Card),
            2 => Ok(PaymentMethod::CashOnDelivery),
            _ => Err(UnknownCode {
                kind: "payment method",
                code,
            }),
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persisted order.
///
/// The identifier and creation timestamp are fixed when the order is built;
/// only the status may change afterwards, through [`Order::with_status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    amount: Amount,
    product_name: String,
    customer_type: CustomerType,
    delivery_address: String,
    payment_method: PaymentMethod,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a new order with a fresh identifier, status `New` and the
    /// current time as its creation timestamp.
    ///
    /// The timestamp is truncated to microseconds, the finest precision the
    /// stores keep, so it reads back unchanged.
    pub fn new(
        amount: Amount,
        product_name: impl Into<String>,
        customer_type: CustomerType,
        delivery_address: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: OrderId::new(),
            amount,
            product_name: product_name.into(),
            customer_type,
            delivery_address: delivery_address.into(),
            payment_method,
            status: OrderStatus::New,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Rebuilds an order from previously stored fields.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: OrderId,
        amount: Amount,
        product_name: String,
        customer_type: CustomerType,
        delivery_address: String,
        payment_method: PaymentMethod,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            product_name,
            customer_type,
            delivery_address,
            payment_method,
            status,
            created_at,
        }
    }

    /// Returns the same order with a different status.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn customer_type(&self) -> CustomerType {
        self.customer_type
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if the delivery address contains anything but whitespace.
    pub fn has_delivery_address(&self) -> bool {
        !self.delivery_address.trim().is_empty()
    }
}
