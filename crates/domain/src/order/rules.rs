//! Order lifecycle rules.
//!
//! Pure decisions taken from the current order; the engine turns each
//! decision into store writes.
//!
//! ```text
//! New ──► InStock ──► InShipping ──► Closed
//!  │  │       │
//!  │  └───────┴──► Error
//!  └──► ReturnedToCustomer
//! ```

use common::{Amount, Order, OrderStatus, PaymentMethod};

/// Cash-on-delivery orders at or above this amount (in whole units) are
/// sent back to the customer at warehousing.
pub const CASH_ON_DELIVERY_LIMIT: i64 = 2500;

/// Status a freshly created order starts in.
///
/// Orders without a delivery address are defective from the start.
pub fn initial_status(order: &Order) -> OrderStatus {
    if order.has_delivery_address() {
        OrderStatus::New
    } else {
        OrderStatus::Error
    }
}

/// Outcome of moving an order to the warehouse. The first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarehouseDecision {
    /// Order is closed; nothing changes.
    RejectClosed,
    /// High-value cash-on-delivery order; goes to `ReturnedToCustomer`.
    ReturnToCustomer,
    /// No delivery address; goes to `Error` and the call fails.
    MissingAddress,
    /// Goes to `InStock`.
    Stock,
}

impl WarehouseDecision {
    pub fn for_order(order: &Order) -> Self {
        if order.status().is_closed() {
            WarehouseDecision::RejectClosed
        } else if is_high_value_cash_on_delivery(order) {
            WarehouseDecision::ReturnToCustomer
        } else if !order.has_delivery_address() {
            WarehouseDecision::MissingAddress
        } else {
            WarehouseDecision::Stock
        }
    }
}

/// Outcome of handing an order to the carrier. The first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingDecision {
    /// Order is closed; nothing changes.
    RejectClosed,
    /// No delivery address; goes to `Error` and the call fails.
    MissingAddress,
    /// Schedule the delayed `InShipping` transition.
    Dispatch,
}

impl ShippingDecision {
    pub fn for_order(order: &Order) -> Self {
        if order.status().is_closed() {
            ShippingDecision::RejectClosed
        } else if !order.has_delivery_address() {
            ShippingDecision::MissingAddress
        } else {
            ShippingDecision::Dispatch
        }
    }
}

fn is_high_value_cash_on_delivery(order: &Order) -> bool {
    order.payment_method() == PaymentMethod::CashOnDelivery
        && order.amount() >= Amount::from_units(CASH_ON_DELIVERY_LIMIT)
}

#[cfg(test)]
mod tests {
    use common::CustomerType;

    use super::*;

    fn order(amount: Amount, address: &str, payment_method: PaymentMethod) -> Order {
        Order::new(amount, "Widget", CustomerType::Person, address, payment_method)
    }

    #[test]
    fn test_initial_status_depends_on_address() {
        let addressed = order(Amount::from_units(100), "1 Main St", PaymentMethod::Card);
        let blank = order(Amount::from_units(100), "  ", PaymentMethod::Card);

        assert_eq!(initial_status(&addressed), OrderStatus::New);
        assert_eq!(initial_status(&blank), OrderStatus::Error);
    }

    #[test]
    fn test_warehouse_stocks_regular_order() {
        let o = order(Amount::from_units(150), "1 Main St", PaymentMethod::Card);
        assert_eq!(WarehouseDecision::for_order(&o), WarehouseDecision::Stock);
    }

    #[test]
    fn test_warehouse_limit_is_inclusive() {
        let at_limit = order(
            Amount::from_units(CASH_ON_DELIVERY_LIMIT),
            "1 Main St",
            PaymentMethod::CashOnDelivery,
        );
        let below_limit = order(
            Amount::from_cents(CASH_ON_DELIVERY_LIMIT * 100 - 1),
            "1 Main St",
            PaymentMethod::CashOnDelivery,
        );

        assert_eq!(
            WarehouseDecision::for_order(&at_limit),
            WarehouseDecision::ReturnToCustomer
        );
        assert_eq!(
            WarehouseDecision::for_order(&below_limit),
            WarehouseDecision::Stock
        );
    }

    #[test]
    fn test_warehouse_card_orders_ignore_limit() {
        let o = order(Amount::from_units(10_000), "1 Main St", PaymentMethod::Card);
        assert_eq!(WarehouseDecision::for_order(&o), WarehouseDecision::Stock);
    }

    #[test]
    fn test_warehouse_cash_on_delivery_checked_before_address() {
        let o = order(Amount::from_units(3000), "", PaymentMethod::CashOnDelivery);
        assert_eq!(
            WarehouseDecision::for_order(&o),
            WarehouseDecision::ReturnToCustomer
        );
    }

    #[test]
    fn test_warehouse_missing_address() {
        let o = order(Amount::from_units(100), " ", PaymentMethod::Card);
        assert_eq!(
            WarehouseDecision::for_order(&o),
            WarehouseDecision::MissingAddress
        );
    }

    #[test]
    fn test_closed_rejected_before_anything_else() {
        let o = order(Amount::from_units(3000), "", PaymentMethod::CashOnDelivery)
            .with_status(OrderStatus::Closed);

        assert_eq!(
            WarehouseDecision::for_order(&o),
            WarehouseDecision::RejectClosed
        );
        assert_eq!(
            ShippingDecision::for_order(&o),
            ShippingDecision::RejectClosed
        );
    }

    #[test]
    fn test_shipping_decisions() {
        let ready = order(Amount::from_units(100), "1 Main St", PaymentMethod::Card)
            .with_status(OrderStatus::InStock);
        let blank = order(Amount::from_units(100), "", PaymentMethod::Card);

        assert_eq!(ShippingDecision::for_order(&ready), ShippingDecision::Dispatch);
        assert_eq!(
            ShippingDecision::for_order(&blank),
            ShippingDecision::MissingAddress
        );
    }
}
