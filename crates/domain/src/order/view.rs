//! Outward-facing order representation.

use chrono::{DateTime, Utc};
use common::{Amount, CustomerType, Order, OrderId, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};

/// An order as returned by every engine operation.
///
/// Carries the same fields as the stored [`Order`]; front ends render or
/// serialize it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    pub id: OrderId,
    pub amount: Amount,
    pub product_name: String,
    pub customer_type: CustomerType,
    pub delivery_address: String,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            amount: order.amount(),
            product_name: order.product_name().to_string(),
            customer_type: order.customer_type(),
            delivery_address: order.delivery_address().to_string(),
            payment_method: order.payment_method(),
            status: order.status(),
            created_at: order.created_at(),
        }
    }
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self::from(&order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_copies_every_field() {
        let order = Order::new(
            Amount::from_cents(15_000),
            "Flow Test Product",
            CustomerType::Company,
            "456 Flow St",
            PaymentMethod::CashOnDelivery,
        )
        .with_status(OrderStatus::InStock);

        let view = OrderView::from(&order);

        assert_eq!(view.id, order.id());
        assert_eq!(view.amount, order.amount());
        assert_eq!(view.product_name, "Flow Test Product");
        assert_eq!(view.customer_type, CustomerType::Company);
        assert_eq!(view.delivery_address, "456 Flow St");
        assert_eq!(view.payment_method, PaymentMethod::CashOnDelivery);
        assert_eq!(view.status, OrderStatus::InStock);
        assert_eq!(view.created_at, order.created_at());
    }

    #[test]
    fn test_view_json_shape() {
        let order = Order::new(
            Amount::from_units(100),
            "Widget",
            CustomerType::Person,
            "",
            PaymentMethod::Card,
        );
        let json = serde_json::to_value(OrderView::from(order)).unwrap();

        assert_eq!(json["product_name"], "Widget");
        assert_eq!(json["customer_type"], "Person");
        assert_eq!(json["payment_method"], "Card");
        assert_eq!(json["status"], "New");
        assert_eq!(json["delivery_address"], "");
    }
}
