//! Order creation drafts.

use common::{Amount, CustomerType, Order, PaymentMethod};

use super::ValidationError;
use crate::error::OrderFailure;

/// Unvalidated input for creating an order.
///
/// Every field but the delivery address may be missing; the address is
/// accepted as given, empty or not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub amount: Option<Amount>,
    pub product_name: Option<String>,
    pub customer_type: Option<CustomerType>,
    pub delivery_address: String,
    pub payment_method: Option<PaymentMethod>,
}

impl OrderDraft {
    /// Creates a draft with every field filled in.
    pub fn new(
        amount: Amount,
        product_name: impl Into<String>,
        customer_type: CustomerType,
        delivery_address: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            amount: Some(amount),
            product_name: Some(product_name.into()),
            customer_type: Some(customer_type),
            delivery_address: delivery_address.into(),
            payment_method: Some(payment_method),
        }
    }

    /// Builds a `New` order from the draft.
    ///
    /// The amount is rounded to two decimal places. Missing required fields
    /// are reported as validation errors, in field order.
    pub fn into_order(self) -> Result<Order, OrderFailure> {
        match (
            self.amount,
            self.product_name,
            self.customer_type,
            self.payment_method,
        ) {
            (Some(amount), Some(product_name), Some(customer_type), Some(payment_method)) => {
                Ok(Order::new(
                    amount.rounded(),
                    product_name.trim(),
                    customer_type,
                    self.delivery_address,
                    payment_method,
                ))
            }
            (amount, product_name, customer_type, payment_method) => {
                let mut errors = Vec::new();
                if amount.is_none() {
                    errors.push(ValidationError::AmountRequired);
                }
                if product_name.is_none() {
                    errors.push(ValidationError::ProductNameRequired);
                }
                if customer_type.is_none() {
                    errors.push(ValidationError::CustomerTypeRequired);
                }
                if payment_method.is_none() {
                    errors.push(ValidationError::PaymentMethodRequired);
                }
                Err(OrderFailure::from_missing_fields(errors))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use common::OrderStatus;

    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_complete_draft_builds_new_order() {
        let draft = OrderDraft::new(
            Amount::from_units(150),
            "Flow Test Product",
            CustomerType::Person,
            "456 Flow St",
            PaymentMethod::Card,
        );

        let order = draft.into_order().unwrap();
        assert_eq!(order.amount(), Amount::from_units(150));
        assert_eq!(order.product_name(), "Flow Test Product");
        assert_eq!(order.customer_type(), CustomerType::Person);
        assert_eq!(order.delivery_address(), "456 Flow St");
        assert_eq!(order.payment_method(), PaymentMethod::Card);
        assert_eq!(order.status(), OrderStatus::New);
    }

    #[test]
    fn test_amount_is_rounded_to_cents() {
        let draft = OrderDraft::new(
            serde_json::from_str("\"10.004\"").unwrap(),
            "Widget",
            CustomerType::Company,
            "1 Main St",
            PaymentMethod::Card,
        );

        let order = draft.into_order().unwrap();
        assert_eq!(order.amount(), Amount::from_cents(1000));
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let draft = OrderDraft {
            product_name: Some("Widget".to_string()),
            ..OrderDraft::default()
        };

        let failure = draft.into_order().unwrap_err();
        assert!(failure.is_validation());
        assert_eq!(
            failure.codes(),
            vec![
                ErrorCode::AmountRequired,
                ErrorCode::CustomerTypeRequired,
                ErrorCode::PaymentMethodRequired,
            ]
        );
    }
}
