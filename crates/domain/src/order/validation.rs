//! Field validation for order drafts.

use common::Amount;
use thiserror::Error;

use super::OrderDraft;
use crate::error::ErrorCode;

/// Longest accepted product name, in characters.
pub const PRODUCT_NAME_MAX_LEN: usize = 100;

/// A validation failure tied to one draft field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Amount is required.")]
    AmountRequired,

    #[error("Amount is too low.")]
    AmountTooLow,

    #[error("Amount is too high.")]
    AmountTooHigh,

    #[error("Product name is required.")]
    ProductNameRequired,

    #[error("Product name must be at most {max} characters.")]
    ProductNameTooLong { max: usize },

    #[error("Customer type is required.")]
    CustomerTypeRequired,

    #[error("Payment method is required.")]
    PaymentMethodRequired,
}

impl ValidationError {
    /// Returns the name of the draft field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::AmountRequired
            | ValidationError::AmountTooLow
            | ValidationError::AmountTooHigh => "amount",
            ValidationError::ProductNameRequired | ValidationError::ProductNameTooLong { .. } => {
                "product_name"
            }
            ValidationError::CustomerTypeRequired => "customer_type",
            ValidationError::PaymentMethodRequired => "payment_method",
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::AmountRequired => ErrorCode::AmountRequired,
            ValidationError::AmountTooLow => ErrorCode::AmountTooLow,
            ValidationError::AmountTooHigh => ErrorCode::AmountTooHigh,
            ValidationError::ProductNameRequired => ErrorCode::ProductNameRequired,
            ValidationError::ProductNameTooLong { .. } => ErrorCode::ProductNameTooLong,
            ValidationError::CustomerTypeRequired => ErrorCode::CustomerTypeRequired,
            ValidationError::PaymentMethodRequired => ErrorCode::PaymentMethodRequired,
        }
    }
}

/// Pre-check run on every draft before an order is built.
///
/// Returns all violations in field order, or an empty list.
pub trait DraftValidator: Send + Sync {
    fn validate(&self, draft: &OrderDraft) -> Vec<ValidationError>;
}

/// Default required-field rules.
///
/// Amount, product name, customer type and payment method are required.
/// The delivery address is deliberately not checked here; an order without
/// one is accepted and flagged by the lifecycle rules instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRules;

impl DraftValidator for FieldRules {
    fn validate(&self, draft: &OrderDraft) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        match draft.amount {
            None => errors.push(ValidationError::AmountRequired),
            Some(amount) if amount.is_zero() => errors.push(ValidationError::AmountRequired),
            Some(amount) if amount < Amount::minimum() => {
                errors.push(ValidationError::AmountTooLow)
            }
            Some(amount) if amount.rounded() > Amount::maximum() => {
                errors.push(ValidationError::AmountTooHigh)
            }
            Some(_) => {}
        }

        match draft.product_name.as_deref().map(str::trim) {
            None | Some("") => errors.push(ValidationError::ProductNameRequired),
            Some(name) if name.chars().count() > PRODUCT_NAME_MAX_LEN => {
                errors.push(ValidationError::ProductNameTooLong {
                    max: PRODUCT_NAME_MAX_LEN,
                })
            }
            Some(_) => {}
        }

        if draft.customer_type.is_none() {
            errors.push(ValidationError::CustomerTypeRequired);
        }

        if draft.payment_method.is_none() {
            errors.push(ValidationError::PaymentMethodRequired);
        }

        errors
    }
}
