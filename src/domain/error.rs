//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-specific errors
///
/// These errors represent input that cannot become a domain value, business
/// rule violations, and lookups that miss. They are independent of the web
/// layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Amount text is not a number, or is out of range for its use
    #[error("Invalid amount entered! {0}")]
    InvalidAmount(String),

    /// Date text does not match YYYY-MM-DD
    #[error("Invalid date format. Please use YYYY-MM-DD. (got {0:?})")]
    InvalidDate(String),

    /// Payment larger than what the customer owes
    #[error("Payment amount exceeds due balance! (payment {amount}, due {due})")]
    PaymentExceedsDue { amount: Decimal, due: Decimal },

    /// No customer at that id or position
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}

impl DomainError {
    /// Create a payment-exceeds-due error
    pub fn payment_exceeds_due(amount: Decimal, due: Decimal) -> Self {
        Self::PaymentExceedsDue { amount, due }
    }

    /// Check if this is a client error (user's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidDate(_) | Self::PaymentExceedsDue { .. }
        )
    }
}

impl From<super::AmountError> for DomainError {
    fn from(err: super::AmountError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AmountError;

    #[test]
    fn test_payment_exceeds_due_error() {
        let err = DomainError::payment_exceeds_due(Decimal::new(200, 0), Decimal::new(60, 0));

        assert!(err.is_client_error());
        assert!(err.to_string().contains("200"));
        assert!(err.to_string().contains("60"));
    }

    #[test]
    fn test_not_found_is_not_client_error() {
        let err = DomainError::CustomerNotFound("7".to_string());
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_from_amount_error() {
        let err: DomainError = AmountError::ParseError("bad".to_string()).into();
        assert!(matches!(err, DomainError::InvalidAmount(_)));
    }
}
