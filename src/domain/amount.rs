//! Amount types
//!
//! Domain primitives for monetary values. `Amount` is what a payment carries
//! (strictly positive), `Balance` is what a customer owes (zero or positive).
//! Both are validated at construction, so an invalid value never reaches a
//! `Customer`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount represents a validated payment value.
///
/// # Invariants
/// - Value is always positive (> 0)
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use customer_ledger::domain::Amount;
///
/// let amount: Amount = "40.00".parse().unwrap();
/// assert_eq!(amount.value(), Decimal::new(4000, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// Errors that can occur when creating an Amount or Balance
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be positive (got {0})")]
    NotPositive(Decimal),

    #[error("Amount must not be negative (got {0})")]
    Negative(Decimal),

    #[error("Invalid amount format: {0}")]
    ParseError(String),
}

/// Parse user-entered text as a decimal.
fn parse_decimal(s: &str) -> Result<Decimal, AmountError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AmountError::ParseError("empty value".to_string()));
    }
    Decimal::from_str(trimmed).map_err(|e| AmountError::ParseError(e.to_string()))
}

/// Money is shown with at least two decimals and never loses precision.
fn fmt_money(value: &Decimal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.scale() < 2 {
        write!(f, "{:.2}", value)
    } else {
        write!(f, "{}", value)
    }
}

impl Amount {
    /// Create a new Amount with validation.
    ///
    /// # Errors
    /// - `AmountError::NotPositive` if value <= 0
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_money(&self.0, f)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::new(parse_decimal(s)?)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Balance represents the total due on a customer account.
/// Unlike Amount, Balance can be zero, but never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Balance(Decimal);

impl Balance {
    /// Create a new balance (zero or positive)
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Create a zero balance
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Check if balance covers the given payment
    pub fn covers(&self, amount: &Amount) -> bool {
        self.0 >= amount.value()
    }

    /// Subtract a payment, flooring at zero
    pub fn saturating_debit(&self, amount: &Amount) -> Balance {
        let remaining = self.0 - amount.value();
        if remaining < Decimal::ZERO {
            Balance::zero()
        } else {
            Self(remaining)
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_money(&self.0, f)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Balance {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Balance::new(parse_decimal(s)?)
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Balance::new(value)
    }
}

impl From<Balance> for Decimal {
    fn from(balance: Balance) -> Self {
        balance.0
    }
}
