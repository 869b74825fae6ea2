//! Customer entity
//!
//! A billing account: contact details, the total due, and the payments made
//! against it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{Amount, Balance, DomainError};

/// Date format accepted for payment dates
pub const PAYMENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable customer identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CustomerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CustomerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One payment against a customer's balance. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: Amount,
    pub date: NaiveDate,
    pub method: String,
}

impl Payment {
    pub fn new(amount: Amount, date: NaiveDate, method: impl Into<String>) -> Self {
        Self {
            amount,
            date,
            method: method.into(),
        }
    }
}

/// Parse a payment date strictly as `YYYY-MM-DD`.
pub fn parse_payment_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, PAYMENT_DATE_FORMAT)
        .map_err(|_| DomainError::InvalidDate(s.to_string()))
}

/// Contact details supplied when a customer is created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
}

/// Partial update of contact details.
///
/// `None` and empty strings both mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
}

impl CustomerChanges {
    /// Build changes from raw form text, dropping empty values
    pub fn from_form(
        first_name: String,
        last_name: String,
        address: String,
        phone_number: String,
    ) -> Self {
        fn non_empty(value: String) -> Option<String> {
            (!value.is_empty()).then_some(value)
        }

        Self {
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            address: non_empty(address),
            phone_number: non_empty(phone_number),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.address.is_none()
            && self.phone_number.is_none()
    }
}

/// Read-only snapshot of a customer, as shown by list and detail views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerInfo {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    pub total_due: Balance,
    pub payments: Vec<Payment>,
    pub remaining_balance: Balance,
}

/// Customer entity
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    details: CustomerDetails,
    total_due: Balance,
    payments: Vec<Payment>,
}

impl Customer {
    // =========================================================================
    // Customer::create()
    // =========================================================================

    /// Create a customer with an empty payment history
    pub fn create(details: CustomerDetails, total_due: Balance) -> Self {
        Self {
            id: CustomerId::new(),
            details,
            total_due,
            payments: Vec::new(),
        }
    }

    // =========================================================================
    // Customer::record_payment()
    // =========================================================================

    /// Record a payment and reduce the total due.
    ///
    /// A payment larger than the current due is rejected without touching
    /// the customer. The subtraction itself still floors at zero.
    pub fn record_payment(&mut self, payment: Payment) -> Result<Balance, DomainError> {
        if !self.total_due.covers(&payment.amount) {
            return Err(DomainError::payment_exceeds_due(
                payment.amount.value(),
                self.total_due.value(),
            ));
        }

        self.total_due = self.total_due.saturating_debit(&payment.amount);
        self.payments.push(payment);
        Ok(self.total_due)
    }

    /// Overwrite the total due
    pub fn set_total_due(&mut self, total_due: Balance) {
        self.total_due = total_due;
    }

    /// Apply the non-empty fields of `changes`
    pub fn update_details(&mut self, changes: CustomerChanges) {
        let CustomerChanges {
            first_name,
            last_name,
            address,
            phone_number,
        } = changes;

        let fields = [
            (&mut self.details.first_name, first_name),
            (&mut self.details.last_name, last_name),
            (&mut self.details.address, address),
            (&mut self.details.phone_number, phone_number),
        ];
        for (slot, value) in fields {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                *slot = value;
            }
        }
    }

    pub fn info(&self) -> CustomerInfo {
        CustomerInfo {
            id: self.id,
            first_name: self.details.first_name.clone(),
            last_name: self.details.last_name.clone(),
            address: self.details.address.clone(),
            phone_number: self.details.phone_number.clone(),
            total_due: self.total_due,
            payments: self.payments.clone(),
            remaining_balance: self.total_due,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn details(&self) -> &CustomerDetails {
        &self.details
    }

    pub fn total_due(&self) -> Balance {
        self.total_due
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn jane(due: rust_decimal::Decimal) -> Customer {
        Customer::create(
            CustomerDetails {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                address: "1 Elm St".to_string(),
                phone_number: "555-1234".to_string(),
            },
            Balance::new(due).unwrap(),
        )
    }

    fn payment(amount: rust_decimal::Decimal) -> Payment {
        Payment::new(
            Amount::new(amount).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            "cash",
        )
    }

    #[test]
    fn test_create_has_no_payments() {
        let customer = jane(dec!(100.00));
        assert!(customer.payments().is_empty());
        assert_eq!(customer.total_due().value(), dec!(100.00));
    }

    #[test]
    fn test_record_payment_reduces_due() {
        let mut customer = jane(dec!(100.00));
        let remaining = customer.record_payment(payment(dec!(40.00))).unwrap();

        assert_eq!(remaining.value(), dec!(60.00));
        assert_eq!(customer.payments(), &[payment(dec!(40.00))]);
    }

    #[test]
    fn test_payment_of_full_due_reaches_zero() {
        let mut customer = jane(dec!(25));
        let remaining = customer.record_payment(payment(dec!(25))).unwrap();
        assert_eq!(remaining, Balance::zero());
    }

    #[test]
    fn test_overpayment_rejected_without_mutation() {
        let mut customer = jane(dec!(60.00));
        let result = customer.record_payment(payment(dec!(200.00)));

        assert!(matches!(result, Err(DomainError::PaymentExceedsDue { .. })));
        assert_eq!(customer.total_due().value(), dec!(60.00));
        assert!(customer.payments().is_empty());
    }

    #[test]
    fn test_update_details_partial() {
        let mut customer = jane(dec!(1));
        customer.update_details(CustomerChanges::from_form(
            String::new(),
            "Smith".to_string(),
            String::new(),
            String::new(),
        ));

        let details = customer.details();
        assert_eq!(details.first_name, "Jane");
        assert_eq!(details.last_name, "Smith");
        assert_eq!(details.address, "1 Elm St");
        assert_eq!(details.phone_number, "555-1234");
    }

    #[test]
    fn test_update_details_ignores_explicit_empty_strings() {
        let mut customer = jane(dec!(1));
        customer.update_details(CustomerChanges {
            address: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(customer.details().address, "1 Elm St");
    }

    #[test]
    fn test_info_remaining_balance_matches_total_due() {
        let customer = jane(dec!(12.50));
        let info = customer.info();
        assert_eq!(info.id, customer.id());
        assert_eq!(info.remaining_balance, info.total_due);
    }

    #[test]
    fn test_parse_payment_date() {
        assert_eq!(
            parse_payment_date("2024-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert!(matches!(
            parse_payment_date("03/01/2024"),
            Err(DomainError::InvalidDate(_))
        ));
        assert!(parse_payment_date("2024-02-30").is_err());
        assert!(parse_payment_date("").is_err());
        assert!(matches!(
            parse_payment_date(" 2024-03-01 "),
            Err(DomainError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_customer_id_round_trips_through_text() {
        let id = CustomerId::new();
        assert_eq!(id.to_string().parse::<CustomerId>().unwrap(), id);
    }
}
