//! Payment Handler
//!
//! Records a payment against a customer's balance.

use crate::domain::{parse_payment_date, Amount, DomainError, Payment};
use crate::error::AppError;
use crate::ledger::SharedLedger;

use super::{PaymentResult, RecordPaymentCommand};

/// Handler for recording payments
pub struct PaymentHandler {
    ledger: SharedLedger,
}

impl PaymentHandler {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Execute the record payment command.
    ///
    /// The customer is resolved first, so a stale reference is reported as
    /// not-found even when the form fields are also bad. Every check runs
    /// before the ledger is touched.
    pub async fn execute(&self, command: RecordPaymentCommand) -> Result<PaymentResult, AppError> {
        let mut ledger = self.ledger.write().await;

        let customer_id = ledger.id_of(command.customer)?;

        let amount: Amount = command.amount.parse().map_err(DomainError::from)?;
        let date = parse_payment_date(&command.date)?;

        let total_due =
            ledger.record_payment(customer_id.into(), amount, date, command.method.clone())?;

        tracing::info!(
            customer_id = %customer_id,
            amount = %amount,
            date = %date,
            total_due = %total_due,
            "Payment recorded"
        );

        Ok(PaymentResult {
            customer_id,
            payment: Payment::new(amount, date, command.method),
            total_due,
        })
    }
}
