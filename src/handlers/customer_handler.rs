//! Customer Creation Handler
//!
//! Parses the opening balance and appends a new customer to the ledger.

use crate::domain::{Balance, DomainError};
use crate::error::AppError;
use crate::ledger::SharedLedger;

use super::{AddCustomerCommand, AddCustomerResult};

/// Handler for customer creation
pub struct CreateCustomerHandler {
    ledger: SharedLedger,
}

impl CreateCustomerHandler {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Execute the add customer command
    pub async fn execute(&self, command: AddCustomerCommand) -> Result<AddCustomerResult, AppError> {
        let total_due: Balance = command.due_amount.parse().map_err(DomainError::from)?;

        let customer_id = self
            .ledger
            .write()
            .await
            .add_customer(command.details, total_due);

        tracing::info!(
            customer_id = %customer_id,
            total_due = %total_due,
            "Customer added"
        );

        Ok(AddCustomerResult {
            customer_id,
            total_due,
        })
    }
}
