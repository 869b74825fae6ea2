//! Delete Customer Handler
//!
//! Permanently removes a customer and its payment history.

use crate::domain::CustomerInfo;
use crate::error::AppError;
use crate::ledger::SharedLedger;

use super::DeleteCustomerCommand;

/// Handler for customer deletion
pub struct DeleteCustomerHandler {
    ledger: SharedLedger,
}

impl DeleteCustomerHandler {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Execute the delete customer command, returning the removed record
    pub async fn execute(&self, command: DeleteCustomerCommand) -> Result<CustomerInfo, AppError> {
        let removed = self
            .ledger
            .write()
            .await
            .remove_customer(command.customer)?;

        tracing::info!(
            customer_id = %removed.id,
            payments = removed.payments.len(),
            "Customer deleted"
        );

        Ok(removed)
    }
}
