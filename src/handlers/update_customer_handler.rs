//! Update Customer Handlers
//!
//! Contact detail edits and balance adjustments.

use crate::domain::{Balance, CustomerInfo, DomainError};
use crate::error::AppError;
use crate::ledger::SharedLedger;

use super::{AdjustDueCommand, UpdateCustomerCommand};

// =========================================================================
// UpdateCustomerHandler
// =========================================================================

/// Handler for contact detail updates
pub struct UpdateCustomerHandler {
    ledger: SharedLedger,
}

impl UpdateCustomerHandler {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Execute the update customer command.
    ///
    /// An update with no non-empty fields is accepted and changes nothing.
    pub async fn execute(&self, command: UpdateCustomerCommand) -> Result<CustomerInfo, AppError> {
        let unchanged = command.changes.is_empty();

        let info = self
            .ledger
            .write()
            .await
            .update_customer_details(command.customer, command.changes)?;

        if unchanged {
            tracing::debug!(customer_id = %info.id, "Customer update carried no changes");
        } else {
            tracing::info!(customer_id = %info.id, "Customer details updated");
        }

        Ok(info)
    }
}

// =========================================================================
// AdjustDueHandler
// =========================================================================

/// Handler for overwriting a customer's total due
pub struct AdjustDueHandler {
    ledger: SharedLedger,
}

impl AdjustDueHandler {
    pub fn new(ledger: SharedLedger) -> Self {
        Self { ledger }
    }

    /// Execute the adjust due command
    pub async fn execute(&self, command: AdjustDueCommand) -> Result<CustomerInfo, AppError> {
        let mut ledger = self.ledger.write().await;

        let customer_id = ledger.id_of(command.customer)?;
        let total_due: Balance = command.due_amount.parse().map_err(DomainError::from)?;

        let info = ledger.set_total_due(customer_id.into(), total_due)?;

        tracing::info!(
            customer_id = %customer_id,
            total_due = %total_due,
            "Customer total due adjusted"
        );

        Ok(info)
    }
}
