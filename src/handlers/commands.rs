//! Command definitions
//!
//! Commands represent intentions to change the ledger. Numeric and date
//! fields arrive as raw form text; handlers parse them.

use serde::Serialize;

use crate::domain::{Balance, CustomerChanges, CustomerDetails, CustomerId, Payment};
use crate::ledger::CustomerRef;

// =========================================================================
// AddCustomerCommand
// =========================================================================

/// Command to add a new customer
#[derive(Debug, Clone)]
pub struct AddCustomerCommand {
    pub details: CustomerDetails,
    /// Initial amount due (as text, parsed by the handler)
    pub due_amount: String,
}

impl AddCustomerCommand {
    pub fn new(details: CustomerDetails, due_amount: impl Into<String>) -> Self {
        Self {
            details,
            due_amount: due_amount.into(),
        }
    }
}

// =========================================================================
// RecordPaymentCommand
// =========================================================================

/// Command to record a payment against a customer
#[derive(Debug, Clone)]
pub struct RecordPaymentCommand {
    pub customer: CustomerRef,
    /// Payment amount (as text, parsed by the handler)
    pub amount: String,
    /// Payment date, YYYY-MM-DD
    pub date: String,
    pub method: String,
}

impl RecordPaymentCommand {
    pub fn new(
        customer: CustomerRef,
        amount: impl Into<String>,
        date: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            customer,
            amount: amount.into(),
            date: date.into(),
            method: method.into(),
        }
    }
}

// =========================================================================
// UpdateCustomerCommand
// =========================================================================

/// Command to update a customer's contact details
#[derive(Debug, Clone)]
pub struct UpdateCustomerCommand {
    pub customer: CustomerRef,
    pub changes: CustomerChanges,
}

impl UpdateCustomerCommand {
    pub fn new(customer: CustomerRef, changes: CustomerChanges) -> Self {
        Self { customer, changes }
    }
}

// =========================================================================
// AdjustDueCommand
// =========================================================================

/// Command to overwrite a customer's total due
#[derive(Debug, Clone)]
pub struct AdjustDueCommand {
    pub customer: CustomerRef,
    pub due_amount: String,
}

impl AdjustDueCommand {
    pub fn new(customer: CustomerRef, due_amount: impl Into<String>) -> Self {
        Self {
            customer,
            due_amount: due_amount.into(),
        }
    }
}

// =========================================================================
// DeleteCustomerCommand
// =========================================================================

/// Command to delete a customer and its payment history
#[derive(Debug, Clone)]
pub struct DeleteCustomerCommand {
    pub customer: CustomerRef,
}

impl DeleteCustomerCommand {
    pub fn new(customer: CustomerRef) -> Self {
        Self { customer }
    }
}

/// Result of a successful customer creation
#[derive(Debug, Clone, Serialize)]
pub struct AddCustomerResult {
    pub customer_id: CustomerId,
    pub total_due: Balance,
}

/// Result of a successful payment
#[derive(Debug, Clone, Serialize)]
pub struct PaymentResult {
    pub customer_id: CustomerId,
    pub payment: Payment,
    pub total_due: Balance,
}
