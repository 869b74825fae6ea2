//! Ledger Store
//!
//! The ordered collection of customers and the only mutation path for them.
//! Customers are found either by their stable id or by their current
//! position in the sequence.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::domain::{
    Amount, Balance, Customer, CustomerChanges, CustomerDetails, CustomerId, CustomerInfo,
    DomainError, Payment,
};

/// Store handle shared by every request
pub type SharedLedger = Arc<RwLock<LedgerStore>>;

/// How a request names a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerRef {
    /// Stable identifier
    Id(CustomerId),
    /// Zero-based position at the time the store lock is held
    Position(usize),
}

impl From<CustomerId> for CustomerRef {
    fn from(id: CustomerId) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for CustomerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Position(index) => write!(f, "#{}", index),
        }
    }
}

/// In-memory ledger of customers, in insertion order
#[derive(Debug, Default)]
pub struct LedgerStore {
    customers: Vec<Customer>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh store in a shareable handle
    pub fn shared() -> SharedLedger {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Resolve a reference to a position in the current sequence
    pub fn resolve(&self, customer: CustomerRef) -> Result<usize, DomainError> {
        let found = match customer {
            CustomerRef::Id(id) => self.customers.iter().position(|c| c.id() == id),
            CustomerRef::Position(index) => (index < self.customers.len()).then_some(index),
        };
        found.ok_or_else(|| DomainError::CustomerNotFound(customer.to_string()))
    }

    /// Stable id of the referenced customer
    pub fn id_of(&self, customer: CustomerRef) -> Result<CustomerId, DomainError> {
        let index = self.resolve(customer)?;
        Ok(self.customers[index].id())
    }

    fn customer_mut(&mut self, customer: CustomerRef) -> Result<&mut Customer, DomainError> {
        let index = self.resolve(customer)?;
        Ok(&mut self.customers[index])
    }

    // =========================================================================
    // add_customer
    // =========================================================================

    /// Append a new customer with an empty payment history
    pub fn add_customer(&mut self, details: CustomerDetails, total_due: Balance) -> CustomerId {
        let customer = Customer::create(details, total_due);
        let id = customer.id();
        self.customers.push(customer);
        id
    }

    // =========================================================================
    // record_payment
    // =========================================================================

    /// Record a payment against a customer, returning the new total due.
    ///
    /// Fails with `PaymentExceedsDue` when the amount is larger than what
    /// the customer owes; nothing is changed in that case.
    pub fn record_payment(
        &mut self,
        customer: CustomerRef,
        amount: Amount,
        date: NaiveDate,
        method: impl Into<String>,
    ) -> Result<Balance, DomainError> {
        self.customer_mut(customer)?
            .record_payment(Payment::new(amount, date, method))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Snapshot of every customer, in store order
    pub fn list_customers(&self) -> Vec<CustomerInfo> {
        self.customers.iter().map(Customer::info).collect()
    }

    /// Snapshot of one customer
    pub fn get(&self, customer: CustomerRef) -> Result<CustomerInfo, DomainError> {
        let index = self.resolve(customer)?;
        Ok(self.customers[index].info())
    }

    // =========================================================================
    // update_customer_details / set_total_due
    // =========================================================================

    /// Overwrite only the supplied, non-empty contact fields
    pub fn update_customer_details(
        &mut self,
        customer: CustomerRef,
        changes: CustomerChanges,
    ) -> Result<CustomerInfo, DomainError> {
        let target = self.customer_mut(customer)?;
        target.update_details(changes);
        Ok(target.info())
    }

    /// Replace the total due outright
    pub fn set_total_due(
        &mut self,
        customer: CustomerRef,
        total_due: Balance,
    ) -> Result<CustomerInfo, DomainError> {
        let target = self.customer_mut(customer)?;
        target.set_total_due(total_due);
        Ok(target.info())
    }

    // =========================================================================
    // remove_customer
    // =========================================================================

    /// Delete a customer and its payment history. Later positions shift down.
    pub fn remove_customer(&mut self, customer: CustomerRef) -> Result<CustomerInfo, DomainError> {
        let index = self.resolve(customer)?;
        Ok(self.customers.remove(index).info())
    }
}
