//! Domain module
//!
//! Core domain types and business rules.

pub mod amount;
pub mod customer;
pub mod error;

pub use amount::{Amount, AmountError, Balance};
pub use customer::{
    parse_payment_date, Customer, CustomerChanges, CustomerDetails, CustomerId, CustomerInfo,
    Payment,
};
pub use error::DomainError;
