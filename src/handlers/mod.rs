//! Command Handlers module
//!
//! Handlers that validate commands and apply them to the ledger.
//! Each handler holds the shared ledger handle it was built with.

mod commands;
mod customer_handler;
mod delete_customer_handler;
mod payment_handler;
mod update_customer_handler;


pub use commands::*;
pub use customer_handler::CreateCustomerHandler;
pub use delete_customer_handler::DeleteCustomerHandler;
pub use payment_handler::PaymentHandler;
pub use update_customer_handler::{AdjustDueHandler, UpdateCustomerHandler};
