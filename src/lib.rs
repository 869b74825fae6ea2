//! customer-ledger Library
//!
//! Re-exports modules for the server binary and integration testing.

pub mod api;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod ledger;
mod error;

pub use config::{Config, ConfigError, LogFormat};
pub use domain::{Amount, AmountError, Balance, CustomerId, CustomerInfo, DomainError, Payment};
pub use error::{AppError, AppResult};
pub use ledger::{CustomerRef, LedgerStore, SharedLedger};
