//! Ledger module
//!
//! Owns every customer record. All reads and writes go through
//! `SharedLedger`, which is built once at startup and handed to the router.

mod store;

pub use store::{CustomerRef, LedgerStore, SharedLedger};
