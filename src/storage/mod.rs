//! Storage layer for the ATM
//!
//! Accounts live only in memory for the lifetime of the process; nothing in
//! this layer touches the filesystem.

pub mod init;
pub mod ledger;

pub use init::{seed_ledger, SeedAccount, SEED_ACCOUNTS};
pub use ledger::Ledger;
