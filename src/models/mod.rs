//! Core data models for the ATM
//!
//! Accounts, their transaction history, and the money and id types they are
//! built from.

pub mod account;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use ids::AccountId;
pub use money::{Money, MoneyParseError};
pub use transaction::{TransactionKind, TransactionRecord};
