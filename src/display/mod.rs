//! Display formatting for terminal output
//!
//! Turns balances, history records and command outcomes into the text the
//! ATM prints.

pub mod account;
pub mod transaction;

pub use account::{format_balance, format_outcome};
pub use transaction::{format_history, format_record};
