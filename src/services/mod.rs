//! Service layer for the ATM
//!
//! The service layer applies banking rules on top of the in-memory ledger
//! and is the only place account state is mutated from outside the models.

pub mod banking;

pub use banking::{BankingPolicy, BankingService, DepositPolicy};
