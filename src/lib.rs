//! atm-cli - Terminal ATM simulator
//!
//! A single-session ATM over a fixed, in-memory set of accounts. A user logs
//! in with an ID and PIN, then checks balances, deposits, withdraws,
//! transfers to another account and reviews their history until they quit.
//! Nothing but the settings file touches disk.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and path management
//! - `error`: Custom error types
//! - `models`: Money, accounts and transaction records
//! - `crypto`: PIN credentials
//! - `storage`: The in-memory ledger and its seed accounts
//! - `services`: Banking rules over the ledger
//! - `session`: Menu commands and the ATM state machine
//! - `display`: Text rendering of balances, outcomes and history
//! - `cli`: Terminal I/O and command handlers
//!
//! # Example
//!
//! ```rust
//! use atm_cli::crypto::PinVerification;
//! use atm_cli::models::Money;
//! use atm_cli::services::BankingService;
//! use atm_cli::session::{Atm, MenuCommand, Outcome};
//! use atm_cli::storage::seed_ledger;
//!
//! let ledger = seed_ledger(PinVerification::Plaintext)?;
//! let mut atm = Atm::new(BankingService::new(ledger));
//! atm.login("user1", "1234")?;
//!
//! let outcome = atm.dispatch(MenuCommand::Deposit(Money::from_dollars_cents(100, 0)))?;
//! assert!(matches!(outcome, Outcome::Deposited { .. }));
//! # Ok::<(), atm_cli::AtmError>(())
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{AtmError, AtmResult};
