//! Custom error types for the ATM
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ATM operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtmError {
    /// Unknown user id or wrong PIN (deliberately indistinguishable)
    #[error("Invalid User ID or PIN. Please try again.")]
    AuthenticationFailed,

    /// Withdraw/transfer amount was not positive or exceeded the balance
    #[error("Insufficient balance or invalid amount (requested {requested}, available {available})")]
    InsufficientFundsOrInvalidAmount { requested: Money, available: Money },

    /// A credit would push the balance past what the ledger can hold
    #[error("Deposit of {amount} would exceed the maximum balance (current balance {balance})")]
    BalanceOverflow { balance: Money, amount: Money },

    /// Transfer target is not in the ledger
    #[error("Recipient User ID not found: {0}")]
    RecipientNotFound(String),

    /// Non-numeric amount or unrecognized menu choice
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Deposit rejected by the non-positive deposit guard
    #[error("Invalid amount: {0} (deposits must be greater than zero)")]
    InvalidAmount(Money),

    /// Transfer to the account's own id while self-transfers are disabled
    #[error("Cannot transfer to the same account")]
    SelfTransfer,

    /// An account operation was attempted before logging in
    #[error("No user is logged in")]
    NotAuthenticated,

    /// A login was attempted while a session is already bound
    #[error("A user is already logged in")]
    AlreadyAuthenticated,

    /// The session has quit and accepts no further commands
    #[error("Session has ended")]
    SessionTerminated,

    /// Credential hashing or verification setup failed
    #[error("Credential error: {0}")]
    Credential(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl AtmError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Money, available: Money) -> Self {
        Self::InsufficientFundsOrInvalidAmount {
            requested,
            available,
        }
    }

    /// Create a "recipient not found" error
    pub fn recipient_not_found(identifier: impl Into<String>) -> Self {
        Self::RecipientNotFound(identifier.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Errors the user can fix by retrying at the prompt
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed
                | Self::InsufficientFundsOrInvalidAmount { .. }
                | Self::BalanceOverflow { .. }
                | Self::RecipientNotFound(_)
                | Self::InvalidInput(_)
                | Self::InvalidAmount(_)
                | Self::SelfTransfer
        )
    }
}

impl From<std::io::Error> for AtmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AtmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ATM operations
pub type AtmResult<T> = Result<T, AtmError>;
