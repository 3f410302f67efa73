//! Balance and command result formatting

use crate::models::Money;
use crate::session::Outcome;

use super::transaction::format_history;

/// Format the balance screen line
pub fn format_balance(balance: Money, symbol: &str) -> String {
    format!("Balance: {}", balance.format_with_symbol(symbol))
}

/// Format the result of a menu command for the terminal
pub fn format_outcome(outcome: &Outcome, symbol: &str) -> String {
    match outcome {
        Outcome::Balance(balance) => format_balance(*balance, symbol),
        Outcome::Deposited { amount, balance } => format!(
            "Deposited {}. New balance: {}",
            amount.format_with_symbol(symbol),
            balance.format_with_symbol(symbol)
        ),
        Outcome::Withdrew { amount, balance } => format!(
            "Withdrew {}. New balance: {}",
            amount.format_with_symbol(symbol),
            balance.format_with_symbol(symbol)
        ),
        Outcome::Transferred {
            amount,
            recipient,
            balance,
        } => format!(
            "Transferred {} to {}. New balance: {}",
            amount.format_with_symbol(symbol),
            recipient,
            balance.format_with_symbol(symbol)
        ),
        Outcome::History(records) => format_history(records, symbol).trim_end().to_string(),
        Outcome::Goodbye => "Thank you for using the ATM. Goodbye!".to_string(),
    }
}
