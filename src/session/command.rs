//! Menu choices, the commands they expand to, and command results

use std::fmt;

use crate::error::{AtmError, AtmResult};
use crate::models::{AccountId, Money, TransactionRecord};

/// An entry of the main menu, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckBalance,
    Deposit,
    Withdraw,
    Transfer,
    History,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 6] = [
        Self::CheckBalance,
        Self::Deposit,
        Self::Withdraw,
        Self::Transfer,
        Self::History,
        Self::Quit,
    ];

    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> AtmResult<Self> {
        let trimmed = input.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|n| Self::ALL.into_iter().find(|c| c.number() == n))
            .ok_or_else(|| AtmError::invalid_input(format!("unrecognized menu option '{}'", trimmed)))
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::CheckBalance => 1,
            Self::Deposit => 2,
            Self::Withdraw => 3,
            Self::Transfer => 4,
            Self::History => 5,
            Self::Quit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CheckBalance => "Check Balance",
            Self::Deposit => "Deposit",
            Self::Withdraw => "Withdraw",
            Self::Transfer => "Transfer Money",
            Self::History => "Transactions History",
            Self::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// A fully parsed action for the logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    CheckBalance,
    Deposit(Money),
    Withdraw(Money),
    Transfer { recipient: String, amount: Money },
    History,
    Quit,
}

impl MenuCommand {
    /// The menu entry this command was built from
    pub fn choice(&self) -> MenuChoice {
        match self {
            Self::CheckBalance => MenuChoice::CheckBalance,
            Self::Deposit(_) => MenuChoice::Deposit,
            Self::Withdraw(_) => MenuChoice::Withdraw,
            Self::Transfer { .. } => MenuChoice::Transfer,
            Self::History => MenuChoice::History,
            Self::Quit => MenuChoice::Quit,
        }
    }
}

/// What a successfully dispatched command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Balance(Money),
    Deposited {
        amount: Money,
        balance: Money,
    },
    Withdrew {
        amount: Money,
        balance: Money,
    },
    Transferred {
        amount: Money,
        recipient: AccountId,
        balance: Money,
    },
    History(Vec<TransactionRecord>),
    Goodbye,
}
