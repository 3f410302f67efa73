//! Transaction history model
//!
//! Each account keeps an append-only list of structured records. The text
//! shown on the history screen is rendered from these, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::AccountId;
use super::money::Money;

/// What happened in a single history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money added to the account (including the incoming leg of a transfer)
    Deposit { amount: Money },
    /// Cash taken out of the account
    Withdrawal { amount: Money },
    /// Money sent to another account
    TransferOut { amount: Money, counterparty: AccountId },
}

/// One entry of an account's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(flatten)]
    pub kind: TransactionKind,

    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Create a record stamped with the current time
    pub fn new(kind: TransactionKind) -> Self {
        Self {
            kind,
            recorded_at: Utc::now(),
        }
    }

    pub fn deposit(amount: Money) -> Self {
        Self::new(TransactionKind::Deposit { amount })
    }

    pub fn withdrawal(amount: Money) -> Self {
        Self::new(TransactionKind::Withdrawal { amount })
    }

    pub fn transfer_out(amount: Money, counterparty: AccountId) -> Self {
        Self::new(TransactionKind::TransferOut {
            amount,
            counterparty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_is_tagged() {
        let record = TransactionRecord::transfer_out(Money::from_cents(500), AccountId::new("user2"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "transfer_out");
        assert_eq!(value["amount"], 500);
        assert_eq!(value["counterparty"], "user2");
        assert!(value.get("recorded_at").is_some());
    }
}
