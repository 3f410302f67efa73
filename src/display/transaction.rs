//! Transaction history formatting
//!
//! Renders history records as the statement lines shown by the ATM.

use crate::models::{TransactionKind, TransactionRecord};

/// Format one history record, e.g. `Transferred: $1050.00 to user2`
pub fn format_record(record: &TransactionRecord, symbol: &str) -> String {
    match &record.kind {
        TransactionKind::Deposit { amount } => {
            format!("Deposited: {}", amount.format_with_symbol(symbol))
        }
        TransactionKind::Withdrawal { amount } => {
            format!("Withdrawn: {}", amount.format_with_symbol(symbol))
        }
        TransactionKind::TransferOut {
            amount,
            counterparty,
        } => format!(
            "Transferred: {} to {}",
            amount.format_with_symbol(symbol),
            counterparty
        ),
    }
}

/// Format the full history screen, oldest entry first
pub fn format_history(records: &[TransactionRecord], symbol: &str) -> String {
    let mut output = String::from("Transaction History:\n");

    if records.is_empty() {
        output.push_str("No transactions yet.\n");
        return output;
    }

    for record in records {
        output.push_str(&format_record(record, symbol));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, Money};

    fn records() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::deposit(Money::from_cents(10_000)),
            TransactionRecord::withdrawal(Money::from_cents(5_000)),
            TransactionRecord::transfer_out(Money::from_cents(105_000), AccountId::new("user2")),
        ]
    }

    #[test]
    fn test_format_history() {
        assert_eq!(
            format_history(&records(), "$"),
            "Transaction History:\n\
             Deposited: $100.00\n\
             Withdrawn: $50.00\n\
             Transferred: $1050.00 to user2\n"
        );
    }

    #[test]
    fn test_history_lines_come_from_format_record() {
        let records = records();
        let history = format_history(&records, "£");
        let lines: Vec<&str> = history.lines().skip(1).collect();
        let expected: Vec<String> = records.iter().map(|r| format_record(r, "£")).collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_custom_symbol() {
        let record = TransactionRecord::withdrawal(Money::from_cents(1_999));
        assert_eq!(format_record(&record, "€"), "Withdrawn: €19.99");
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            format_history(&[], "$"),
            "Transaction History:\nNo transactions yet.\n"
        );
    }
}
