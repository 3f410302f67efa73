//! Account model
//!
//! One customer's balance plus the append-only history of what changed it.
//! Failed operations never touch either.

use serde::Serialize;

use super::ids::AccountId;
use super::money::Money;
use super::transaction::TransactionRecord;
use crate::crypto::Credential;
use crate::error::{AtmError, AtmResult};

/// A bank account held in the ledger
#[derive(Debug, Serialize)]
pub struct Account {
    /// Unique identifier, also the login id
    id: AccountId,

    #[serde(skip)]
    credential: Credential,

    balance: Money,

    /// Oldest first; only ever appended to
    history: Vec<TransactionRecord>,
}

impl Account {
    /// Create an account with an opening balance and empty history
    pub fn new(id: impl Into<AccountId>, credential: Credential, opening_balance: Money) -> Self {
        Self {
            id: id.into(),
            credential,
            balance: opening_balance,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn verify_pin(&self, candidate: &str) -> bool {
        self.credential.verify(candidate)
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    /// Add funds and record a deposit
    ///
    /// There is no positivity check here: a negative amount lowers the
    /// balance. Callers that want the guard go through
    /// [`crate::services::BankingService::deposit`].
    ///
    /// Fails without touching the account if the new balance would not fit.
    pub fn deposit(&mut self, amount: Money) -> AtmResult<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AtmError::BalanceOverflow {
                balance: self.balance,
                amount,
            })?;
        self.history.push(TransactionRecord::deposit(amount));
        Ok(())
    }

    /// Take cash out; requires `0 < amount <= balance`
    pub fn withdraw(&mut self, amount: Money) -> AtmResult<()> {
        self.check_debit(amount)?;
        self.balance -= amount;
        self.history.push(TransactionRecord::withdrawal(amount));
        Ok(())
    }

    /// Move funds to another account
    ///
    /// The recipient receives an ordinary deposit; only the sender gets a
    /// transfer entry.
    pub fn transfer(&mut self, recipient: &mut Account, amount: Money) -> AtmResult<()> {
        self.check_debit(amount)?;
        recipient.deposit(amount)?;
        self.balance -= amount;
        self.history
            .push(TransactionRecord::transfer_out(amount, recipient.id.clone()));
        Ok(())
    }

    /// Transfer where the recipient is this same account
    ///
    /// Same checks and the same entries as [`Account::transfer`]; the balance
    /// ends where it started.
    pub fn transfer_to_self(&mut self, amount: Money) -> AtmResult<()> {
        self.check_debit(amount)?;
        self.balance -= amount;
        self.deposit(amount)?;
        self.history
            .push(TransactionRecord::transfer_out(amount, self.id.clone()));
        Ok(())
    }

    fn check_debit(&self, amount: Money) -> AtmResult<()> {
        if amount.is_positive() && amount <= self.balance {
            Ok(())
        } else {
            Err(AtmError::insufficient_funds(amount, self.balance))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn account(id: &str, cents: i64) -> Account {
        Account::new(id, Credential::plaintext("0000"), Money::from_cents(cents))
    }

    fn kinds(account: &Account) -> Vec<TransactionKind> {
        account.history().iter().map(|r| r.kind.clone()).collect()
    }

    #[test]
    fn test_new_account() {
        let acct = account("user1", 100_000);
        assert_eq!(acct.id().as_str(), "user1");
        assert_eq!(acct.balance(), Money::from_cents(100_000));
        assert!(acct.history().is_empty());
        assert!(acct.verify_pin("0000"));
        assert!(!acct.verify_pin("1234"));
    }

    #[test]
    fn test_deposit_then_withdraw_round_trip() {
        let mut acct = account("user1", 100_000);
        let amount = Money::from_cents(2_550);

        acct.deposit(amount).unwrap();
        acct.withdraw(amount).unwrap();

        assert_eq!(acct.balance(), Money::from_cents(100_000));
        assert_eq!(
            kinds(&acct),
            vec![
                TransactionKind::Deposit { amount },
                TransactionKind::Withdrawal { amount },
            ]
        );
    }

    #[test]
    fn test_deposit_has_no_guard() {
        let mut acct = account("user1", 1_000);
        acct.deposit(Money::from_cents(-300)).unwrap();
        assert_eq!(acct.balance(), Money::from_cents(700));
        assert_eq!(acct.history().len(), 1);
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut acct = account("user1", i64::MAX - 100);
        let err = acct.deposit(Money::from_cents(101)).unwrap_err();

        assert!(matches!(err, AtmError::BalanceOverflow { .. }));
        assert!(err.is_recoverable());
        assert_eq!(acct.balance(), Money::from_cents(i64::MAX - 100));
        assert!(acct.history().is_empty());

        acct.deposit(Money::from_cents(100)).unwrap();
        assert_eq!(acct.balance(), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_transfer_into_full_account_touches_nothing() {
        let mut sender = account("user1", 1_000);
        let mut recipient = account("user2", i64::MAX);

        let err = sender.transfer(&mut recipient, Money::from_cents(1)).unwrap_err();
        assert!(matches!(err, AtmError::BalanceOverflow { .. }));
        assert_eq!(sender.balance(), Money::from_cents(1_000));
        assert_eq!(recipient.balance(), Money::from_cents(i64::MAX));
        assert!(sender.history().is_empty());
        assert!(recipient.history().is_empty());
    }

    #[test]
    fn test_withdraw_more_than_balance() {
        let mut acct = account("user1", 50_000);
        let err = acct.withdraw(Money::from_cents(50_001)).unwrap_err();

        assert_eq!(
            err,
            AtmError::insufficient_funds(Money::from_cents(50_001), Money::from_cents(50_000))
        );
        assert_eq!(acct.balance(), Money::from_cents(50_000));
        assert!(acct.history().is_empty());
    }

    #[test]
    fn test_withdraw_non_positive_rejected() {
        let mut acct = account("user1", 50_000);
        assert!(acct.withdraw(Money::zero()).is_err());
        assert!(acct.withdraw(Money::from_cents(-100)).is_err());
        assert_eq!(acct.balance(), Money::from_cents(50_000));
        assert!(acct.history().is_empty());
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut acct = account("user1", 50_000);
        acct.withdraw(Money::from_cents(50_000)).unwrap();
        assert!(acct.balance().is_zero());
    }

    #[test]
    fn test_transfer_conserves_funds() {
        let mut sender = account("user1", 100_000);
        let mut recipient = account("user2", 50_000);
        let before = sender.balance() + recipient.balance();

        sender.transfer(&mut recipient, Money::from_cents(30_000)).unwrap();

        assert_eq!(sender.balance(), Money::from_cents(70_000));
        assert_eq!(recipient.balance(), Money::from_cents(80_000));
        assert_eq!(sender.balance() + recipient.balance(), before);

        assert_eq!(
            kinds(&sender),
            vec![TransactionKind::TransferOut {
                amount: Money::from_cents(30_000),
                counterparty: AccountId::new("user2"),
            }]
        );
        assert_eq!(
            kinds(&recipient),
            vec![TransactionKind::Deposit {
                amount: Money::from_cents(30_000)
            }]
        );
    }

    #[test]
    fn test_failed_transfer_touches_nothing() {
        let mut sender = account("user1", 100);
        let mut recipient = account("user2", 0);

        assert!(sender.transfer(&mut recipient, Money::from_cents(101)).is_err());
        assert!(sender.transfer(&mut recipient, Money::zero()).is_err());

        assert_eq!(sender.balance(), Money::from_cents(100));
        assert!(recipient.balance().is_zero());
        assert!(sender.history().is_empty());
        assert!(recipient.history().is_empty());
    }

    #[test]
    fn test_transfer_to_self() {
        let mut acct = account("user1", 10_000);
        acct.transfer_to_self(Money::from_cents(4_000)).unwrap();

        assert_eq!(acct.balance(), Money::from_cents(10_000));
        assert_eq!(
            kinds(&acct),
            vec![
                TransactionKind::Deposit {
                    amount: Money::from_cents(4_000)
                },
                TransactionKind::TransferOut {
                    amount: Money::from_cents(4_000),
                    counterparty: AccountId::new("user1"),
                },
            ]
        );
        assert!(acct.transfer_to_self(Money::from_cents(10_001)).is_err());
        assert_eq!(acct.history().len(), 2);
    }

    #[test]
    fn test_serialization_omits_credential() {
        let acct = account("user1", 100);
        let json = serde_json::to_string(&acct).unwrap();
        assert!(!json.contains("0000"));
        assert!(!json.contains("credential"));
    }
}
