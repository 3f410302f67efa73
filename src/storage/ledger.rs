//! In-memory account ledger
//!
//! The ledger is the sole owner of every account. It is built once at
//! start-up and exposes no way to add or remove accounts afterwards.

use std::collections::HashMap;

use crate::error::{AtmError, AtmResult};
use crate::models::{Account, AccountId, Money};

/// Directory of accounts keyed by id
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    /// Build a ledger from a fixed set of accounts
    ///
    /// # Errors
    ///
    /// Returns a configuration error if two accounts share an id.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> AtmResult<Self> {
        let mut map = HashMap::new();
        for account in accounts {
            let id = account.id().clone();
            if map.insert(id.clone(), account).is_some() {
                return Err(AtmError::Config(format!("duplicate account id: {}", id)));
            }
        }
        Ok(Self { accounts: map })
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All account ids, sorted
    pub fn ids(&self) -> Vec<&AccountId> {
        let mut ids: Vec<_> = self.accounts.keys().collect();
        ids.sort();
        ids
    }

    /// Every account, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Sum of every balance in the ledger, or `None` if it overflows
    pub fn total_funds(&self) -> Option<Money> {
        self.iter()
            .try_fold(Money::zero(), |total, account| total.checked_add(account.balance()))
    }

    /// Borrow two different accounts mutably at once
    ///
    /// Returns `None` if either id is missing or both ids are the same.
    pub fn pair_mut(&mut self, first: &str, second: &str) -> Option<(&mut Account, &mut Account)> {
        if first == second {
            return None;
        }

        let mut a = None;
        let mut b = None;
        for (id, account) in self.accounts.iter_mut() {
            if id.as_str() == first {
                a = Some(account);
            } else if id.as_str() == second {
                b = Some(account);
            }
        }

        Some((a?, b?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Credential;

    fn ledger() -> Ledger {
        Ledger::with_accounts([
            Account::new("alice", Credential::plaintext("1111"), Money::from_cents(1_000)),
            Account::new("bob", Credential::plaintext("2222"), Money::from_cents(2_000)),
            Account::new("carol", Credential::plaintext("3333"), Money::zero()),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup() {
        let ledger = ledger();
        assert_eq!(ledger.len(), 3);
        assert!(ledger.contains("bob"));
        assert!(!ledger.contains("dave"));
        assert_eq!(ledger.get("alice").unwrap().balance(), Money::from_cents(1_000));
        assert!(ledger.get("Alice").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Ledger::with_accounts([
            Account::new("alice", Credential::plaintext("1"), Money::zero()),
            Account::new("alice", Credential::plaintext("2"), Money::zero()),
        ]);
        assert!(matches!(result, Err(AtmError::Config(_))));
    }

    #[test]
    fn test_ids_sorted() {
        let ledger = ledger();
        let ids: Vec<&str> = ledger.ids().into_iter().map(AccountId::as_str).collect();
        assert_eq!(ids, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_total_funds() {
        assert_eq!(ledger().total_funds(), Some(Money::from_cents(3_000)));
    }

    #[test]
    fn test_pair_mut() {
        let mut ledger = ledger();
        let (a, b) = ledger.pair_mut("alice", "bob").unwrap();
        assert_eq!(a.id().as_str(), "alice");
        assert_eq!(b.id().as_str(), "bob");

        a.transfer(b, Money::from_cents(500)).unwrap();
        assert_eq!(ledger.get("bob").unwrap().balance(), Money::from_cents(2_500));
    }

    #[test]
    fn test_pair_mut_rejects_same_or_missing() {
        let mut ledger = ledger();
        assert!(ledger.pair_mut("alice", "alice").is_none());
        assert!(ledger.pair_mut("alice", "dave").is_none());
        assert!(ledger.pair_mut("dave", "alice").is_none());
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::default();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_funds(), Some(Money::zero()));
    }
}
