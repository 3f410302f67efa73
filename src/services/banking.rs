//! Banking service
//!
//! The operations a front end calls once it has parsed user input:
//! authenticate, then balance, deposit, withdraw, transfer and history on
//! behalf of a [`Session`]. The service owns the ledger it works on.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AtmError, AtmResult};
use crate::models::{Account, Money, TransactionRecord};
use crate::session::Session;
use crate::storage::Ledger;

/// What to do with a deposit of zero or a negative amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DepositPolicy {
    /// Reject with [`AtmError::InvalidAmount`]
    #[default]
    RejectNonPositive,
    /// Apply it unchecked; a negative deposit lowers the balance
    Faithful,
}

/// Tunable rules applied on top of the account primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankingPolicy {
    pub deposit: DepositPolicy,
    pub allow_self_transfer: bool,
}

impl Default for BankingPolicy {
    fn default() -> Self {
        Self {
            deposit: DepositPolicy::default(),
            allow_self_transfer: true,
        }
    }
}

/// Service for session-scoped banking operations
#[derive(Debug)]
pub struct BankingService {
    ledger: Ledger,
    policy: BankingPolicy,
}

impl BankingService {
    /// Create a service with the default policy
    pub fn new(ledger: Ledger) -> Self {
        Self::with_policy(ledger, BankingPolicy::default())
    }

    pub fn with_policy(ledger: Ledger, policy: BankingPolicy) -> Self {
        Self { ledger, policy }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Check an id/PIN pair and open a session on success
    ///
    /// An unknown id and a wrong PIN produce the same error so the caller
    /// learns nothing about which accounts exist. An unknown id still runs
    /// one PIN verification, so with hashed PINs both cases cost the same.
    pub fn authenticate(&self, id: &str, pin: &str) -> AtmResult<Session> {
        let verified = match self.ledger.get(id) {
            Some(account) => account.verify_pin(pin).then_some(account),
            None => {
                if let Some(decoy) = self.ledger.iter().next() {
                    std::hint::black_box(decoy.verify_pin(pin));
                }
                None
            }
        };

        match verified {
            Some(account) => {
                info!(account = %account.id(), "login succeeded");
                Ok(Session::new(account.id().clone()))
            }
            None => {
                info!("login failed");
                Err(AtmError::AuthenticationFailed)
            }
        }
    }

    pub fn balance(&self, session: &Session) -> AtmResult<Money> {
        Ok(self.account(session)?.balance())
    }

    /// Deposit into the session's account, returning the new balance
    pub fn deposit(&mut self, session: &Session, amount: Money) -> AtmResult<Money> {
        if self.policy.deposit == DepositPolicy::RejectNonPositive && !amount.is_positive() {
            return Err(AtmError::InvalidAmount(amount));
        }

        let account = self.account_mut(session)?;
        account.deposit(amount).inspect_err(|e| {
            debug!(account = %session.account_id(), %amount, error = %e, "deposit rejected");
        })?;
        info!(account = %account.id(), %amount, "deposit");
        Ok(account.balance())
    }

    /// Withdraw from the session's account, returning the new balance
    pub fn withdraw(&mut self, session: &Session, amount: Money) -> AtmResult<Money> {
        let account = self.account_mut(session)?;
        account.withdraw(amount).inspect_err(|e| {
            debug!(account = %session.account_id(), %amount, error = %e, "withdraw rejected");
        })?;
        info!(account = %account.id(), %amount, "withdraw");
        Ok(account.balance())
    }

    /// Transfer from the session's account to `recipient_id`, returning the
    /// sender's new balance
    ///
    /// A missing recipient is reported before the amount is checked.
    pub fn transfer(
        &mut self,
        session: &Session,
        recipient_id: &str,
        amount: Money,
    ) -> AtmResult<Money> {
        // Resolve the sender first so a stale session is not reported as a
        // missing recipient.
        self.account(session)?;
        if !self.ledger.contains(recipient_id) {
            debug!(recipient = recipient_id, "transfer recipient not found");
            return Err(AtmError::recipient_not_found(recipient_id));
        }

        let sender_id = session.account_id().as_str();
        if sender_id == recipient_id {
            if !self.policy.allow_self_transfer {
                return Err(AtmError::SelfTransfer);
            }
            let account = self.account_mut(session)?;
            account.transfer_to_self(amount)?;
            info!(account = %account.id(), %amount, "transfer to self");
            return Ok(account.balance());
        }

        let (sender, recipient) = self
            .ledger
            .pair_mut(sender_id, recipient_id)
            .ok_or_else(|| AtmError::recipient_not_found(recipient_id))?;
        sender.transfer(recipient, amount)?;
        info!(
            account = %sender.id(),
            recipient = %recipient.id(),
            %amount,
            "transfer"
        );
        Ok(sender.balance())
    }

    /// The session's history, oldest first
    pub fn history(&self, session: &Session) -> AtmResult<&[TransactionRecord]> {
        Ok(self.account(session)?.history())
    }

    fn account(&self, session: &Session) -> AtmResult<&Account> {
        self.ledger
            .get(session.account_id().as_str())
            .ok_or(AtmError::NotAuthenticated)
    }

    fn account_mut(&mut self, session: &Session) -> AtmResult<&mut Account> {
        self.ledger
            .get_mut(session.account_id().as_str())
            .ok_or(AtmError::NotAuthenticated)
    }
}
