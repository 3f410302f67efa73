//! Sessions and the ATM state machine
//!
//! A [`Session`] is the handle returned by a successful login. The
//! [`Atm`] machine wraps the banking service and tracks whether the user is
//! logged out, logged in, or finished, independent of any terminal I/O.

pub mod command;
pub mod machine;

pub use command::{MenuChoice, MenuCommand, Outcome};
pub use machine::{Atm, AtmState};

use crate::models::AccountId;

/// Proof of a successful login, bound to one account
///
/// Only the banking service creates sessions; the ledger keeps ownership of
/// the account itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    account_id: AccountId,
}

impl Session {
    pub(crate) fn new(account_id: AccountId) -> Self {
        Self { account_id }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }
}
