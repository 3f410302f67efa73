//! Ledger initialization
//!
//! Builds the fixed set of demo accounts the ATM starts with.

use tracing::debug;

use crate::crypto::{Credential, PinVerification};
use crate::error::AtmResult;
use crate::models::{Account, Money};

use super::ledger::Ledger;

/// A built-in account: id, PIN, opening balance in cents
pub struct SeedAccount {
    pub id: &'static str,
    pub pin: &'static str,
    pub opening_cents: i64,
}

/// The accounts every run starts with
pub const SEED_ACCOUNTS: &[SeedAccount] = &[
    SeedAccount {
        id: "user1",
        pin: "1234",
        opening_cents: 100_000,
    },
    SeedAccount {
        id: "user2",
        pin: "5678",
        opening_cents: 50_000,
    },
];

/// Create the start-up ledger, storing PINs with the given scheme
pub fn seed_ledger(scheme: PinVerification) -> AtmResult<Ledger> {
    let accounts = SEED_ACCOUNTS
        .iter()
        .map(|seed| {
            let credential = Credential::from_pin(seed.pin, scheme)?;
            Ok(Account::new(
                seed.id,
                credential,
                Money::from_cents(seed.opening_cents),
            ))
        })
        .collect::<AtmResult<Vec<_>>>()?;

    let ledger = Ledger::with_accounts(accounts)?;
    debug!(
        accounts = ledger.len(),
        total = ?ledger.total_funds(),
        %scheme,
        "seeded ledger"
    );
    Ok(ledger)
}
