//! ATM state machine
//!
//! `Unauthenticated` accepts only logins and stays put on failure.
//! `Authenticated` accepts menu commands until `Quit`, which moves to
//! `Terminated`. There is no way back to an earlier state.

use tracing::{debug, info};

use super::command::{MenuCommand, Outcome};
use super::Session;
use crate::error::{AtmError, AtmResult};
use crate::services::BankingService;

/// Where the ATM is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtmState {
    Unauthenticated,
    Authenticated(Session),
    Terminated,
}

/// Drives a banking service through one login and its menu commands
#[derive(Debug)]
pub struct Atm {
    service: BankingService,
    state: AtmState,
}

impl Atm {
    pub fn new(service: BankingService) -> Self {
        Self {
            service,
            state: AtmState::Unauthenticated,
        }
    }

    pub fn state(&self) -> &AtmState {
        &self.state
    }

    pub fn service(&self) -> &BankingService {
        &self.service
    }

    /// The active session, if logged in
    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            AtmState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.state == AtmState::Terminated
    }

    /// Attempt a login; a failure leaves the machine ready for another try
    pub fn login(&mut self, id: &str, pin: &str) -> AtmResult<&Session> {
        match self.state {
            AtmState::Unauthenticated => {}
            AtmState::Authenticated(_) => return Err(AtmError::AlreadyAuthenticated),
            AtmState::Terminated => return Err(AtmError::SessionTerminated),
        }

        let session = self.service.authenticate(id, pin)?;
        self.state = AtmState::Authenticated(session);
        match &self.state {
            AtmState::Authenticated(session) => Ok(session),
            _ => Err(AtmError::NotAuthenticated),
        }
    }

    /// Run one menu command for the logged-in user
    pub fn dispatch(&mut self, command: MenuCommand) -> AtmResult<Outcome> {
        let session = match &self.state {
            AtmState::Authenticated(session) => session,
            AtmState::Unauthenticated => return Err(AtmError::NotAuthenticated),
            AtmState::Terminated => return Err(AtmError::SessionTerminated),
        };
        debug!(choice = ?command.choice(), "dispatching menu command");

        let outcome = match command {
            MenuCommand::CheckBalance => Outcome::Balance(self.service.balance(session)?),
            MenuCommand::Deposit(amount) => Outcome::Deposited {
                amount,
                balance: self.service.deposit(session, amount)?,
            },
            MenuCommand::Withdraw(amount) => Outcome::Withdrew {
                amount,
                balance: self.service.withdraw(session, amount)?,
            },
            MenuCommand::Transfer { recipient, amount } => {
                let balance = self.service.transfer(session, &recipient, amount)?;
                Outcome::Transferred {
                    amount,
                    recipient: recipient.as_str().into(),
                    balance,
                }
            }
            MenuCommand::History => Outcome::History(self.service.history(session)?.to_vec()),
            MenuCommand::Quit => {
                info!(account = %session.account_id(), "session ended");
                self.state = AtmState::Terminated;
                Outcome::Goodbye
            }
        };

        Ok(outcome)
    }

    /// End the run without a quit command (e.g. the input stream closed)
    pub fn terminate(&mut self) {
        if self.state != AtmState::Terminated {
            debug!("terminating without quit");
            self.state = AtmState::Terminated;
        }
    }
}
