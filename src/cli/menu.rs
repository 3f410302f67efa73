//! Interactive ATM session
//!
//! Reads logins and menu choices from a [`Console`], feeds them to the
//! [`Atm`] state machine and prints the results. User mistakes are printed
//! and the loop continues; only I/O failures abort the run.

use std::io::{self, BufRead, IsTerminal, Write};

use tracing::debug;

use super::console::Console;
use crate::config::Settings;
use crate::display::format_outcome;
use crate::error::{AtmError, AtmResult};
use crate::models::Money;
use crate::services::BankingService;
use crate::session::{Atm, MenuChoice, MenuCommand};
use crate::storage::seed_ledger;

/// Run a session on the process's stdin/stdout with the seed ledger
pub fn run_interactive(settings: &Settings) -> AtmResult<()> {
    let ledger = seed_ledger(settings.pin_verification)?;
    let mut atm = Atm::new(BankingService::with_policy(ledger, settings.banking_policy()));

    let stdin = io::stdin();
    let mask_pin = settings.mask_pin_input && stdin.is_terminal();
    let mut console = Console::new(stdin.lock(), io::stdout().lock()).with_masked_pin(mask_pin);

    run_session(&mut atm, &mut console, &settings.currency_symbol)
}

/// Drive `atm` from login to quit (or end of input)
pub fn run_session<R: BufRead, W: Write>(
    atm: &mut Atm,
    console: &mut Console<R, W>,
    symbol: &str,
) -> AtmResult<()> {
    console.line("Welcome to the ATM!")?;

    if !login(atm, console)? {
        debug!("input closed before login");
        atm.terminate();
        return Ok(());
    }
    console.line("Login Successful..!")?;

    while !atm.is_terminated() {
        show_menu(console)?;

        let command = match read_command(console, symbol) {
            Ok(Some(command)) => command,
            Ok(None) => {
                debug!("input closed during session");
                atm.terminate();
                break;
            }
            Err(e) if e.is_recoverable() => {
                console.line(&e)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        match atm.dispatch(command) {
            Ok(outcome) => console.line(format_outcome(&outcome, symbol))?,
            Err(e) if e.is_recoverable() => console.line(&e)?,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Keep asking for credentials until one pair works; `false` on end of input
fn login<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> AtmResult<bool> {
    loop {
        let Some(id) = console.prompt("Enter Your ID: ")? else {
            return Ok(false);
        };
        let Some(pin) = console.prompt_pin("Enter Your PIN: ")? else {
            return Ok(false);
        };

        match atm.login(&id, &pin) {
            Ok(_) => return Ok(true),
            Err(AtmError::AuthenticationFailed) => console.line(AtmError::AuthenticationFailed)?,
            Err(e) => return Err(e),
        }
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AtmResult<()> {
    console.line("")?;
    console.line("Select an option:")?;
    for choice in MenuChoice::ALL {
        console.line(choice)?;
    }
    Ok(())
}

/// Read a menu choice plus whatever arguments it needs
///
/// The choice is typed on the line right after the menu, with no prompt.
fn read_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    symbol: &str,
) -> AtmResult<Option<MenuCommand>> {
    let Some(input) = console.prompt("")? else {
        return Ok(None);
    };

    let command = match MenuChoice::parse(&input)? {
        MenuChoice::CheckBalance => MenuCommand::CheckBalance,
        MenuChoice::Deposit => {
            let prompt = format!("Enter the amount to deposit: {}", symbol);
            match read_amount(console, &prompt)? {
                Some(amount) => MenuCommand::Deposit(amount),
                None => return Ok(None),
            }
        }
        MenuChoice::Withdraw => {
            let prompt = format!("Enter the amount to withdraw: {}", symbol);
            match read_amount(console, &prompt)? {
                Some(amount) => MenuCommand::Withdraw(amount),
                None => return Ok(None),
            }
        }
        MenuChoice::Transfer => {
            let Some(recipient) = console.prompt("Enter the recipient's User ID: ")? else {
                return Ok(None);
            };
            let prompt = format!("Enter the amount to transfer: {}", symbol);
            match read_amount(console, &prompt)? {
                Some(amount) => MenuCommand::Transfer { recipient, amount },
                None => return Ok(None),
            }
        }
        MenuChoice::History => MenuCommand::History,
        MenuChoice::Quit => MenuCommand::Quit,
    };

    Ok(Some(command))
}

fn read_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> AtmResult<Option<Money>> {
    let Some(input) = console.prompt(prompt)? else {
        return Ok(None);
    };
    Money::parse(&input)
        .map(Some)
        .map_err(|e| AtmError::invalid_input(e.to_string()))
}
