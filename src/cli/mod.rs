//! CLI command handlers
//!
//! Bridges clap argument parsing and the terminal with the ATM state machine.

pub mod config;
pub mod console;
pub mod menu;

pub use config::handle_config_command;
pub use console::Console;
pub use menu::{run_interactive, run_session};
