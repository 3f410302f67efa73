use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use atm_cli::cli::{handle_config_command, run_interactive};
use atm_cli::config::{AtmPaths, Settings};

#[derive(Parser)]
#[command(
    name = "atm",
    author = "Kaylee Beyene",
    version,
    about = "Terminal ATM simulator",
    long_about = "A single-session ATM over a fixed in-memory set of accounts. \
                  Log in with a user ID and PIN, then check your balance, deposit, \
                  withdraw, transfer and review your transaction history."
)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true, env = "ATM_CLI_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive ATM session (the default)
    Run,

    /// Show current configuration and paths
    Config {
        /// Write a settings file with defaults if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match &cli.config {
        Some(file) => {
            let base = file
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            AtmPaths::with_base_dir(base).with_settings_file(file)
        }
        None => AtmPaths::new()?,
    };
    let settings = Settings::load_or_default(&paths)?;

    init_tracing(&settings);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_interactive(&settings)?,
        Commands::Config { init } => {
            let stdout = std::io::stdout();
            handle_config_command(&mut stdout.lock(), &paths, &settings, init)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the ATM prompts
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
