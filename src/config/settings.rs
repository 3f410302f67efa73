//! User settings for the ATM
//!
//! Controls PIN storage, the deposit guard, self-transfers, prompt masking,
//! currency symbol and the default log filter. Every field has a default, so
//! a missing or partial settings file is fine.

use serde::{Deserialize, Serialize};

use super::paths::AtmPaths;
use crate::crypto::PinVerification;
use crate::error::AtmError;
use crate::services::{BankingPolicy, DepositPolicy};

/// User settings for the ATM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// How account PINs are stored and checked
    #[serde(default)]
    pub pin_verification: PinVerification,

    /// Whether deposits of zero or less are rejected
    #[serde(default)]
    pub deposit_policy: DepositPolicy,

    /// Whether an account may transfer to itself
    #[serde(default = "default_true")]
    pub allow_self_transfer: bool,

    /// Hide PIN input when reading from a terminal
    #[serde(default = "default_true")]
    pub mask_pin_input: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            pin_verification: PinVerification::default(),
            deposit_policy: DepositPolicy::default(),
            allow_self_transfer: true,
            mask_pin_input: true,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Banking rules derived from these settings
    pub fn banking_policy(&self) -> BankingPolicy {
        BankingPolicy {
            deposit: self.deposit_policy,
            allow_self_transfer: self.allow_self_transfer,
        }
    }

    /// Load settings from disk, or fall back to defaults if the file doesn't
    /// exist. Never writes.
    pub fn load_or_default(paths: &AtmPaths) -> Result<Self, AtmError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| AtmError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| AtmError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AtmPaths) -> Result<(), AtmError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AtmError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AtmError::Io(format!("Failed to write settings file: {}", e)))
    }
}
