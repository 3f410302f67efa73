//! Path management for the ATM
//!
//! Only the settings file lives on disk; account state is never written.
//!
//! ## Path Resolution Order
//!
//! 1. `ATM_CLI_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/atm-cli` or `~/.config/atm-cli`
//! 3. Windows: `%APPDATA%\atm-cli`

use std::path::{Path, PathBuf};

use crate::error::AtmError;

/// Manages the paths used by the ATM
#[derive(Debug, Clone)]
pub struct AtmPaths {
    base_dir: PathBuf,
    settings_override: Option<PathBuf>,
}

impl AtmPaths {
    /// Resolve the default configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, AtmError> {
        let base_dir = match std::env::var("ATM_CLI_CONFIG_DIR") {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            settings_override: None,
        }
    }

    /// Point the settings file somewhere other than `<base>/config.json`
    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_override = Some(path.into());
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.settings_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join("config.json"))
    }

    /// Create the directory that will hold the settings file
    pub fn ensure_directories(&self) -> Result<(), AtmError> {
        let settings_file = self.settings_file();
        let dir = settings_file.parent().unwrap_or(self.base_dir.as_path());
        std::fs::create_dir_all(dir)
            .map_err(|e| AtmError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AtmError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                AtmError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("atm-cli"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AtmError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AtmError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("atm-cli"))
}
