//! Configuration module for the ATM
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution for the settings file
//! - Settings loading with defaults for every field

pub mod paths;
pub mod settings;

pub use paths::AtmPaths;
pub use settings::Settings;
