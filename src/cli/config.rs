//! `atm config` handler

use std::io::Write;

use crate::config::{AtmPaths, Settings};
use crate::error::AtmResult;

/// Print the resolved settings file and active settings
///
/// With `init`, writes the current settings to the settings file unless one
/// already exists.
pub fn handle_config_command<W: Write>(
    out: &mut W,
    paths: &AtmPaths,
    settings: &Settings,
    init: bool,
) -> AtmResult<()> {
    let settings_file = paths.settings_file();

    if init {
        if settings_file.exists() {
            writeln!(out, "Settings file already exists: {}", settings_file.display())?;
        } else {
            settings.save(paths)?;
            writeln!(out, "Wrote default settings to {}", settings_file.display())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "ATM Configuration")?;
    writeln!(out, "=================")?;
    writeln!(out, "Config directory: {}", paths.base_dir().display())?;
    writeln!(out, "Settings file:    {}", settings_file.display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol:     {}", settings.currency_symbol)?;
    writeln!(out, "  PIN verification:    {}", settings.pin_verification)?;
    writeln!(out, "  Deposit policy:      {:?}", settings.deposit_policy)?;
    writeln!(out, "  Allow self-transfer: {}", settings.allow_self_transfer)?;
    writeln!(out, "  Mask PIN input:      {}", settings.mask_pin_input)?;
    writeln!(out, "  Log filter:          {}", settings.log_filter)?;
    Ok(())
}
