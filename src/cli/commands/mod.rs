//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, Settings, resolve_settings};

/// One-shot question from an argument, file or stdin.
pub mod ask;

/// `ask config` handler.
pub mod config;

/// Interactive question form.
pub mod form;

/// Loads the config file (if any) and merges the CLI language overrides into it.
pub fn load_settings(options: &ResolveOptions) -> Result<Settings> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    resolve_settings(options, &config_file)
}
