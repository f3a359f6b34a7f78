use anyhow::Result;

use crate::config::{ConfigManager, Settings};
use crate::ui::Style;

/// Prints the settings in effect. The API key itself is never shown.
pub fn print_config(settings: &Settings) -> Result<()> {
    let manager = ConfigManager::new()?;
    let path = manager.config_path();

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}     {}{}",
        Style::label("file"),
        Style::secondary(path.display()),
        if path.exists() { "" } else { " (not found, using defaults)" }
    );
    println!(
        "  {} {}",
        Style::label("endpoint"),
        Style::secondary(&settings.endpoint)
    );
    println!("  {}    {}", Style::label("model"), Style::value(&settings.model));
    println!(
        "  {}  {} {}",
        Style::label("api key"),
        Style::value(&settings.api_key_env),
        if settings.credential.is_some() {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        }
    );
    println!(
        "  {}     {}",
        Style::label("from"),
        Style::value(settings.default_source)
    );
    println!(
        "  {}       {}",
        Style::label("to"),
        Style::value(settings.default_target)
    );

    Ok(())
}
