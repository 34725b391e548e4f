//! # Config Command
//!
//! Shows the effective configuration or writes the default config file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::config::Config;

/// Executes the config command.
///
/// With `init`, creates the commented default file if it is missing. Otherwise
/// prints the config path followed by the effective values as TOML.
pub fn execute(init: bool) -> Result<()> {
    let path = Config::path().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if init {
        if Config::create_default_if_missing()? {
            eprintln!("{} Created config: {}", "✓".green(), path.display());
        } else {
            eprintln!("{} Config already exists: {}", "✓".green(), path.display());
        }
        return Ok(());
    }

    let config = Config::load()?;
    for field in Config::unknown_fields()? {
        eprintln!("{} Unknown config field ignored: {field}", "!".yellow().bold());
    }

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, showing defaults)", path.display());
    }
    let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{content}");
    Ok(())
}
