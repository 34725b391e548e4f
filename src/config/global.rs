//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/keyprompt/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DEFAULT_TERMINAL_HEIGHT, DEFAULT_TERMINAL_WIDTH, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME,
    },
    driver::DriverOptions,
};

/// Valid field names in the config file.
const VALID_FIELDS: &[&str] = &[
    "cancelable",
    "exit_on_interrupt",
    "bell",
    "fallback_width",
    "fallback_height",
];

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Defaults applied to every prompt the `kprompt` binary runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether CTRL+D cancels prompts
    #[serde(default)]
    pub cancelable: bool,

    /// Whether CTRL+C exits the process with status 130
    #[serde(default = "default_true")]
    pub exit_on_interrupt: bool,

    /// Whether alerts ring the terminal bell
    #[serde(default = "default_true")]
    pub bell: bool,

    /// Columns assumed when the terminal size is unknown
    #[serde(default = "default_width")]
    pub fallback_width: u16,

    /// Rows assumed when the terminal size is unknown
    #[serde(default = "default_height")]
    pub fallback_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cancelable: false,
            exit_on_interrupt: true,
            bell: true,
            fallback_width: DEFAULT_TERMINAL_WIDTH,
            fallback_height: DEFAULT_TERMINAL_HEIGHT,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_width() -> u16 {
    DEFAULT_TERMINAL_WIDTH
}

#[allow(clippy::missing_const_for_fn)]
fn default_height() -> u16 {
    DEFAULT_TERMINAL_HEIGHT
}

impl Config {
    /// Returns the path to the config file (~/.config/keyprompt/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        let home = get_home_override().or_else(dirs::home_dir)?;
        Some(
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME),
        )
    }

    /// Loads the config, falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            log::debug!("No home directory; using default config");
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Loads the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Writes the default config with comments. Returns true if created, false if it already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::default().save_with_comments(&path)?;
        Ok(true)
    }

    fn save_with_comments(&self, path: &Path) -> Result<()> {
        let content = format!(
            r"# keyprompt Configuration
# Defaults for prompts run by kprompt.
# Location: ~/.config/keyprompt/config

# Whether CTRL+D cancels a prompt (kprompt then exits with status 1).
# Default: false
cancelable = {cancelable}

# Whether CTRL+C exits immediately with status 130.
# When false the prompt reports an interruption instead.
# Default: true
exit_on_interrupt = {exit_on_interrupt}

# Whether unsupported keys and rejected answers ring the terminal bell.
# Default: true
bell = {bell}

# Terminal size assumed when it cannot be queried (pipes, scripted keys).
# Default: 80 x 24
fallback_width = {fallback_width}
fallback_height = {fallback_height}
",
            cancelable = self.cancelable,
            exit_on_interrupt = self.exit_on_interrupt,
            bell = self.bell,
            fallback_width = self.fallback_width,
            fallback_height = self.fallback_height,
        );

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    /// Returns the names of unknown fields in the config file, if it exists.
    pub fn unknown_fields() -> Result<Vec<String>> {
        let Some(path) = Self::path().filter(|p| p.exists()) else {
            return Ok(Vec::new());
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let table: toml::Table = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(table
            .keys()
            .filter(|key| !VALID_FIELDS.contains(&key.as_str()))
            .cloned()
            .collect())
    }

    /// Driver options carrying these defaults.
    pub const fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            cancelable: self.cancelable,
            exit_on_interrupt: self.exit_on_interrupt,
            bell: self.bell,
            fallback_width: self.fallback_width,
            fallback_height: self.fallback_height,
        }
    }
}
