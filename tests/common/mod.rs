//! # Test Harness
//!
//! Provides utilities for integration testing keyprompt without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use keyprompt::set_home_override;

/// Test environment with a temporary "home" directory for the global config.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/keyprompt/config)
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Creates a new test environment and redirects the config lookup of this thread.
    pub fn new() -> Self {
        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));
        Self { home_dir }
    }

    /// Returns the path where the config would be stored.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("keyprompt")
            .join("config")
    }

    /// Creates a config file with the given content.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Reads the config file content.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path()).unwrap_or_default()
    }

    /// A `kprompt` command whose home directory is this environment's.
    pub fn kprompt(&self) -> Command {
        let mut cmd = Command::cargo_bin("kprompt").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}

/// Builder for config file content.
#[derive(Default)]
pub struct ConfigBuilder {
    cancelable: Option<bool>,
    exit_on_interrupt: Option<bool>,
    bell: Option<bool>,
    fallback_width: Option<u16>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancelable(mut self, value: bool) -> Self {
        self.cancelable = Some(value);
        self
    }

    pub fn exit_on_interrupt(mut self, value: bool) -> Self {
        self.exit_on_interrupt = Some(value);
        self
    }

    pub fn bell(mut self, value: bool) -> Self {
        self.bell = Some(value);
        self
    }

    pub fn fallback_width(mut self, value: u16) -> Self {
        self.fallback_width = Some(value);
        self
    }

    pub fn build(self) -> String {
        let mut lines = Vec::new();
        if let Some(v) = self.cancelable {
            lines.push(format!("cancelable = {v}"));
        }
        if let Some(v) = self.exit_on_interrupt {
            lines.push(format!("exit_on_interrupt = {v}"));
        }
        if let Some(v) = self.bell {
            lines.push(format!("bell = {v}"));
        }
        if let Some(v) = self.fallback_width {
            lines.push(format!("fallback_width = {v}"));
        }
        lines.join("\n") + "\n"
    }
}
