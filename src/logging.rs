//! # Logging
//!
//! `env_logger` setup for the `kprompt` binary. Logs go to stderr, next to the
//! prompt frames, so they stay out of the answer printed on stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use log::LevelFilter;

#[derive(Debug, Default)]
pub struct Logging {
    verbosity: u8,
}

impl Logging {
    #[must_use]
    pub const fn new() -> Self {
        Self { verbosity: 0 }
    }

    /// Number of `-v` flags: 0 warns, 1 adds debug, 2 or more trace every key.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub const fn level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Installs the global logger. `RUST_LOG` overrides the verbosity flags.
    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::Builder::new();
        b.filter_level(self.level());
        b.parse_env(Env::default());
        b.target(Target::Stderr);
        b.format_timestamp(None);
        b.try_init().context("Failed to initialize logging")
    }
}
