//! # Configuration
//!
//! Global settings for the `kprompt` binary (`~/.config/keyprompt/config`).
//! The library itself only sees the resulting [`DriverOptions`](crate::DriverOptions).
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

pub use self::global::{set_home_override, Config};
