//! # Commands
//!
//! CLI command implementations for kprompt.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod ask;
pub mod completions;
pub mod config;

pub use self::{
    ask::{AskArgs, ChoiceArgs, NumberArgs, TextArgs},
    completions::execute as completions,
    config::execute as config,
};
