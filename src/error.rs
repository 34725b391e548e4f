//! # Errors
//!
//! Error type shared by prompt construction, the coroutine protocol and the driver loop.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use thiserror::Error;

use crate::key::Key;

/// Everything that can end a prompt without an answer.
#[derive(Debug, Error)]
pub enum PromptError {
    /// `minimum` was greater than `maximum`.
    #[error("minimum ({minimum}) cannot be greater than maximum ({maximum})")]
    InvalidRange { minimum: i64, maximum: i64 },

    /// An explicit default was below `minimum`.
    #[error("default ({default}) cannot be less than minimum ({minimum})")]
    DefaultBelowMinimum { default: i64, minimum: i64 },

    /// An explicit default was above `maximum`.
    #[error("default ({default}) cannot be greater than maximum ({maximum})")]
    DefaultAboveMaximum { default: i64, maximum: i64 },

    /// A pin code must have at least one digit.
    #[error("length must be 1 or greater; got {0}")]
    InvalidPinLength(usize),

    /// Option lists need at least one label to hover.
    #[error("at least one option is required")]
    NoOptions,

    /// The coroutine protocol or an internal invariant was broken.
    #[error("prompt protocol violation: {0}")]
    Protocol(String),

    /// Scripted input ran out before the prompt produced an accepted answer.
    #[error("prompt has never finished / ran out of keys")]
    NeverFinished,

    /// Scripted input still had keys when the prompt was answered.
    #[error("prompt finished too early; left keys: {}", format_keys(.left_keys))]
    FinishedTooEarly { left_keys: Vec<Key> },

    /// The user pressed the cancel key on a cancelable prompt.
    #[error("prompt cancelled")]
    Cancelled,

    /// The user pressed the interrupt key and the driver is configured not to exit.
    #[error("prompt interrupted")]
    Interrupted,

    /// Reading the terminal or writing the frame failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PromptError {
    /// Builds a protocol violation from any message.
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    /// Whether this error was raised while building a prompt.
    pub const fn is_construction(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::DefaultBelowMinimum { .. }
                | Self::DefaultAboveMaximum { .. }
                | Self::InvalidPinLength(_)
                | Self::NoOptions
        )
    }
}

fn format_keys(keys: &[Key]) -> String {
    let labels: Vec<String> = keys.iter().map(ToString::to_string).collect();
    format!("[{}]", labels.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_too_early_lists_keys() {
        let err = PromptError::FinishedTooEarly {
            left_keys: vec![Key::Char('a'), Key::Enter],
        };
        assert_eq!(
            err.to_string(),
            "prompt finished too early; left keys: [a, ENTER]"
        );
    }

    #[test]
    fn test_construction_classification() {
        assert!(PromptError::InvalidPinLength(0).is_construction());
        assert!(PromptError::NoOptions.is_construction());
        assert!(!PromptError::Cancelled.is_construction());
        assert!(!PromptError::protocol("x").is_construction());
    }
}
