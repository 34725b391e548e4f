//! # Decisions
//!
//! The value a prompt machine finishes with, plus how to show it in the answer line.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Display;

/// A finished value and its display text.
///
/// A prompt may decide several times when the caller's validation rejects
/// earlier decisions; only the accepted one reaches the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<T> {
    pub value: T,
    pub display: String,
}

impl<T: Display> Decision<T> {
    /// Wraps a value displayed through its `Display` impl.
    pub fn new(value: T) -> Self {
        let display = value.to_string();
        Self { value, display }
    }
}

impl<T> Decision<T> {
    /// Wraps a value with an explicit display text.
    pub fn with_display(value: T, display: impl Into<String>) -> Self {
        Self {
            value,
            display: display.into(),
        }
    }

    /// Converts the value, keeping the display text.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decision<U> {
        Decision {
            value: f(self.value),
            display: self.display,
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
