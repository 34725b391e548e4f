//! # Constants
//!
//! Centralized constants for magic values used throughout keyprompt.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Terminal
// =============================================================================

/// Width used when the terminal size cannot be queried (pipes, scripted keys).
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Height used when the terminal size cannot be queried.
pub const DEFAULT_TERMINAL_HEIGHT: u16 = 24;

/// Exit status after CTRL+C (128 + SIGINT).
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Line separator for frames; raw mode does not translate `\n`.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Terminal bell.
pub const BELL: char = '\x07';

// =============================================================================
// Formatting
// =============================================================================

/// Prefix of the question line.
pub const QUESTION_PREFIX: &str = "? ";

/// Prefix of the answer line.
pub const ANSWER_PREFIX: &str = "> ";

/// Prefix of validation error lines.
pub const ERROR_PREFIX: &str = "! ";

/// Shown in place of an empty answer.
pub const EMPTY_ANSWER: &str = "(none)";

/// Heading of the key hint block.
pub const NAVIGATION_HEADING: &str = "NAVIGATION";

/// Character used to mask hidden text.
pub const HIDE_MASK_CHAR: char = '*';

/// Placeholder for a missing pin digit.
pub const CODE_BLANK: &str = "_";

/// Separator between labels in list answers.
pub const LIST_SEPARATOR: &str = ", ";

// =============================================================================
// Key Hints
// =============================================================================

/// Key label for the hide toggle.
pub const TOGGLE_HIDE_LABEL: &str = "CTRL + H";

/// Key label for finishing a number prompt.
pub const ENTER_LABEL: &str = "ENTER";

/// Key label for incrementing a number.
pub const INCREASE_LABEL: &str = "+ OR \u{2191}";

/// Key label for decrementing a number.
pub const DECREASE_LABEL: &str = "- OR \u{2193}";

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "keyprompt";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";
