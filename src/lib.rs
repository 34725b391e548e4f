//! # keyprompt
//!
//! Keyboard-driven interactive prompts for the terminal.
//!
//! Every prompt is a small state machine that describes its screen as widgets and
//! reacts to one key at a time. A [`Driver`] renders those widgets, reads keys
//! from the terminal (or from a script in tests) and validates the answers.
//!
//! ## Prompts
//!
//! - **Confirm**: yes/no with a default for ENTER
//! - **Text**: free text, optionally masked or requiring a double ENTER
//! - **Number**: integer stepper with optional bounds
//! - **Choice / `MultiChoice`**: pick one or several labels
//! - **Sort**: reorder labels by picking them up and moving them
//! - **Pin**: fixed-length digit code
//!
//! ## Example
//!
//! ```no_run
//! use keyprompt::{prompts::Number, Driver, DriverOptions, Validation};
//!
//! let mut driver = Driver::terminal(DriverOptions::default());
//! let age = driver.run_validated("How old are you?", Number::new(Some(0), None, None)?, |age| {
//!     if *age >= 18 { Validation::Accepted } else { Validation::reject("must be an adult") }
//! })?;
//! println!("{age}");
//! # Ok::<(), keyprompt::PromptError>(())
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod coroutine;
pub mod cursor;
pub mod decision;
pub mod driver;
pub mod error;
pub mod input;
pub mod key;
pub mod logging;
pub mod prompts;
pub mod render;
pub mod terminal;
pub mod widget;

pub use config::{set_home_override, Config};
pub use decision::Decision;
pub use driver::{Driver, DriverOptions, Validation};
pub use error::PromptError;
pub use input::{KeySource, ScriptedKeys, TerminalKeys};
pub use key::Key;
pub use prompts::{Prompt, PromptMachine, Value};
pub use render::{Formatter, SimpleFormatter};
pub use widget::{OptionItem, Widget};
