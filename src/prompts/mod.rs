//! # Prompts
//!
//! One state machine per prompt kind. Each machine describes its screen as widgets
//! and reacts to one key at a time; the [`Coroutine`](crate::coroutine::Coroutine)
//! wrapper turns that into the start/resume/close protocol the driver speaks.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod choice;
mod confirm;
mod list;
mod number;
mod pin;
mod sort;
mod text;

use std::fmt;

pub use choice::{Choice, MultiChoice, Requirement};
pub use confirm::Confirm;
pub use number::Number;
pub use pin::Pin;
pub use sort::Sort;
pub use text::Text;

use crate::{decision::Decision, error::PromptError, key::Key, widget::Widget};

/// What a machine wants after handling a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<T> {
    /// Redraw the current state.
    Continue,
    /// Redraw with the bell; the key was not accepted.
    Alert,
    /// Finish with a value, subject to the caller's validation.
    Decide(Decision<T>),
}

/// A prompt-specific state machine.
pub trait PromptMachine {
    /// The value the prompt answers with.
    type Output;

    /// Widgets describing the current state.
    fn widgets(&self) -> Vec<Widget>;

    /// Handles one key.
    ///
    /// Errors are reserved for broken internal invariants.
    fn handle_key(&mut self, key: Key) -> Result<Transition<Self::Output>, PromptError>;
}

/// Any prompt kind behind one type.
#[derive(Debug)]
pub enum Prompt {
    Confirm(Confirm),
    Text(Text),
    Number(Number),
    Choice(Choice),
    MultiChoice(MultiChoice),
    Sort(Sort),
    Pin(Pin),
}

/// The answer of a [`Prompt`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Text(String),
    Integer(i64),
    Label(String),
    Labels(Vec<String>),
    Digits(Vec<u8>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Text(value) | Self::Label(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Labels(labels) => f.write_str(&labels.join("\n")),
            Self::Digits(digits) => digits.iter().try_for_each(|d| write!(f, "{d}")),
        }
    }
}

fn lift<T>(
    transition: Transition<T>,
    wrap: impl FnOnce(T) -> Value,
) -> Transition<Value> {
    match transition {
        Transition::Continue => Transition::Continue,
        Transition::Alert => Transition::Alert,
        Transition::Decide(decision) => Transition::Decide(decision.map(wrap)),
    }
}

impl PromptMachine for Prompt {
    type Output = Value;

    fn widgets(&self) -> Vec<Widget> {
        match self {
            Self::Confirm(p) => p.widgets(),
            Self::Text(p) => p.widgets(),
            Self::Number(p) => p.widgets(),
            Self::Choice(p) => p.widgets(),
            Self::MultiChoice(p) => p.widgets(),
            Self::Sort(p) => p.widgets(),
            Self::Pin(p) => p.widgets(),
        }
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<Value>, PromptError> {
        Ok(match self {
            Self::Confirm(p) => lift(p.handle_key(key)?, Value::Bool),
            Self::Text(p) => lift(p.handle_key(key)?, Value::Text),
            Self::Number(p) => lift(p.handle_key(key)?, Value::Integer),
            Self::Choice(p) => lift(p.handle_key(key)?, Value::Label),
            Self::MultiChoice(p) => lift(p.handle_key(key)?, Value::Labels),
            Self::Sort(p) => lift(p.handle_key(key)?, Value::Labels),
            Self::Pin(p) => lift(p.handle_key(key)?, Value::Digits),
        })
    }
}

macro_rules! impl_from_prompt {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Prompt {
                fn from(prompt: $variant) -> Self {
                    Self::$variant(prompt)
                }
            }
        )*
    };
}

impl_from_prompt!(Confirm, Text, Number, Choice, MultiChoice, Sort, Pin);
