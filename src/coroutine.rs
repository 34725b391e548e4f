//! # Coroutine Protocol
//!
//! Wraps a [`PromptMachine`] in the start/resume/close protocol the driver speaks.
//!
//! - The first emission is always a screen.
//! - After a decision the coroutine must be resumed once with [`Input::Nop`]
//!   before it accepts keys again, so a rejected decision can be followed by an
//!   alert without a real key being attributed to it.
//! - A closed coroutine cannot be resumed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    decision::Decision,
    error::PromptError,
    key::Key,
    prompts::{PromptMachine, Transition},
    widget::Widget,
};

/// What the driver sends into a suspended coroutine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// Synthetic resume after a decision.
    Nop,
}

/// What a suspended coroutine hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    Screen(Vec<Widget>),
    Decision(Decision<T>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    AwaitingKey,
    Decided,
    Closed,
}

/// A prompt machine driven through the coroutine protocol.
#[derive(Debug)]
pub struct Coroutine<M> {
    machine: M,
    phase: Phase,
}

impl<M: PromptMachine> Coroutine<M> {
    pub const fn new(machine: M) -> Self {
        Self {
            machine,
            phase: Phase::Fresh,
        }
    }

    /// Primes the coroutine and returns its first screen.
    pub fn start(&mut self) -> Result<Vec<Widget>, PromptError> {
        match self.phase {
            Phase::Fresh => {
                self.phase = Phase::AwaitingKey;
                Ok(self.machine.widgets())
            }
            Phase::Closed => Err(PromptError::protocol("coroutine started after close")),
            _ => Err(PromptError::protocol("coroutine started twice")),
        }
    }

    /// Resumes the coroutine with a key or a no-op.
    pub fn resume(&mut self, input: Input) -> Result<Step<M::Output>, PromptError> {
        match (self.phase, input) {
            (Phase::Fresh, _) => Err(PromptError::protocol("coroutine resumed before start")),
            (Phase::Closed, _) => Err(PromptError::protocol("coroutine resumed after close")),
            (Phase::Decided, Input::Key(key)) => Err(PromptError::protocol(format!(
                "key {key} sent right after a decision; resume with a no-op first"
            ))),
            (Phase::AwaitingKey, Input::Nop) => Err(PromptError::protocol(
                "no-op sent while the coroutine awaits a key",
            )),
            (Phase::Decided, Input::Nop) => {
                self.phase = Phase::AwaitingKey;
                Ok(Step::Screen(self.machine.widgets()))
            }
            (Phase::AwaitingKey, Input::Key(key)) => match self.machine.handle_key(key)? {
                Transition::Continue => Ok(Step::Screen(self.machine.widgets())),
                Transition::Alert => {
                    let mut widgets = vec![Widget::Alert];
                    widgets.extend(self.machine.widgets());
                    Ok(Step::Screen(widgets))
                }
                Transition::Decide(decision) => {
                    self.phase = Phase::Decided;
                    Ok(Step::Decision(decision))
                }
            },
        }
    }

    /// Closes the coroutine; further resumes are protocol violations.
    pub fn close(&mut self) {
        self.phase = Phase::Closed;
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub const fn machine(&self) -> &M {
        &self.machine
    }
}
