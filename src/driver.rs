//! # Driver
//!
//! Runs one prompt to completion: renders frames, reads keys, forwards them to the
//! prompt's coroutine and validates its decisions.
//!
//! ## Frame lifecycle
//!
//! Every frame erases the lines of the previous one before writing itself, so a
//! prompt redraws in place. The accepted answer leaves a two-line frame behind:
//! the question and the answer.
//!
//! ## Exit paths
//!
//! - Accepted decision: the value is returned.
//! - CTRL+D on a cancelable prompt: [`PromptError::Cancelled`].
//! - CTRL+C: the process exits with status 130, or [`PromptError::Interrupted`]
//!   is returned when `exit_on_interrupt` is off.
//! - Scripted keys running out or left over: [`PromptError::NeverFinished`] and
//!   [`PromptError::FinishedTooEarly`].
//!
//! The coroutine is closed and raw mode restored on every path.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use crate::{
    constants::{
        DEFAULT_TERMINAL_HEIGHT, DEFAULT_TERMINAL_WIDTH, INTERRUPTED_EXIT_CODE, LINE_SEPARATOR,
    },
    coroutine::{Coroutine, Input, Step},
    error::PromptError,
    input::{KeySource, ScriptedKeys, TerminalKeys},
    key::Key,
    prompts::PromptMachine,
    render::{Formatter, SimpleFormatter},
    terminal::{self, RawModeGuard},
    widget::Widget,
};

/// Outcome of validating a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Accepted,
    /// Rejected with the bell only.
    RejectedSilently,
    /// Rejected with a message shown below the prompt.
    RejectedWithReason(String),
}

impl Validation {
    /// Builds a rejection with a message.
    pub fn reject(reason: impl Into<String>) -> Self {
        Self::RejectedWithReason(reason.into())
    }

    /// The widget that reports this rejection, `None` when accepted.
    fn rejection_widget(self) -> Option<Widget> {
        match self {
            Self::Accepted => None,
            Self::RejectedSilently => Some(Widget::Alert),
            Self::RejectedWithReason(reason) => Some(Widget::Error(reason)),
        }
    }
}

impl From<bool> for Validation {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::RejectedSilently
        }
    }
}

/// Behavior switches for a [`Driver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
    /// CTRL+D ends the prompt with [`PromptError::Cancelled`].
    pub cancelable: bool,
    /// CTRL+C exits the process instead of returning [`PromptError::Interrupted`].
    pub exit_on_interrupt: bool,
    /// Ring the terminal bell on alerts.
    pub bell: bool,
    /// Columns assumed when the terminal size is unknown.
    pub fallback_width: u16,
    /// Rows assumed when the terminal size is unknown.
    pub fallback_height: u16,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            cancelable: false,
            exit_on_interrupt: true,
            bell: true,
            fallback_width: DEFAULT_TERMINAL_WIDTH,
            fallback_height: DEFAULT_TERMINAL_HEIGHT,
        }
    }
}

/// Drives prompts against a key source and an output sink.
#[derive(Debug)]
pub struct Driver<K, W, F = SimpleFormatter> {
    keys: K,
    out: W,
    formatter: F,
    options: DriverOptions,
    /// Lines written by the last frame.
    rendered: usize,
}

impl<K: KeySource, W: Write> Driver<K, W> {
    pub fn new(keys: K, out: W, options: DriverOptions) -> Self {
        Self {
            keys,
            out,
            formatter: SimpleFormatter::new(options.bell),
            options,
            rendered: 0,
        }
    }
}

impl Driver<ScriptedKeys, io::Sink> {
    /// Feeds a key script and discards all output.
    pub fn scripted(script: &str, options: DriverOptions) -> Self {
        Self::new(ScriptedKeys::new(script), io::sink(), options)
    }
}

impl Driver<TerminalKeys, io::Stderr> {
    /// Reads the keyboard and draws on stderr.
    pub fn terminal(options: DriverOptions) -> Self {
        Self::new(TerminalKeys, io::stderr(), options)
    }
}

impl<K: KeySource, W: Write, F: Formatter> Driver<K, W, F> {
    /// Replaces the formatter.
    pub fn with_formatter<G: Formatter>(self, formatter: G) -> Driver<K, W, G> {
        Driver {
            keys: self.keys,
            out: self.out,
            formatter,
            options: self.options,
            rendered: self.rendered,
        }
    }

    pub const fn options(&self) -> &DriverOptions {
        &self.options
    }

    pub const fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs a prompt and accepts its first decision.
    pub fn run<M: PromptMachine>(
        &mut self,
        question: &str,
        machine: M,
    ) -> Result<M::Output, PromptError> {
        self.run_validated(question, machine, |_| Validation::Accepted)
    }

    /// Runs a prompt until `validate` accepts one of its decisions.
    pub fn run_validated<M, V>(
        &mut self,
        question: &str,
        machine: M,
        mut validate: V,
    ) -> Result<M::Output, PromptError>
    where
        M: PromptMachine,
        V: FnMut(&M::Output) -> Validation,
    {
        log::debug!("Starting prompt {question:?}");
        let raw_mode = if self.keys.is_interactive() {
            Some(RawModeGuard::enter()?)
        } else {
            None
        };

        self.rendered = 0;
        let mut coroutine = Coroutine::new(machine);
        let result = self.drive(question, &mut coroutine, &mut validate);
        coroutine.close();
        self.rendered = 0;
        drop(raw_mode);

        match &result {
            Err(PromptError::Interrupted) if self.options.exit_on_interrupt => {
                self.out.flush().ok();
                std::process::exit(INTERRUPTED_EXIT_CODE);
            }
            Err(PromptError::Protocol(message)) => log::warn!("Prompt protocol violation: {message}"),
            Err(err) => log::debug!("Prompt {question:?} ended: {err}"),
            Ok(_) => {}
        }

        let value = result?;
        let left_keys = self.keys.leftover();
        if left_keys.is_empty() {
            Ok(value)
        } else {
            Err(PromptError::FinishedTooEarly { left_keys })
        }
    }

    fn drive<M, V>(
        &mut self,
        question: &str,
        coroutine: &mut Coroutine<M>,
        validate: &mut V,
    ) -> Result<M::Output, PromptError>
    where
        M: PromptMachine,
        V: FnMut(&M::Output) -> Validation,
    {
        let question = Widget::Question(question.to_string());
        let mut screen = coroutine.start()?;

        loop {
            self.draw(&question, &screen)?;

            let key = self.keys.read_key()?.ok_or(PromptError::NeverFinished)?;
            log::trace!("Key {key}");
            match key {
                Key::Interrupt => return Err(PromptError::Interrupted),
                Key::Cancel if self.options.cancelable => return Err(PromptError::Cancelled),
                _ => {}
            }

            match coroutine.resume(Input::Key(key))? {
                Step::Screen(widgets) => screen = widgets,
                Step::Decision(decision) => match validate(&decision.value).rejection_widget() {
                    None => {
                        log::debug!("Answer {:?} accepted", decision.display);
                        self.draw(&question, &[Widget::Answer(decision.display)])?;
                        return Ok(decision.value);
                    }
                    Some(rejection) => {
                        log::debug!("Answer {:?} rejected", decision.display);
                        let Step::Screen(widgets) = coroutine.resume(Input::Nop)? else {
                            return Err(PromptError::protocol("decision emitted on a no-op"));
                        };
                        screen = widgets;
                        screen.push(rejection);
                    }
                },
            }
        }
    }

    /// Erases the previous frame and writes `question` followed by `widgets`.
    fn draw(&mut self, question: &Widget, widgets: &[Widget]) -> Result<(), PromptError> {
        let (width, height) = self.size();
        let mut frame = Vec::with_capacity(widgets.len() + 1);
        frame.push(question.clone());
        frame.extend_from_slice(widgets);
        let lines = self.formatter.format(width, height, &frame);

        terminal::erase_lines(&mut self.out, self.rendered)?;
        for line in &lines {
            write!(self.out, "{line}{LINE_SEPARATOR}")?;
        }
        self.out.flush()?;
        self.rendered = lines.len();
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let fallback = (self.options.fallback_width, self.options.fallback_height);
        if self.keys.is_interactive() {
            terminal::size_or(fallback)
        } else {
            fallback
        }
    }
}
