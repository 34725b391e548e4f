//! Fixed-length digit code prompt.

use crate::{
    decision::Decision,
    error::PromptError,
    key::Key,
    prompts::{PromptMachine, Transition},
    widget::Widget,
};

/// Reads exactly `length` decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    length: usize,
    digits: Vec<u8>,
    require_enter: bool,
}

impl Pin {
    pub fn new(length: usize) -> Result<Self, PromptError> {
        if length < 1 {
            return Err(PromptError::InvalidPinLength(length));
        }
        Ok(Self {
            length,
            digits: Vec::with_capacity(length),
            require_enter: false,
        })
    }

    /// Waits for ENTER instead of finishing on the last digit.
    #[must_use]
    pub fn with_require_enter(mut self, require_enter: bool) -> Self {
        self.require_enter = require_enter;
        self
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    fn is_full(&self) -> bool {
        self.digits.len() >= self.length
    }

    fn decision(&self) -> Decision<Vec<u8>> {
        let display: String = self.digits.iter().map(u8::to_string).collect();
        Decision::with_display(self.digits.clone(), display)
    }
}

impl PromptMachine for Pin {
    type Output = Vec<u8>;

    fn widgets(&self) -> Vec<Widget> {
        let code = self
            .digits
            .iter()
            .copied()
            .map(Some)
            .chain(std::iter::repeat(None))
            .take(self.length)
            .collect();
        vec![Widget::Code(code)]
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<Vec<u8>>, PromptError> {
        if key == Key::Backspace {
            return Ok(if self.digits.pop().is_some() {
                Transition::Continue
            } else {
                Transition::Alert
            });
        }

        if key == Key::Enter {
            return Ok(if self.is_full() {
                Transition::Decide(self.decision())
            } else {
                Transition::Alert
            });
        }

        Ok(match key.digit() {
            Some(digit) if !self.is_full() => {
                self.digits.push(digit);
                if self.is_full() && !self.require_enter {
                    Transition::Decide(self.decision())
                } else {
                    Transition::Continue
                }
            }
            _ => Transition::Alert,
        })
    }
}
