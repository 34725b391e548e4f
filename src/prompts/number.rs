//! Integer stepper prompt.

use crate::{
    constants::{DECREASE_LABEL, ENTER_LABEL, INCREASE_LABEL},
    decision::Decision,
    error::PromptError,
    key::Key,
    prompts::{PromptMachine, Transition},
    widget::Widget,
};

/// Steps an integer with `+`/`-` or the arrow keys inside optional bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Number {
    value: i64,
    minimum: Option<i64>,
    maximum: Option<i64>,
}

impl Default for Number {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Number {
    /// Creates a bounded number prompt.
    ///
    /// Without an explicit `default` the prompt starts at `minimum` if given,
    /// else at `maximum` if that is not positive, else at zero.
    pub fn new(
        minimum: Option<i64>,
        maximum: Option<i64>,
        default: Option<i64>,
    ) -> Result<Self, PromptError> {
        if let (Some(minimum), Some(maximum)) = (minimum, maximum) {
            if minimum > maximum {
                return Err(PromptError::InvalidRange { minimum, maximum });
            }
        }

        let value = match default {
            Some(default) => {
                if let Some(minimum) = minimum.filter(|m| default < *m) {
                    return Err(PromptError::DefaultBelowMinimum { default, minimum });
                }
                if let Some(maximum) = maximum.filter(|m| default > *m) {
                    return Err(PromptError::DefaultAboveMaximum { default, maximum });
                }
                default
            }
            None => minimum
                .or_else(|| maximum.filter(|m| *m <= 0))
                .unwrap_or(0),
        };

        Ok(Self {
            value,
            minimum,
            maximum,
        })
    }

    /// Creates a number prompt without bounds, starting at zero.
    pub const fn unbounded() -> Self {
        Self {
            value: 0,
            minimum: None,
            maximum: None,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }

    fn step(&mut self, delta: i64) -> Transition<i64> {
        let Some(next) = self.value.checked_add(delta) else {
            return Transition::Alert;
        };
        let below = self.minimum.is_some_and(|m| next < m);
        let above = self.maximum.is_some_and(|m| next > m);
        if below || above {
            return Transition::Alert;
        }
        self.value = next;
        Transition::Continue
    }
}

impl PromptMachine for Number {
    type Output = i64;

    fn widgets(&self) -> Vec<Widget> {
        vec![
            Widget::Integer(self.value),
            Widget::navigation([
                (ENTER_LABEL, "done"),
                (INCREASE_LABEL, "increase"),
                (DECREASE_LABEL, "decrease"),
            ]),
        ]
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<i64>, PromptError> {
        Ok(match key {
            Key::Enter => Transition::Decide(Decision::new(self.value)),
            Key::Up | Key::Char('+') => self.step(1),
            Key::Down | Key::Char('-') => self.step(-1),
            _ => Transition::Alert,
        })
    }
}
