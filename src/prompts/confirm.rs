//! Yes/no prompt.

use crate::{
    decision::Decision,
    error::PromptError,
    key::Key,
    prompts::{PromptMachine, Transition},
    widget::Widget,
};

/// Asks for a boolean; ENTER takes the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirm {
    default: bool,
}

impl Default for Confirm {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm {
    /// Creates a confirm prompt defaulting to yes.
    pub const fn new() -> Self {
        Self { default: true }
    }

    #[must_use]
    pub const fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

fn decide(value: bool) -> Transition<bool> {
    Transition::Decide(Decision::with_display(value, if value { "yes" } else { "no" }))
}

impl PromptMachine for Confirm {
    type Output = bool;

    fn widgets(&self) -> Vec<Widget> {
        vec![Widget::Confirm {
            default: self.default,
        }]
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<bool>, PromptError> {
        Ok(match key {
            Key::Char('y' | 'Y') => decide(true),
            Key::Char('n' | 'N') => decide(false),
            Key::Enter => decide(self.default),
            _ => Transition::Alert,
        })
    }
}
