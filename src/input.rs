//! # Key Sources
//!
//! Where the driver reads keys from: the live terminal or a fixed script.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::collections::VecDeque;

use crossterm::event::{self, Event};

use crate::{error::PromptError, key::Key};

/// Supplies one key per driver iteration.
pub trait KeySource {
    /// Blocks until the next key; `None` means the source is exhausted.
    fn read_key(&mut self) -> Result<Option<Key>, PromptError>;

    /// Keys still queued after a prompt was answered.
    fn leftover(&mut self) -> Vec<Key> {
        Vec::new()
    }

    /// Whether keys come from a live terminal that needs raw mode.
    fn is_interactive(&self) -> bool {
        false
    }
}

/// A predetermined key sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    /// Parses a script such as `"12\x7f3\n"`; see [`Key::parse_script`].
    pub fn new(script: &str) -> Self {
        Self::from_keys(Key::parse_script(script))
    }

    pub fn from_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<Option<Key>, PromptError> {
        Ok(self.keys.pop_front())
    }

    fn leftover(&mut self) -> Vec<Key> {
        self.keys.drain(..).collect()
    }
}

/// Reads key presses from the terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> Result<Option<Key>, PromptError> {
        loop {
            if let Event::Key(event) = event::read()? {
                if let Some(key) = Key::from_event(event) {
                    return Ok(Some(key));
                }
                log::trace!("Skipping unmapped key event {event:?}");
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_keys_in_order() {
        let mut keys = ScriptedKeys::new("y\n");
        assert_eq!(keys.read_key().unwrap(), Some(Key::Char('y')));
        assert_eq!(keys.read_key().unwrap(), Some(Key::Enter));
        assert_eq!(keys.read_key().unwrap(), None);
    }

    #[test]
    fn test_leftover_drains_queue() {
        let mut keys = ScriptedKeys::new("abc");
        keys.read_key().unwrap();
        assert_eq!(keys.leftover(), vec![Key::Char('b'), Key::Char('c')]);
        assert_eq!(keys.remaining(), 0);
    }

    #[test]
    fn test_scripted_keys_are_not_interactive() {
        assert!(!ScriptedKeys::default().is_interactive());
        assert!(TerminalKeys.is_interactive());
    }
}
