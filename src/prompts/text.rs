//! Free-form text prompt.

use std::fmt;

use crate::{
    constants::{HIDE_MASK_CHAR, TOGGLE_HIDE_LABEL},
    decision::Decision,
    error::PromptError,
    key::Key,
    prompts::{PromptMachine, Transition},
    widget::Widget,
};

type CharFilter = Box<dyn Fn(char) -> bool>;

/// Reads a line of text character by character.
///
/// There is no cursor inside the buffer: characters append, BACKSPACE removes
/// the last one, arrows and paging keys ring the bell.
pub struct Text {
    buffer: String,
    /// Current masking state.
    hide: bool,
    /// Masking was requested at construction; enables the toggle key.
    hideable: bool,
    default: String,
    placeholder: Option<String>,
    double_enter: bool,
    pending_enter: bool,
    filter: Option<CharFilter>,
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("buffer", &self.buffer)
            .field("hide", &self.hide)
            .field("hideable", &self.hideable)
            .field("default", &self.default)
            .field("placeholder", &self.placeholder)
            .field("double_enter", &self.double_enter)
            .field("pending_enter", &self.pending_enter)
            .finish_non_exhaustive()
    }
}

impl Default for Text {
    fn default() -> Self {
        Self::new()
    }
}

impl Text {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            hide: false,
            hideable: false,
            default: String::new(),
            placeholder: None,
            double_enter: false,
            pending_enter: false,
            filter: None,
        }
    }

    /// Masks the input and enables CTRL+H to reveal it.
    #[must_use]
    pub fn with_hide(mut self, hide: bool) -> Self {
        self.hide = hide;
        self.hideable = hide;
        self
    }

    /// Value returned when nothing was typed.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Hint shown while the buffer is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Requires two consecutive ENTER presses to finish.
    #[must_use]
    pub fn with_double_enter(mut self, double_enter: bool) -> Self {
        self.double_enter = double_enter;
        self
    }

    /// Only characters passing `filter` are appended; others ring the bell.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(char) -> bool + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn content(&self) -> &str {
        &self.buffer
    }

    pub const fn is_hidden(&self) -> bool {
        self.hide
    }

    fn accepts(&self, c: char) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(c))
    }

    fn decision(&self) -> Decision<String> {
        let value = if self.buffer.is_empty() {
            self.default.clone()
        } else {
            self.buffer.clone()
        };
        // A hideable answer masks what was typed, never the default
        let display = if self.hideable {
            HIDE_MASK_CHAR.to_string().repeat(self.buffer.chars().count())
        } else {
            value.clone()
        };
        Decision::with_display(value, display)
    }
}

impl PromptMachine for Text {
    type Output = String;

    fn widgets(&self) -> Vec<Widget> {
        let mut widgets = vec![Widget::Text {
            content: self.buffer.clone(),
            placeholder: self.placeholder.clone(),
            hide: self.hide,
        }];
        if self.hideable {
            let action = if self.hide { "show text" } else { "hide text" };
            widgets.push(Widget::navigation([(TOGGLE_HIDE_LABEL, action)]));
        }
        widgets
    }

    fn handle_key(&mut self, key: Key) -> Result<Transition<String>, PromptError> {
        if key == Key::Enter {
            if self.double_enter && !self.pending_enter {
                self.pending_enter = true;
                return Ok(Transition::Continue);
            }
            self.pending_enter = false;
            return Ok(Transition::Decide(self.decision()));
        }

        self.pending_enter = false;

        Ok(match key {
            Key::Backspace => {
                if self.buffer.pop().is_some() {
                    Transition::Continue
                } else {
                    Transition::Alert
                }
            }
            Key::ToggleHide => {
                if self.hideable {
                    self.hide = !self.hide;
                    Transition::Continue
                } else {
                    Transition::Alert
                }
            }
            // No cursor movement inside the buffer
            Key::Up | Key::Down | Key::PageUp | Key::PageDown => Transition::Alert,
            other => match other.as_char() {
                Some(c) if self.accepts(c) => {
                    self.buffer.push(c);
                    Transition::Continue
                }
                _ => Transition::Alert,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(text: &mut Text, s: &str) {
        for key in Key::parse_script(s) {
            text.handle_key(key).unwrap();
        }
    }

    fn decided(transition: Transition<String>) -> Decision<String> {
        match transition {
            Transition::Decide(decision) => decision,
            other => panic!("expected a decision, got {other:?}"),
        }
    }

    #[test]
    fn test_typing_and_enter() {
        let mut text = Text::new();
        type_str(&mut text, "hi there");
        assert_eq!(text.content(), "hi there");
        let decision = decided(text.handle_key(Key::Enter).unwrap());
        assert_eq!(decision.value, "hi there");
        assert_eq!(decision.display, "hi there");
    }

    #[test]
    fn test_empty_uses_default() {
        let mut text = Text::new().with_default("anon");
        let decision = decided(text.handle_key(Key::Enter).unwrap());
        assert_eq!(decision.value, "anon");
    }

    #[test]
    fn test_backspace() {
        let mut text = Text::new();
        assert_eq!(text.handle_key(Key::Backspace).unwrap(), Transition::Alert);
        type_str(&mut text, "ab");
        assert_eq!(text.handle_key(Key::Backspace).unwrap(), Transition::Continue);
        assert_eq!(text.content(), "a");
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        let mut text = Text::new();
        type_str(&mut text, "über");
        text.handle_key(Key::Backspace).unwrap();
        text.handle_key(Key::Backspace).unwrap();
        text.handle_key(Key::Backspace).unwrap();
        assert_eq!(text.content(), "ü");
    }

    #[test]
    fn test_arrows_alert() {
        let mut text = Text::new();
        for key in [Key::Up, Key::Down, Key::PageUp, Key::PageDown] {
            assert_eq!(text.handle_key(key).unwrap(), Transition::Alert);
        }
    }

    #[test]
    fn test_filter_rejects_characters() {
        let mut text = Text::new().with_filter(|c| c.is_ascii_alphabetic());
        assert_eq!(text.handle_key(Key::Char('7')).unwrap(), Transition::Alert);
        assert_eq!(text.handle_key(Key::Char('a')).unwrap(), Transition::Continue);
        assert_eq!(text.content(), "a");
    }

    #[test]
    fn test_toggle_hide_only_when_hideable() {
        let mut plain = Text::new();
        assert_eq!(plain.handle_key(Key::ToggleHide).unwrap(), Transition::Alert);

        let mut secret = Text::new().with_hide(true);
        assert!(secret.is_hidden());
        secret.handle_key(Key::ToggleHide).unwrap();
        assert!(!secret.is_hidden());
        assert_eq!(
            secret.widgets()[1],
            Widget::navigation([("CTRL + H", "hide text")])
        );
    }

    #[test]
    fn test_hidden_display_is_masked() {
        let mut text = Text::new().with_hide(true);
        type_str(&mut text, "pw1");
        // Revealing does not change how the answer is shown
        text.handle_key(Key::ToggleHide).unwrap();
        let decision = decided(text.handle_key(Key::Enter).unwrap());
        assert_eq!(decision.value, "pw1");
        assert_eq!(decision.display, "***");
    }

    #[test]
    fn test_hidden_default_is_not_shown() {
        let mut text = Text::new().with_hide(true).with_default("secret");
        let decision = decided(text.handle_key(Key::Enter).unwrap());
        assert_eq!(decision.value, "secret");
        assert_eq!(decision.display, "");
    }

    #[test]
    fn test_double_enter() {
        let mut text = Text::new().with_double_enter(true);
        type_str(&mut text, "a");
        assert_eq!(text.handle_key(Key::Enter).unwrap(), Transition::Continue);
        // Any other key in between clears the pending ENTER
        type_str(&mut text, "b");
        assert_eq!(text.handle_key(Key::Enter).unwrap(), Transition::Continue);
        let decision = decided(text.handle_key(Key::Enter).unwrap());
        assert_eq!(decision.value, "ab");
    }

    #[test]
    fn test_space_is_printable() {
        let mut text = Text::new();
        text.handle_key(Key::Space).unwrap();
        assert_eq!(text.content(), " ");
    }
}
