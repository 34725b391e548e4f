//! # Keys
//!
//! The closed key alphabet that prompts and the driver compare against, plus the
//! two ways of producing it: crossterm key events and scripted key strings.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// One normalized key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Backspace,
    Up,
    Down,
    PageUp,
    PageDown,
    Space,
    /// CTRL+C, always ends the process.
    Interrupt,
    /// CTRL+D, ends cancelable prompts.
    Cancel,
    /// CTRL+H, flips text masking.
    ToggleHide,
    /// Any other printable character, digits included.
    Char(char),
}

impl Key {
    /// The character this key would insert into a text buffer.
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            Self::Space => Some(' '),
            _ => None,
        }
    }

    /// The decimal digit this key stands for.
    #[allow(clippy::cast_possible_truncation)]
    pub fn digit(self) -> Option<u8> {
        match self {
            Self::Char(c) => c.to_digit(10).map(|d| d as u8),
            _ => None,
        }
    }

    /// Maps a crossterm key event into the alphabet.
    ///
    /// Returns `None` for releases and for keys prompts never look at
    /// (function keys, left/right, escape, unbound control chords).
    pub fn from_event(event: KeyEvent) -> Option<Self> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

        match event.code {
            KeyCode::Char('c') if ctrl => Some(Self::Interrupt),
            KeyCode::Char('d') if ctrl => Some(Self::Cancel),
            KeyCode::Char('h') if ctrl => Some(Self::ToggleHide),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(' ') => Some(Self::Space),
            KeyCode::Char(c) => Some(Self::Char(c)),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Up => Some(Self::Up),
            KeyCode::Down => Some(Self::Down),
            KeyCode::PageUp => Some(Self::PageUp),
            KeyCode::PageDown => Some(Self::PageDown),
            _ => None,
        }
    }

    /// Parses a key script into keys.
    ///
    /// Characters map one to one, with these control characters recognized:
    /// `\n`/`\r` ENTER, `\x7f` BACKSPACE, `\x08` CTRL+H, `\x03` CTRL+C, `\x04` CTRL+D.
    /// The ANSI sequences `ESC[A`, `ESC[B`, `ESC[5~` and `ESC[6~` are arrows and paging.
    /// Any other `ESC[` sequence (up to its first character) and a lone ESC produce no key.
    pub fn parse_script(script: &str) -> Vec<Self> {
        let mut keys = Vec::new();
        let mut chars = script.chars().peekable();

        while let Some(c) = chars.next() {
            let key = match c {
                '\n' | '\r' => Self::Enter,
                '\x7f' => Self::Backspace,
                '\x08' => Self::ToggleHide,
                '\x03' => Self::Interrupt,
                '\x04' => Self::Cancel,
                ' ' => Self::Space,
                '\x1b' if chars.peek() == Some(&'[') => {
                    chars.next();
                    match chars.next() {
                        Some('A') => Self::Up,
                        Some('B') => Self::Down,
                        Some('5') if chars.next_if_eq(&'~').is_some() => Self::PageUp,
                        Some('6') if chars.next_if_eq(&'~').is_some() => Self::PageDown,
                        // Unknown sequences are dropped like unmapped terminal keys
                        _ => continue,
                    }
                }
                '\x1b' => continue,
                other => Self::Char(other),
            };
            keys.push(key);
        }

        keys
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => f.write_str("ENTER"),
            Self::Backspace => f.write_str("BACKSPACE"),
            Self::Up => f.write_str("UP"),
            Self::Down => f.write_str("DOWN"),
            Self::PageUp => f.write_str("PAGE_UP"),
            Self::PageDown => f.write_str("PAGE_DOWN"),
            Self::Space => f.write_str("SPACE"),
            Self::Interrupt => f.write_str("CTRL+C"),
            Self::Cancel => f.write_str("CTRL+D"),
            Self::ToggleHide => f.write_str("CTRL+H"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_parse_plain_characters() {
        assert_eq!(
            Key::parse_script("y1 "),
            vec![Key::Char('y'), Key::Char('1'), Key::Space]
        );
    }

    #[test]
    fn test_parse_control_characters() {
        assert_eq!(
            Key::parse_script("\n\r\x7f\x08\x03\x04"),
            vec![
                Key::Enter,
                Key::Enter,
                Key::Backspace,
                Key::ToggleHide,
                Key::Interrupt,
                Key::Cancel,
            ]
        );
    }

    #[test]
    fn test_parse_escape_sequences() {
        assert_eq!(
            Key::parse_script("\x1b[A\x1b[B\x1b[5~\x1b[6~"),
            vec![Key::Up, Key::Down, Key::PageUp, Key::PageDown]
        );
    }

    #[test]
    fn test_parse_unknown_escape_sequence() {
        assert_eq!(Key::parse_script("a\x1b[Zb"), vec![Key::Char('a'), Key::Char('b')]);
        assert!(Key::parse_script("\x1b[").is_empty());
    }

    #[test]
    fn test_parse_lone_escape_is_dropped() {
        assert_eq!(Key::parse_script("a\x1bb"), vec![Key::Char('a'), Key::Char('b')]);
        assert!(Key::parse_script("\x1b").is_empty());
        assert_eq!(Key::parse_script("\x1b\x1b[A"), vec![Key::Up]);
    }

    #[test]
    fn test_from_event_control_chords() {
        assert_eq!(
            Key::from_event(event(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Key::Interrupt)
        );
        assert_eq!(
            Key::from_event(event(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            Some(Key::Cancel)
        );
        assert_eq!(
            Key::from_event(event(KeyCode::Char('h'), KeyModifiers::CONTROL)),
            Some(Key::ToggleHide)
        );
        assert_eq!(
            Key::from_event(event(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_from_event_plain_keys() {
        assert_eq!(
            Key::from_event(event(KeyCode::Char('Y'), KeyModifiers::SHIFT)),
            Some(Key::Char('Y'))
        );
        assert_eq!(
            Key::from_event(event(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Key::Space)
        );
        assert_eq!(
            Key::from_event(event(KeyCode::Enter, KeyModifiers::NONE)),
            Some(Key::Enter)
        );
        assert_eq!(Key::from_event(event(KeyCode::Left, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_from_event_ignores_release() {
        let mut release = event(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(Key::from_event(release), None);
    }

    #[test]
    fn test_digit() {
        assert_eq!(Key::Char('7').digit(), Some(7));
        assert_eq!(Key::Char('x').digit(), None);
        assert_eq!(Key::Enter.digit(), None);
    }
}
