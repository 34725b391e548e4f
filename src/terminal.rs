//! # Terminal
//!
//! Raw mode handling, frame erasing and terminal size lookup.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use crossterm::{
    cursor::{MoveToColumn, MoveUp},
    queue,
    terminal::{self, Clear, ClearType},
};

/// Keeps the terminal in raw mode until dropped.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        log::trace!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("Failed to restore terminal mode: {err}");
        } else {
            log::trace!("Raw mode disabled");
        }
    }
}

/// Terminal size in columns and rows, or `fallback` when it cannot be queried.
pub fn size_or(fallback: (u16, u16)) -> (u16, u16) {
    match terminal::size() {
        Ok((0, _) | (_, 0)) | Err(_) => fallback,
        Ok(size) => size,
    }
}

/// Erases the `lines` lines written above the cursor.
pub fn erase_lines<W: Write>(out: &mut W, lines: usize) -> io::Result<()> {
    for _ in 0..lines {
        queue!(out, MoveUp(1), Clear(ClearType::CurrentLine))?;
    }
    queue!(out, MoveToColumn(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erase_nothing_only_moves_to_column() {
        let mut out = Vec::new();
        erase_lines(&mut out, 0).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[1G");
    }

    #[test]
    fn test_erase_lines_repeats_per_line() {
        let mut out = Vec::new();
        erase_lines(&mut out, 2).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.matches("\x1b[2K").count(), 2);
        assert_eq!(written.matches("\x1b[1A").count(), 2);
    }
}
