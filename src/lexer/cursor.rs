//! Cursor position management for the scanner.
//!
//! This module provides methods for inspecting and advancing the scanner's
//! position within the source text. All methods operate on code points, so
//! multi-byte UTF-8 sequences advance by their full width.

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Returns `true` if the end of input has been reached.
    pub(super) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consumes and returns the next code point.
    ///
    /// Returns `None` at the end of input.
    pub(super) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// Returns the next code point without consuming it.
    pub(super) fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Returns the code point after the next one without consuming anything.
    pub(super) fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes the next code point only if it equals `expected`.
    ///
    /// Returns `true` if the code point was consumed.
    pub(super) fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }
}
