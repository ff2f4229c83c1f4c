//! Token recognition and reading for the scanner.
//!
//! This module provides the per-token dispatch and the readers for the
//! multi-character token forms: strings, numbers, and identifiers.

use super::Scanner;
use super::error::ScanError;
use crate::token::{Literal, TokenKind};

/// Returns the keyword kind for an identifier, if it is one.
///
/// The table is fixed and case-sensitive.
fn keyword(identifier: &str) -> Option<TokenKind> {
    let kind = match identifier {
        "and" => TokenKind::And,
        "break" => TokenKind::Break,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}

/// Returns `true` for code points that may start an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` for code points that may continue an identifier.
fn is_identifier_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Scanner<'a> {
    /// Scans a single token starting at the current position.
    ///
    /// Emits at most one token. Whitespace, newlines, comments, and
    /// erroneous characters emit none.
    pub(super) fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '/' => {
                if self.match_char('/') {
                    // A comment runs to the end of the line.
                    while self.peek() != Some('\n') && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.read_string(),
            _ if c.is_ascii_digit() => self.read_number(),
            _ if is_identifier_start(c) => self.read_identifier(),
            _ => self
                .errors
                .push(ScanError::unexpected_character(self.line)),
        }
    }

    /// Reads a string literal. The opening quote has been consumed.
    ///
    /// Strings may span multiple lines and contain arbitrary code points;
    /// there are no escape sequences. The token's line is the line of the
    /// opening quote, and an unterminated string is reported there too.
    fn read_string(&mut self) {
        let opening_line = self.line;

        while self.peek() != Some('"') && !self.is_at_end() {
            if self.peek() == Some('\n') {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.errors
                .push(ScanError::unterminated_string(opening_line));
            return;
        }

        // The closing quote.
        self.advance();

        // Both quotes are one byte wide, so this slices off exactly them.
        let value = self.source[self.start + 1..self.current - 1].to_string();
        self.push_token(TokenKind::String, Some(Literal::Str(value)), opening_line);
    }

    /// Reads a number literal. The first digit has been consumed.
    ///
    /// A fractional part is consumed only when the dot is followed by a
    /// digit, so `3.sqrt` scans as `3` `.` `sqrt`.
    fn read_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // A digit sequence with an optional fraction always parses.
        let value = self.source[self.start..self.current]
            .parse::<f64>()
            .unwrap_or_default();
        let line = self.line;
        self.push_token(TokenKind::Number, Some(Literal::Number(value)), line);
    }

    /// Reads an identifier or keyword. The first code point has been consumed.
    fn read_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_continue) {
            self.advance();
        }

        let kind = keyword(&self.source[self.start..self.current])
            .unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}
