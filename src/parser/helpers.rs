//! Parser helper methods for token navigation and error recovery.

use super::Parser;
use super::error::ParseError;
use crate::token::{Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// Safe to call at any time: past-the-end positions clamp to the final
    /// `Eof` token.
    pub(super) fn current(&self) -> &Token {
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns a reference to the most recently consumed token.
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Advances to the next token. Does nothing at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// Returns `true` if the token was consumed.
    pub(super) fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it has any of the given kinds.
    pub(super) fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.match_kind(kind) {
                return true;
            }
        }
        false
    }

    /// Expects the current token to have the given kind and consumes it.
    ///
    /// Returns the consumed token. On mismatch returns an error located at
    /// the current token, which sends the caller into panic mode.
    pub(super) fn consume(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(self.previous().clone())
        } else {
            Err(ParseError::at_token(self.current(), message))
        }
    }

    /// Records a non-fatal error without entering panic mode.
    ///
    /// Used where the parser understands the source well enough to keep
    /// going in place: invalid assignment targets, the 255-argument and
    /// 255-parameter limits, and misplaced `break`/`return`.
    pub(super) fn report(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// The boundary is a just-consumed `;` or an upcoming keyword that
    /// starts a statement. Called after a parse error so that subsequent
    /// declarations can still be checked.
    pub(super) fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.current_kind() {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => self.advance(),
            }
        }
    }
}
