//! Parse error type.

use crate::token::{Token, TokenKind};

/// An error that occurred during parsing.
///
/// The offending token's line and lexeme are captured at construction so
/// the error stays printable after the token stream is gone. The `Display`
/// impl renders the diagnostic line the driver prints.
///
/// # See Also
///
/// * [`crate::lexer::ScanError`] - Similar error type for lexical errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// A human-readable description of the error.
    pub message: String,
    /// The 1-based line of the offending token.
    pub line: usize,
    /// The lexeme of the offending token. Empty for end of input.
    pub lexeme: String,
    /// Whether the offending token was the end of input.
    pub at_end: bool,
}

impl ParseError {
    /// Creates an error located at the given token.
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
            line: token.line,
            lexeme: token.lexeme.clone(),
            at_end: token.kind == TokenKind::Eof,
        }
    }

    /// Creates an internal-bug error located at the given token.
    ///
    /// Used for states the grammar should make unreachable, such as a
    /// number token without a literal value.
    pub fn internal(token: &Token, detail: &str) -> Self {
        ParseError::at_token(
            token,
            format!("Internal parser error: {detail}. This is an interpreter bug."),
        )
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.at_end {
            write!(f, "[line {}] Error at end: {}", self.line, self.message)
        } else {
            write!(
                f,
                "[line {}] Error at '{}': {}",
                self.line, self.lexeme, self.message
            )
        }
    }
}

impl std::error::Error for ParseError {}
