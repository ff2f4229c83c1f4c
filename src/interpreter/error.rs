//! Runtime error type.

use crate::token::Token;

/// An error raised while evaluating a program.
///
/// Runtime errors abort the program being evaluated. The line comes from
/// the token of the construct that failed, and the `Display` impl renders
/// the two-line diagnostic the driver prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    /// A human-readable description of the error.
    pub message: String,
    /// The 1-based line of the failing construct.
    pub line: usize,
}

impl RuntimeError {
    /// Creates an error attributed to the given token.
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        RuntimeError {
            message: message.into(),
            line: token.line,
        }
    }

    /// Creates an internal-bug error attributed to the given token.
    ///
    /// Used for control-flow signals that escape the scopes the parser
    /// guarantees they stay within.
    pub fn internal(token: &Token, detail: &str) -> Self {
        RuntimeError::new(
            token,
            format!("Internal interpreter error: {detail}. This is an interpreter bug."),
        )
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.line)
    }
}

impl std::error::Error for RuntimeError {}
