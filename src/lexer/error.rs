//! Lexical analysis error type.
//!
//! This module defines [`ScanError`], which represents errors collected
//! during tokenization. Its `Display` impl renders the diagnostic line the
//! driver prints, so reporting a scan error is just printing it.
//!
//! # See Also
//!
//! * [`crate::parser::ParseError`] - Similar error type for syntax errors

/// An error that occurred during lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    /// A human-readable description of the error.
    pub message: String,
    /// The 1-based line where the error occurred.
    pub line: usize,
}

impl ScanError {
    /// Creates a new error at the given line.
    pub fn new(message: impl Into<String>, line: usize) -> Self {
        ScanError {
            message: message.into(),
            line,
        }
    }

    /// Creates an "Unexpected character" error.
    pub fn unexpected_character(line: usize) -> Self {
        ScanError::new("Unexpected character", line)
    }

    /// Creates an "Unterminated string" error.
    ///
    /// `line` is the line of the opening quote, not the line scanning
    /// stopped on.
    pub fn unterminated_string(line: usize) -> Self {
        ScanError::new("Unterminated string", line)
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

impl std::error::Error for ScanError {}
