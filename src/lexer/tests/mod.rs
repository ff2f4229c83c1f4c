//! Unit tests for the scanner.

use super::*;
use crate::token::{Literal, Token, TokenKind};

/// Helper that scans input expected to be error-free and returns the tokens.
pub(super) fn scan(input: &str) -> Vec<Token> {
    let (tokens, errors) = Scanner::new(input).scan_tokens();
    assert!(
        errors.is_empty(),
        "Scanning {:?} reported unexpected errors: {:?}",
        input,
        errors
    );
    tokens
}

/// Helper that scans input and returns only the token kinds.
pub(super) fn scan_kinds(input: &str) -> Vec<TokenKind> {
    scan(input).into_iter().map(|t| t.kind).collect()
}

/// Helper that scans input expected to fail and returns the errors.
pub(super) fn scan_errors(input: &str) -> Vec<ScanError> {
    let (_, errors) = Scanner::new(input).scan_tokens();
    assert!(
        !errors.is_empty(),
        "Expected scanning {:?} to report errors, but it did not",
        input
    );
    errors
}

mod lines;
mod operators;
