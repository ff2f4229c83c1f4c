//! Unit tests for the parser.

use super::*;
use crate::ast::{Expr, LiteralValue, Stmt};
use crate::lexer::Scanner;
use crate::token::TokenKind;

/// Helper that scans and parses input, returning statements and errors.
pub(super) fn parse_source(input: &str) -> (Vec<Stmt>, Vec<ParseError>) {
    let (tokens, scan_errors) = Scanner::new(input).scan_tokens();
    assert!(
        scan_errors.is_empty(),
        "Scanning {:?} reported unexpected errors: {:?}",
        input,
        scan_errors
    );
    Parser::new(tokens).parse()
}

/// Helper that parses input expected to be error-free.
pub(super) fn parse_program(input: &str) -> Vec<Stmt> {
    let (statements, errors) = parse_source(input);
    assert!(
        errors.is_empty(),
        "Parsing {:?} reported unexpected errors: {:?}",
        input,
        errors
    );
    statements
}

/// Helper that parses input expected to fail and returns the errors.
pub(super) fn parse_errors(input: &str) -> Vec<ParseError> {
    let (_, errors) = parse_source(input);
    assert!(
        !errors.is_empty(),
        "Expected parsing {:?} to report errors, but it did not",
        input
    );
    errors
}

/// Helper that parses a single expression statement and returns the
/// expression.
pub(super) fn parse_expr(input: &str) -> Expr {
    let statements = parse_program(&format!("{input};"));
    assert_eq!(statements.len(), 1);
    match statements.into_iter().next() {
        Some(Stmt::Expression(expr)) => expr,
        other => panic!("Expected an expression statement, got {:?}", other),
    }
}

mod control_flow;
