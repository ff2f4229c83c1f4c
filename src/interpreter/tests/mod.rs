//! Unit tests for the evaluator.

use super::*;
use crate::ast::Stmt;
use crate::lexer::Scanner;
use crate::parser::Parser;
use crate::token::{Token, TokenKind};

/// Helper that parses a program, panicking on scan or parse errors.
pub(super) fn parse(input: &str) -> Vec<Stmt> {
    let (tokens, scan_errors) = Scanner::new(input).scan_tokens();
    assert!(
        scan_errors.is_empty(),
        "Scanning {:?} reported unexpected errors: {:?}",
        input,
        scan_errors
    );
    let (statements, errors) = Parser::new(tokens).parse();
    assert!(
        errors.is_empty(),
        "Parsing {:?} reported unexpected errors: {:?}",
        input,
        errors
    );
    statements
}

/// Helper that runs a program and returns the interpreter for inspection.
pub(super) fn run(input: &str) -> Interpreter {
    let statements = parse(input);
    let mut interpreter = Interpreter::new();
    interpreter
        .interpret(&statements)
        .unwrap_or_else(|e| panic!("Running {:?} failed: {}", input, e));
    interpreter
}

/// Helper that runs a program expected to fail and returns the error.
pub(super) fn run_error(input: &str) -> RuntimeError {
    let statements = parse(input);
    let mut interpreter = Interpreter::new();
    match interpreter.interpret(&statements) {
        Ok(()) => panic!("Expected running {:?} to fail, but it succeeded", input),
        Err(error) => error,
    }
}

/// Helper that evaluates a single expression.
pub(super) fn eval(input: &str) -> Value {
    let statements = parse(&format!("{input};"));
    let expr = match statements.first() {
        Some(Stmt::Expression(expr)) => expr,
        other => panic!("Expected an expression statement, got {:?}", other),
    };
    let mut interpreter = Interpreter::new();
    interpreter
        .evaluate(expr)
        .unwrap_or_else(|e| panic!("Evaluating {:?} failed: {}", input, e))
}

/// Helper that reads a global binding from a finished interpreter.
pub(super) fn global(interpreter: &Interpreter, name: &str) -> Value {
    interpreter
        .globals
        .borrow()
        .get(&Token::new(TokenKind::Identifier, name, None, 1))
        .unwrap_or_else(|e| panic!("Global {:?} missing: {}", name, e))
}

mod scope;
mod vars;
