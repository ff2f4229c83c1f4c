//! Tree-walking evaluator for golox programs.
//!
//! This module provides the [`Interpreter`] struct which executes a parsed
//! statement list directly against the runtime [`Value`] universe.
//!
//! # Overview
//!
//! The evaluator is a recursive walk over the AST enums: each statement
//! produces effects, each expression produces a value. Name resolution goes
//! through a chain of shared [`Environment`]s; function values capture the
//! environment of their declaration site, which is all a closure is.
//!
//! `break` and `return` are not errors. Statement execution returns a
//! [`Flow`] signal that blocks propagate, loops and call frames consume,
//! and everything else ignores. Keeping them out of the error channel keeps
//! the environment-restore logic in one place and makes a signal escaping
//! its legal scope detectable as an interpreter bug.
//!
//! A [`RuntimeError`] aborts the program being evaluated; the driver turns
//! it into exit code 70.
//!
//! # Examples
//!
//! ```
//! use golox::interpreter::Interpreter;
//! use golox::lexer::Scanner;
//! use golox::parser::Parser;
//!
//! let (tokens, _) = Scanner::new("var a = 1 + 2;").scan_tokens();
//! let (statements, _) = Parser::new(tokens).parse();
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.interpret(&statements).unwrap();
//! ```
//!
//! # Module Structure
//!
//! - [`value`] - The runtime value universe
//! - [`env`] - Lexically nested environments
//! - [`callable`] - User functions and the calling interface
//! - `builtins` - Native bindings (`clock`)
//! - [`error`] - Runtime error type
//! - `expr` - Expression evaluation
//! - `stmt` - Statement execution
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the statements executed here

mod builtins;
mod callable;
mod env;
mod error;
mod expr;
mod stmt;
mod value;

#[cfg(test)]
mod tests;

pub use callable::{Callable, LoxFunction, NativeFunction};
pub use env::Environment;
pub use error::RuntimeError;
pub use value::Value;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Stmt;
use crate::token::Token;

/// The result of executing a statement.
///
/// `Break` and `Return` unwind through intervening blocks until a loop or
/// call frame consumes them. They carry the keyword token so that a signal
/// escaping every legal scope can still be reported with a source line.
#[derive(Debug)]
pub(crate) enum Flow {
    /// Execution fell off the end of the statement.
    Normal,
    /// A `break` is unwinding to the nearest enclosing loop.
    Break(Token),
    /// A `return` is unwinding to the nearest enclosing call frame,
    /// carrying the returned value.
    Return(Token, Value),
}

/// A tree-walking interpreter.
///
/// The interpreter owns the global environment and tracks the environment
/// of the scope currently executing. It is reused across REPL lines so that
/// bindings persist between them.
pub struct Interpreter {
    /// The global root environment.
    globals: Rc<RefCell<Environment>>,
    /// The environment of the currently executing scope.
    environment: Rc<RefCell<Environment>>,
}

impl Interpreter {
    /// Creates an interpreter with a fresh global environment holding the
    /// native bindings.
    pub fn new() -> Self {
        let mut root = Environment::new();
        builtins::install(&mut root);

        let globals = Rc::new(RefCell::new(root));
        Interpreter {
            environment: Rc::clone(&globals),
            globals,
        }
    }

    /// Executes a statement list in order.
    ///
    /// The first runtime error aborts the remaining statements. A `break`
    /// or `return` signal reaching the top level would mean the parser's
    /// placement rules were violated; it is reported as an internal error.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            match self.execute(statement)? {
                Flow::Normal => {}
                Flow::Break(token) => {
                    return Err(RuntimeError::internal(
                        &token,
                        "'break' escaped every enclosing loop",
                    ));
                }
                Flow::Return(keyword, _) => {
                    return Err(RuntimeError::internal(
                        &keyword,
                        "'return' escaped every call frame",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Executes statements in the given environment, restoring the previous
    /// environment afterwards on every path, including errors and signals.
    pub(crate) fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<Flow, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);
        let result = self.execute_all(statements);
        self.environment = previous;
        result
    }

    /// Executes statements in order in the current environment, stopping at
    /// the first signal or error.
    fn execute_all(&mut self, statements: &[Stmt]) -> Result<Flow, RuntimeError> {
        for statement in statements {
            match self.execute(statement)? {
                Flow::Normal => {}
                signal => return Ok(signal),
            }
        }
        Ok(Flow::Normal)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}
