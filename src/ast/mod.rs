//! Abstract Syntax Tree definitions for golox programs.
//!
//! This module defines the data structures that represent parsed programs.
//! The AST is produced by the [`crate::parser`] and walked directly by the
//! [`crate::interpreter`].
//!
//! # Structure
//!
//! A program is a `Vec<Stmt>`. Statements contain expressions, and both are
//! plain tagged enums matched structurally by the evaluator; there is no
//! visitor indirection. Operator and name tokens are retained inside the
//! nodes so runtime errors can be attributed to a source line.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes
//! - [`stmt`] - Statement nodes and function declarations
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::printer`] - Renders expressions in fully-parenthesized form
//! * [`crate::interpreter`] - Evaluates the AST

mod expr;
mod stmt;

pub use expr::{Expr, LiteralValue};
pub use stmt::{FunctionDecl, Stmt};
