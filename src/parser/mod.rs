//! Parser for the golox language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into a list of statements.
//!
//! # Overview
//!
//! The parser is a classic recursive descent parser with panic-mode error
//! recovery: when a statement fails to parse, the error is recorded, tokens
//! are discarded up to the next statement boundary, and parsing resumes.
//! One bad statement therefore does not hide errors in the rest of the
//! program. A handful of errors (invalid assignment targets, the 255
//! argument/parameter limits, misplaced `break`/`return`) are recorded
//! without entering panic mode at all, because the parser can continue in
//! place.
//!
//! # Grammar
//!
//! ```text
//! program    → declaration* EOF
//! declaration→ funDecl | varDecl | statement
//! funDecl    → "fun" IDENT "(" parameters? ")" block
//! varDecl    → "var" IDENT ( "=" expression )? ";"
//! statement  → printStmt | ifStmt | whileStmt | forStmt
//!            | returnStmt | breakStmt | block | exprStmt
//! block      → "{" declaration* "}"
//! printStmt  → "print" expression ";"
//! ifStmt     → "if" "(" expression ")" statement ( "else" statement )?
//! whileStmt  → "while" "(" expression ")" statement
//! forStmt    → "for" "(" ( varDecl | exprStmt | ";" )
//!                        expression? ";" expression? ")" statement
//! returnStmt → "return" expression? ";"
//! breakStmt  → "break" ";"
//! exprStmt   → expression ";"
//!
//! expression → assignment
//! assignment → IDENT "=" assignment | logic_or
//! logic_or   → logic_and ( "or" logic_and )*
//! logic_and  → equality  ( "and" equality )*
//! equality   → comparison ( ( "!=" | "==" ) comparison )*
//! comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term       → factor ( ( "-" | "+" ) factor )*
//! factor     → unary  ( ( "/" | "*" ) unary  )*
//! unary      → ( "!" | "-" ) unary | call
//! call       → primary ( "(" arguments? ")" )*
//! arguments  → expression ( "," expression )*
//! primary    → "true" | "false" | "nil" | NUMBER | STRING
//!            | IDENT | "(" expression ")"
//! ```
//!
//! `for` loops have no AST node of their own; they are desugared into an
//! equivalent `while` wrapped in blocks, see [`Parser`]'s statement parsing.
//!
//! # Examples
//!
//! ```
//! use golox::lexer::Scanner;
//! use golox::parser::Parser;
//!
//! let (tokens, _) = Scanner::new("print 1 + 2;").scan_tokens();
//! let (statements, errors) = Parser::new(tokens).parse();
//!
//! assert!(errors.is_empty());
//! assert_eq!(statements.len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error type
//! - `helpers` - Token navigation and synchronization
//! - `stmt` - Statement and declaration parsing
//! - `expr` - Expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser
//! * [`crate::interpreter`] - Evaluates the AST

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::Stmt;
use crate::token::Token;

/// A recursive descent parser for the golox language.
///
/// The parser tracks its position in the token stream plus two lexical
/// depth counters: `loop_depth` validates `break` placement and `fun_depth`
/// validates `return` placement. A function body resets the loop depth, so
/// a `break` inside a function nested in a loop is still rejected.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
    /// Errors recorded so far.
    errors: Vec<ParseError>,
    /// Number of enclosing loops at the current parse position.
    loop_depth: usize,
    /// Number of enclosing function bodies at the current parse position.
    fun_depth: usize,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    /// Panics if the token list is empty. The scanner always produces at
    /// least an `Eof` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "Token list must not be empty");
        Parser {
            tokens,
            pos: 0,
            errors: Vec::new(),
            loop_depth: 0,
            fun_depth: 0,
        }
    }

    /// Parses the entire token stream into statements.
    ///
    /// Returns the statements that parsed successfully together with every
    /// error encountered. A non-empty error vector means the program must
    /// not be evaluated; the statement list is then only meaningful for
    /// tooling that tolerates partial programs.
    pub fn parse(mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        (statements, self.errors)
    }

    /// Parses one declaration, recovering at a statement boundary on error.
    ///
    /// Returns `None` when the declaration failed to parse; the error has
    /// been recorded and the parser has synchronized.
    fn declaration(&mut self) -> Option<Stmt> {
        match self.parse_declaration() {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.errors.push(error);
                self.synchronize();
                None
            }
        }
    }
}
