//! The golox tree-walking interpreter library.
//!
//! This library provides the core components of the golox interpreter:
//! lexical analysis, parsing, and evaluation of a small dynamically-typed
//! language in the Lox family.
//!
//! # Modules
//!
//! - [`token`] - Token types and line tracking
//! - [`lexer`] - Lexical analysis (scanning)
//! - [`parser`] - Recursive descent parser with panic-mode recovery
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`printer`] - Fully-parenthesized rendering of expressions
//! - [`interpreter`] - The tree-walking evaluator
//!
//! # Example
//!
//! ```
//! use golox::interpreter::Interpreter;
//! use golox::lexer::Scanner;
//! use golox::parser::Parser;
//!
//! let source = r#"
//!     fun greeting(name) { return "hello " + name; }
//!     var message = greeting("world");
//! "#;
//!
//! // Lexical analysis
//! let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
//! assert!(scan_errors.is_empty());
//!
//! // Parsing
//! let (statements, parse_errors) = Parser::new(tokens).parse();
//! assert!(parse_errors.is_empty());
//!
//! // Evaluation
//! let mut interpreter = Interpreter::new();
//! interpreter.interpret(&statements).expect("Runtime error");
//! ```

pub mod ast;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
