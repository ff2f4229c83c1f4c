//! Diagnostic reporting.
//!
//! Every diagnostic goes to stderr in the error type's `Display` form:
//!
//! - Scan errors: `[line N] Error: <message>`
//! - Parse errors: `[line N] Error at '<lexeme>': <message>`, or
//!   `[line N] Error at end: <message>` at end of input
//! - Runtime errors: `<message>` followed by `[line N]` on its own line
//!
//! Program output (`print` and the prompt itself) stays on stdout, so
//! script output remains pipeable even when diagnostics interleave.

use std::fmt::Display;

/// Prints one diagnostic to stderr.
pub(crate) fn report(error: &impl Display) {
    eprintln!("{error}");
}

/// Prints the usage line shown for a bad command line.
pub(crate) fn usage() {
    eprintln!("Usage: golox[script]");
}

/// Reports a source input that could not be read.
pub(crate) fn report_read_failure(path: &str, error: &std::io::Error) {
    eprintln!("Error: failed to read '{path}': {error}");
}
