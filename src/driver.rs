//! Execution driver.
//!
//! The driver wires the scanner, parser, and interpreter together and owns
//! the two entry points of the binary: running a script file and running
//! the interactive prompt. It also owns the mapping from error categories
//! to process exit codes:
//!
//! - `0` - success (and end of input at the prompt)
//! - `65` - the script had scan or parse errors
//! - `70` - the script raised a runtime error
//! - `74` - the script file (or prompt input) could not be read

use std::io::{self, BufRead, Write};

use golox::interpreter::Interpreter;
use golox::lexer::Scanner;
use golox::parser::Parser;

use crate::diagnostics;

/// What went wrong, if anything, while running one source unit.
struct RunOutcome {
    /// A scan or parse error was reported; evaluation was skipped.
    had_parse_error: bool,
    /// Evaluation started and raised a runtime error.
    had_runtime_error: bool,
}

/// A driver session owning the interpreter and error reporting.
///
/// One session spans a whole file run or a whole prompt session. Prompt
/// lines share the session, which is how bindings persist between lines,
/// while error state is per-run rather than per-session, which is how the
/// prompt stays usable after a bad line.
struct Session {
    interpreter: Interpreter,
}

impl Session {
    fn new() -> Self {
        Session {
            interpreter: Interpreter::new(),
        }
    }

    /// Scans, parses, and evaluates one source unit.
    ///
    /// Every scan and parse error is reported before deciding whether to
    /// evaluate; a program with any front-end error is never evaluated.
    fn run(&mut self, source: &str) -> RunOutcome {
        let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
        for error in &scan_errors {
            diagnostics::report(error);
        }

        let (statements, parse_errors) = Parser::new(tokens).parse();
        for error in &parse_errors {
            diagnostics::report(error);
        }

        if !scan_errors.is_empty() || !parse_errors.is_empty() {
            return RunOutcome {
                had_parse_error: true,
                had_runtime_error: false,
            };
        }

        if let Err(error) = self.interpreter.interpret(&statements) {
            diagnostics::report(&error);
            return RunOutcome {
                had_parse_error: false,
                had_runtime_error: true,
            };
        }

        RunOutcome {
            had_parse_error: false,
            had_runtime_error: false,
        }
    }
}

/// Executes a script file and returns the process exit code.
pub(crate) fn run_file(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            diagnostics::report_read_failure(path, &error);
            return 74;
        }
    };

    let outcome = Session::new().run(&source);
    if outcome.had_parse_error {
        65
    } else if outcome.had_runtime_error {
        70
    } else {
        0
    }
}

/// Runs the interactive prompt until end of input.
///
/// Each line is scanned, parsed, and executed as its own mini-program.
/// Errors of every category are reported and the prompt continues; end of
/// input exits cleanly with code 0.
pub(crate) fn run_prompt() -> i32 {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        // A failed flush only costs the prompt text.
        let _ = io::stdout().flush();

        match lines.next() {
            Some(Ok(line)) => {
                session.run(&line);
            }
            Some(Err(error)) => {
                diagnostics::report_read_failure("<stdin>", &error);
                return 74;
            }
            None => return 0,
        }
    }
}
