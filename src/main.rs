//! The golox command-line interpreter.
//!
//! This binary runs a script file, or a line-at-a-time interactive prompt
//! when invoked without arguments, and delegates execution to the driver
//! module.

use clap::Parser;
use clap::error::ErrorKind;

mod diagnostics;
mod driver;

/// Command-line interface for the golox interpreter.
#[derive(Parser)]
#[command(name = "golox")]
#[command(about = "The golox tree-walking interpreter", long_about = None)]
struct Cli {
    /// The script file to execute (e.g., `program.lox`).
    /// Starts the interactive prompt when omitted.
    script: Option<String>,
}

/// Entry point for the golox interpreter.
fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if error.kind() == ErrorKind::DisplayHelp => error.exit(),
        Err(_) => {
            diagnostics::usage();
            std::process::exit(64);
        }
    };

    let exit_code = match cli.script {
        Some(path) => driver::run_file(&path),
        None => driver::run_prompt(),
    };
    std::process::exit(exit_code);
}
