//! Main entry point for the pathwise CLI.
//!
//! This is the command-line interface for the pathwise path engine. It
//! provides commands for string-only path manipulation:
//! - `parse`: Parse a path and show its components
//! - `join`: Join a base path with fragments
//! - `safe-join`: Join a relative fragment, refusing escapes
//! - `relative`: Show a path relative to an ancestor
//! - `matches`: Test a path against a glob pattern
//! - `ancestors`: List a path's ancestors

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = pathwise::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        platform: cli.platform,
        output: cli.output,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Parse(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::SafeJoin(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Matches(cmd) => cmd.execute(&global),
        cli::Command::Ancestors(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
