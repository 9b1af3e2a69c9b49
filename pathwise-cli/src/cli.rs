//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AncestorsCommand, CompletionsCommand, JoinCommand, MatchesCommand, ParseCommand,
    RelativeCommand, SafeJoinCommand,
};
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line tool for pure path parsing and manipulation.
#[derive(Parser)]
#[command(name = "pathwise")]
#[command(version, about = "Parse and manipulate paths without touching the filesystem", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar to use (defaults to the host platform)
    #[arg(
        long,
        value_enum,
        value_name = "PLATFORM",
        global = true,
        env = "PATHWISE_PLATFORM"
    )]
    pub platform: Option<PlatformArg>,

    /// Output format
    #[arg(
        long,
        value_enum,
        value_name = "FORMAT",
        global = true,
        env = "PATHWISE_OUTPUT",
        default_value = "text"
    )]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Parse a path and show its components
    Parse(ParseCommand),

    /// Join a base path with fragments
    Join(JoinCommand),

    /// Join a relative fragment, refusing traversal out of the base
    SafeJoin(SafeJoinCommand),

    /// Show a path relative to an ancestor
    Relative(RelativeCommand),

    /// Test a path against a glob pattern
    Matches(MatchesCommand),

    /// List a path's ancestors, most specific first
    Ancestors(AncestorsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// Path grammar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// POSIX rules: `/` separator, case-sensitive.
    Posix,
    /// Windows rules: `\` separator, drives, case-insensitive.
    Windows,
}

impl From<PlatformArg> for pathwise::Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Posix => Self::Posix,
            PlatformArg::Windows => Self::Windows,
        }
    }
}

/// Output format selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line.
    Text,
    /// JSON objects for scripting.
    Json,
}
