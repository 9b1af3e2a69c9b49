//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `parse`: Parse a path and show its components
//! - `join`: Join a base path with fragments
//! - `safe_join`: Join a relative fragment, refusing escapes
//! - `relative`: Show a path relative to an ancestor
//! - `matches`: Test a path against a glob pattern
//! - `ancestors`: List a path's ancestors
//! - `completions`: Generate shell completion scripts

pub mod ancestors;
pub mod completions;
pub mod join;
pub mod matches;
pub mod parse;
pub mod relative;
pub mod safe_join;

pub use ancestors::AncestorsCommand;
pub use completions::CompletionsCommand;
pub use join::JoinCommand;
pub use matches::MatchesCommand;
pub use parse::ParseCommand;
pub use relative::RelativeCommand;
pub use safe_join::SafeJoinCommand;
