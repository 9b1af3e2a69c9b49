//! Utility functions for CLI operations.
//!
//! This module provides the shared state and helpers used across CLI
//! commands: global options, factory construction and output rendering.

use crate::cli::{OutputFormat, PlatformArg};
use crate::error::CliError;
use pathwise::{PathFactory, Platform, PurePath};
use serde::Serialize;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)] // Verbosity fields are consumed by main.rs when wiring the logger
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Selected path grammar, if overridden.
    pub platform: Option<PlatformArg>,

    /// Output format.
    pub output: OutputFormat,
}

impl GlobalOptions {
    /// Resolve the platform: explicit flag or the host default.
    pub fn platform(&self) -> Platform {
        self.platform.map_or_else(Platform::host, Into::into)
    }

    /// Build a factory for the resolved platform.
    pub fn factory(&self) -> PathFactory {
        PathFactory::new(self.platform())
    }
}

/// Serializable component view of a path value for `--output json`.
#[derive(Serialize)]
pub struct PathReport {
    /// Platform the path was parsed for.
    pub platform: String,
    /// Canonical string form.
    pub path: String,
    /// Drive component.
    pub drive: String,
    /// Root component.
    pub root: String,
    /// Dirname component.
    pub dirname: String,
    /// Basename component.
    pub basename: String,
    /// Extension component.
    pub extension: String,
    /// Anchor (drive + root).
    pub anchor: String,
    /// Filename (basename + extension).
    pub filename: String,
    /// Parts sequence.
    pub parts: Vec<String>,
    /// Whether the path is rooted.
    pub absolute: bool,
    /// Whether the filename is a reserved device name.
    pub reserved: bool,
}

impl PathReport {
    /// Build a report from a path value.
    pub fn new(path: &PurePath) -> Self {
        Self {
            platform: path.platform().to_string(),
            path: path.to_string(),
            drive: path.drive().to_string(),
            root: path.root().to_string(),
            dirname: path.dirname().to_string(),
            basename: path.basename().to_string(),
            extension: path.extension().to_string(),
            anchor: path.anchor(),
            filename: path.filename(),
            parts: path.parts().to_vec(),
            absolute: path.is_absolute(),
            reserved: path.is_reserved(),
        }
    }
}

/// Print one resulting path in the requested format.
pub fn emit_path(global: &GlobalOptions, path: &PurePath) -> Result<(), CliError> {
    match global.output {
        OutputFormat::Text => println!("{path}"),
        OutputFormat::Json => {
            let json = serde_json::to_string(&PathReport::new(path))
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            println!("{json}");
        }
    }
    Ok(())
}
