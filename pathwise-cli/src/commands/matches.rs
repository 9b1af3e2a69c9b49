//! Command to test a path against a glob pattern.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use serde::Serialize;

/// Result record for `--output json`.
#[derive(Serialize)]
struct MatchReport {
    path: String,
    pattern: String,
    matched: bool,
}

/// Test a path against a restricted glob pattern (`*` and `?`).
///
/// Exit code 0 when the path matches, 1 when it does not.
#[derive(Args)]
pub struct MatchesCommand {
    /// Path to test
    pub path: String,

    /// Glob pattern
    pub pattern: String,
}

impl MatchesCommand {
    /// Execute the matches command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.factory().parse(&self.path)?;
        let matched = path.matches(&self.pattern)?;

        match global.output {
            OutputFormat::Json => {
                let report = MatchReport {
                    path: path.to_string(),
                    pattern: self.pattern.clone(),
                    matched,
                };
                let json = serde_json::to_string(&report)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Text => {
                println!("{matched}");
            }
        }

        if matched {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{path} does not match {}",
                self.pattern
            )))
        }
    }
}
