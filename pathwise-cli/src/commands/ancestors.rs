//! Command to list a path's ancestors.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// List a path's ancestors, most specific first.
///
/// The bare anchor is not an ancestor; the walk stops just above it.
#[derive(Args)]
pub struct AncestorsCommand {
    /// Path to walk
    pub path: String,

    /// Maximum number of ancestors to print
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

impl AncestorsCommand {
    /// Execute the ancestors command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.factory().parse(&self.path)?;
        let limit = self.limit.unwrap_or(usize::MAX);
        let ancestors: Vec<String> = path.parents().take(limit).map(|p| p.to_string()).collect();

        match global.output {
            OutputFormat::Json => {
                let json = serde_json::to_string(&ancestors)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Text => {
                for ancestor in &ancestors {
                    println!("{ancestor}");
                }
            }
        }
        Ok(())
    }
}
