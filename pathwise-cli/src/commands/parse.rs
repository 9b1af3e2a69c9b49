//! Command to parse a path and display its components.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::{GlobalOptions, PathReport};
use clap::Args;

/// Parse a path and show its structural components.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to parse
    pub path: String,

    /// Expand $VAR and ${VAR} references before parsing
    #[arg(long)]
    pub expand_env: bool,

    /// Expand a leading ~ to the home directory before parsing
    #[arg(long)]
    pub expand_home: bool,

    /// Fold the result to lowercase on case-insensitive platforms
    #[arg(long)]
    pub normalize_case: bool,
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = global
            .factory()
            .with_env_expansion(self.expand_env)
            .with_home_expansion(self.expand_home)
            .with_case_normalization(self.normalize_case);
        let path = factory.parse(&self.path)?;

        match global.output {
            OutputFormat::Json => {
                let json = serde_json::to_string(&PathReport::new(&path))
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                println!("{json}");
            }
            OutputFormat::Text => {
                println!("path:      {path}");
                println!("platform:  {}", path.platform());
                println!("drive:     {}", path.drive());
                println!("root:      {}", path.root());
                println!("dirname:   {}", path.dirname());
                println!("basename:  {}", path.basename());
                println!("extension: {}", path.extension());
                println!("anchor:    {}", path.anchor());
                println!("parts:     {}", path.parts().join(" | "));
                println!("absolute:  {}", path.is_absolute());
                if path.is_reserved() {
                    println!("reserved:  true");
                }
            }
        }
        Ok(())
    }
}
