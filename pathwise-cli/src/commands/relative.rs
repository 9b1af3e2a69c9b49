//! Command to relativize a path against an ancestor.

use crate::error::CliError;
use crate::utils::{emit_path, GlobalOptions};
use clap::Args;
use pathwise::Error;

/// Show a path's suffix relative to an ancestor.
///
/// Fails (exit code 1) when the ancestor does not share the path's
/// anchor or is not actually an ancestor.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path to relativize
    pub path: String,

    /// Ancestor to strip
    pub base: String,
}

impl RelativeCommand {
    /// Execute the relative command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let factory = global.factory();
        let path = factory.parse(&self.path)?;
        let base = factory.parse(&self.base)?;
        match path.relative_to(&base) {
            Ok(relative) => emit_path(global, &relative),
            Err(err @ (Error::NotAncestor { .. } | Error::AnchorMismatch { .. })) => {
                Err(CliError::SemanticFailure(err.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
