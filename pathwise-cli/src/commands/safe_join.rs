//! Command for traversal-safe joining.

use crate::error::CliError;
use crate::utils::{emit_path, GlobalOptions};
use clap::Args;
use pathwise::Error;

/// Join a relative fragment onto a base, refusing any escape.
///
/// Fails (exit code 1) when the fragment is anchored or its `..` tokens
/// would climb out of the base.
#[derive(Args)]
pub struct SafeJoinCommand {
    /// Base path
    pub base: String,

    /// Relative fragment to join
    pub fragment: String,
}

impl SafeJoinCommand {
    /// Execute the safe-join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base = global.factory().parse(&self.base)?;
        match base.safe_join(&self.fragment) {
            Ok(joined) => emit_path(global, &joined),
            Err(err @ (Error::EscapesBase { .. } | Error::AnchoredFragment { .. })) => {
                Err(CliError::SemanticFailure(err.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}
