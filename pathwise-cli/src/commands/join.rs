//! Command to join a base path with fragments.

use crate::error::CliError;
use crate::utils::{emit_path, GlobalOptions};
use clap::Args;

/// Join a base path with one or more fragments.
///
/// Follows native combine semantics: a later rooted fragment replaces
/// everything accumulated before it.
#[derive(Args)]
pub struct JoinCommand {
    /// Base path
    pub base: String,

    /// Fragments to join, in order
    #[arg(required = true)]
    pub fragments: Vec<String>,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let base = global.factory().parse(&self.base)?;
        let joined = base.join_all(&self.fragments)?;
        emit_path(global, &joined)
    }
}
