//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell
//! completion scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name exposed to shells.
const BIN_NAME: &str = "pathwise";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Enable with:");
                    eprintln!("#   eval \"$(pathwise completions bash)\"");
                }
                Shell::Zsh => {
                    eprintln!("# Install into a directory on your $fpath:");
                    eprintln!("#   pathwise completions zsh > ~/.zsh/completions/_pathwise");
                }
                Shell::Fish => {
                    eprintln!("# Install with:");
                    eprintln!(
                        "#   pathwise completions fish > ~/.config/fish/completions/pathwise.fish"
                    );
                }
                Shell::PowerShell => {
                    eprintln!("# Enable with:");
                    eprintln!(
                        "#   pathwise completions powershell | Out-String | Invoke-Expression"
                    );
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
