//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell
//! completion scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Binary name of the installed tool.
const BIN_NAME: &str = "photohold";

/// Generate shell completion scripts.
#[derive(Args)]
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
            match self.shell {
                Shell::Bash => {
                    eprintln!("# Install with:");
                    eprintln!("#   photohold completions bash > ~/.local/share/bash-completion/completions/photohold");
                }
                Shell::Zsh => {
                    eprintln!("# Install with:");
                    eprintln!("#   photohold completions zsh > ~/.zsh/completions/_photohold");
                }
                Shell::Fish => {
                    eprintln!("# Install with:");
                    eprintln!("#   photohold completions fish > ~/.config/fish/completions/photohold.fish");
                }
                Shell::PowerShell => {
                    eprintln!("# Install with:");
                    eprintln!("#   photohold completions powershell > $PROFILE");
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
