//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout so it can be redirected or sourced; a
    /// one-line usage hint goes to stderr.
    pub fn execute(&self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        let hint = match self.shell {
            Shell::Bash => "eval \"$(portspec completions bash)\"",
            Shell::Zsh => "eval \"$(portspec completions zsh)\"",
            Shell::Fish => "portspec completions fish | source",
            Shell::PowerShell => "portspec completions powershell | Out-String | Invoke-Expression",
            _ => "see your shell's documentation for loading completion scripts",
        };
        eprintln!("# To enable {} completions: {hint}", self.shell);

        generate(self.shell, &mut cmd, "portspec", &mut io::stdout());

        Ok(())
    }
}
