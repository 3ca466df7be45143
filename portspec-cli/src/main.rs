//! Main entry point for the portspec CLI.
//!
//! This is the command-line interface for the portspec validator.
//! It provides commands for working with port specifications:
//! - `check`: Validate one or more port specification strings
//! - `catalog`: Print the well-known service alias catalog
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = portspec::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Catalog(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
