//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CatalogCommand, CheckCommand, CompletionsCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for validating port specification strings.
#[derive(Parser)]
#[command(name = "portspec")]
#[command(version, about = "Validate port specification strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Validate one or more port specification strings
    Check(CheckCommand),

    /// Print the well-known service alias catalog
    Catalog(CatalogCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
