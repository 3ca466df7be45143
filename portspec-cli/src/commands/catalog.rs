//! Command to print the well-known service alias catalog.

use crate::error::CliError;
use crate::utils::{load_catalog, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Print the well-known service alias catalog.
#[derive(Args)]
pub struct CatalogCommand {
    /// Print the catalog as a single comma-separated line
    #[arg(long)]
    pub inline: bool,

    /// Load a replacement alias catalog from a YAML file
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

impl CatalogCommand {
    /// Execute the catalog command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let catalog = load_catalog(self.catalog.as_deref())?;

        if global.verbose {
            eprintln!("{} alias(es)", catalog.len());
        }

        if self.inline {
            println!("{}", catalog.inline_list());
        } else {
            for name in catalog.names() {
                println!("{name}");
            }
        }

        Ok(())
    }
}
