//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands, including
//! catalog loading and the shared global options.

use crate::error::CliError;
use portspec::ServiceCatalog;
use std::path::Path;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Load the service alias catalog, either the built-in one or a
/// replacement from a YAML file.
pub fn load_catalog(path: Option<&Path>) -> Result<ServiceCatalog, CliError> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::InvalidArguments(format!(
                    "File not found: {}",
                    path.display()
                )));
            }
            ServiceCatalog::from_yaml_file(path).map_err(|e| match e {
                portspec::Error::Io(err) => CliError::Io(err),
                other => CliError::Config(format!("{}: {other}", path.display())),
            })
        }
        None => Ok(ServiceCatalog::builtin()),
    }
}
