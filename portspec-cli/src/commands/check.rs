//! Command to validate port specification strings.

use crate::error::CliError;
use crate::utils::{load_catalog, GlobalOptions};
use clap::Args;
use portspec::{FieldValidator, PortPolicy, PortValidator};
use std::path::PathBuf;

/// Validate one or more port specification strings.
#[derive(Args)]
pub struct CheckCommand {
    /// Port specifications to validate
    #[arg(value_name = "SPEC", required = true)]
    pub specs: Vec<String>,

    /// Accept well-known service aliases and the literal "any"
    #[arg(long)]
    pub well_known: bool,

    /// Accept inclusive numeric ranges of the form A-B
    #[arg(long)]
    pub ranges: bool,

    /// Treat an empty specification as invalid
    #[arg(long)]
    pub required: bool,

    /// Override the rejection message
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Load a replacement alias catalog from a YAML file
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let catalog = load_catalog(self.catalog.as_deref())?;

        let mut validator = PortValidator::new()
            .with_policy(PortPolicy::new(self.well_known, self.ranges))
            .with_catalog(catalog);
        if let Some(ref message) = self.message {
            validator.set_message(message.clone());
        }

        let total = self.specs.len();
        let mut failures = 0usize;

        for spec in &self.specs {
            validator.set_value(spec);
            let outcome = validator.validate(self.required);
            match outcome.message() {
                None => {
                    if !global.quiet {
                        println!("ok: {spec}");
                    }
                }
                Some(message) => {
                    failures += 1;
                    eprintln!("invalid: {spec}: {message}");
                }
            }
        }

        if failures > 0 {
            Err(CliError::SemanticFailure(format!(
                "{failures} of {total} specification(s) invalid"
            )))
        } else {
            Ok(())
        }
    }
}
