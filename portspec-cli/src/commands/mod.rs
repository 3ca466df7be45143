//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `check`: Validate one or more port specification strings
//! - `catalog`: Print the well-known service alias catalog
//! - `completions`: Generate shell completion scripts

pub mod catalog;
pub mod check;
pub mod completions;

pub use catalog::CatalogCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
