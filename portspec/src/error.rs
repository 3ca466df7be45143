//! Error types for the portspec library.
//!
//! This module provides the error hierarchy for validation and catalog
//! handling, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a portspec error.
///
/// # Examples
///
/// ```
/// use portspec::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(8080)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the portspec library.
#[derive(Debug, Error)]
pub enum Error {
    /// A candidate value was rejected by the port specification validator.
    ///
    /// This is the single reject path for validation: a scalar that is not
    /// in the acceptance set and a range with a malformed bound both surface
    /// through this variant, distinguishable only by the message text.
    #[error("invalid port specification: {message}")]
    InvalidPortSpec {
        /// The composed (or caller-overridden) explanatory message.
        message: String,
    },

    /// A validation error occurred while building a catalog or policy input.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A catalog file could not be parsed.
    #[error("catalog error: {0}")]
    Catalog(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error is a validation rejection from the validator.
    ///
    /// # Examples
    ///
    /// ```
    /// use portspec::Error;
    ///
    /// let err = Error::InvalidPortSpec { message: "bad".into() };
    /// assert!(err.is_invalid_spec());
    /// ```
    #[must_use]
    pub fn is_invalid_spec(&self) -> bool {
        matches!(self, Self::InvalidPortSpec { .. })
    }
}
