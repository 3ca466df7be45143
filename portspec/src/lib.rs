#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # portspec
//!
//! A library for validating port specification strings: values that denote
//! a single TCP/UDP port number (1-65535), a well-known service alias
//! (e.g. "https", "ssh"), or an inclusive numeric range "A-B".
//!
//! Which shapes are accepted is controlled by a [`PortPolicy`]; the set of
//! acceptable scalar tokens is precomputed once per policy and cached in an
//! [`AcceptanceCache`].
//!
//! ## Core Types
//!
//! - [`PortValidator`] and [`FieldValidator`]: the validator and its
//!   capability contract
//! - [`PortPolicy`]: the well-known-services and ranges toggles
//! - [`ServiceCatalog`]: the well-known service alias catalog
//! - [`AcceptanceSet`] and [`AcceptanceCache`]: precomputed scalar domains
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use portspec::{FieldValidator, PortValidator};
//!
//! let mut validator = PortValidator::new();
//! validator.configure("Y", "Y");
//!
//! validator.set_value("8080");
//! assert!(validator.validate(true).is_valid());
//!
//! validator.set_value("https");
//! assert!(validator.validate(true).is_valid());
//!
//! validator.set_value("1024-2048");
//! assert!(validator.validate(true).is_valid());
//!
//! validator.set_value("65536");
//! let outcome = validator.validate(true);
//! assert!(outcome.message().unwrap().contains("1-65535"));
//! ```

pub mod catalog;
pub mod domain;
pub mod error;
pub mod logging;
pub mod policy;
pub mod port;
pub mod validator;

// Re-export key types at crate root for convenience
pub use catalog::{ServiceCatalog, ANY_TOKEN, WELL_KNOWN_SERVICES};
pub use domain::{AcceptanceCache, AcceptanceSet};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use policy::PortPolicy;
pub use port::{ParsePortError, Port};
pub use validator::{FieldValidator, PortValidator, ValidationOutcome};
