//! The port specification validator.
//!
//! A port specification denotes a single port number (1-65535), a
//! well-known service alias when the policy enables them, or an inclusive
//! numeric range `A-B` when the policy enables ranges. The validator
//! normalizes a raw candidate string, classifies it as scalar or range,
//! and returns an accept/reject decision plus an explanatory message.

use std::sync::Arc;

use crate::catalog::ServiceCatalog;
use crate::domain::{AcceptanceCache, AcceptanceSet};
use crate::error::Error;
use crate::policy::PortPolicy;
use crate::port::Port;

/// The fixed base sentence of the rejection message.
const BASE_MESSAGE: &str = "Please specify a valid port number (1-65535).";

/// Outcome of validating a single candidate value.
///
/// There is no partial or warning state: a candidate is accepted or it is
/// rejected with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The candidate is an acceptable port specification.
    Valid,
    /// The candidate was rejected; the payload is the explanatory message.
    Invalid(String),
}

impl ValidationOutcome {
    /// Returns `true` for [`ValidationOutcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the rejection message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(message) => Some(message),
        }
    }

    /// Converts the outcome into a `Result`, mapping a rejection to
    /// [`Error::InvalidPortSpec`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPortSpec`] when the outcome is `Invalid`.
    pub fn into_result(self) -> crate::error::Result<()> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(message) => Err(Error::InvalidPortSpec { message }),
        }
    }
}

/// Common capability contract for field validators.
///
/// Sibling validators compose through this trait instead of a class
/// hierarchy: a caller holds a `dyn FieldValidator`, feeds it policy flags
/// and a raw value, and asks for a verdict.
pub trait FieldValidator {
    /// Configures the validator from free-form boolean-like flag strings.
    ///
    /// Each flag is true only when it trims and uppercases to `"Y"`;
    /// malformed input resolves to false without error.
    fn configure(&mut self, allow_well_known: &str, allow_ranges: &str);

    /// Stores a candidate value, replacing any previous one.
    fn set_value(&mut self, raw: &str);

    /// Validates the stored candidate.
    fn validate(&self, required: bool) -> ValidationOutcome;
}

/// Validator for port specification strings.
///
/// # Examples
///
/// ```
/// use portspec::{FieldValidator, PortValidator};
///
/// let mut validator = PortValidator::new();
/// validator.configure("Y", "Y");
///
/// validator.set_value(" SSH ");
/// assert!(validator.validate(true).is_valid());
///
/// validator.set_value("10-20");
/// assert!(validator.validate(true).is_valid());
///
/// validator.set_value("70000");
/// assert!(!validator.validate(true).is_valid());
/// ```
#[derive(Debug)]
pub struct PortValidator {
    policy: PortPolicy,
    catalog: ServiceCatalog,
    custom_message: Option<String>,
    value: String,
    // None means the process-wide cache
    cache: Option<Arc<AcceptanceCache>>,
}

impl PortValidator {
    /// Creates a validator with the default policy (both flags false), the
    /// built-in catalog, and the process-wide acceptance cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: PortPolicy::default(),
            catalog: ServiceCatalog::builtin(),
            custom_message: None,
            value: String::new(),
            cache: None,
        }
    }

    /// Sets the policy from typed flags.
    #[must_use]
    pub fn with_policy(mut self, policy: PortPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the well-known service catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: ServiceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Uses a caller-owned acceptance cache instead of the process-wide
    /// one. Mainly useful for tests that observe build counts.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<AcceptanceCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Returns the current policy.
    #[must_use]
    pub const fn policy(&self) -> PortPolicy {
        self.policy
    }

    /// Sets the policy from typed flags, replacing the previous one.
    pub fn set_policy(&mut self, policy: PortPolicy) {
        self.policy = policy;
    }

    /// Overrides the composed rejection message. The override is returned
    /// verbatim on rejection.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.custom_message = Some(message.into());
    }

    /// Returns the stored, normalized candidate value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the message a rejection would carry under the current
    /// policy: the caller-supplied override if one exists, otherwise the
    /// base sentence, extended with the inline alias catalog when
    /// well-known services are enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use portspec::PortValidator;
    ///
    /// let validator = PortValidator::new();
    /// assert_eq!(
    ///     validator.message(),
    ///     "Please specify a valid port number (1-65535)."
    /// );
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        if let Some(ref message) = self.custom_message {
            return message.clone();
        }

        let mut message = BASE_MESSAGE.to_string();
        if self.policy.allow_well_known {
            message.push_str(&format!(
                " A service name is also possible ({}).",
                self.catalog.inline_list()
            ));
        }
        message
    }

    fn cache(&self) -> &AcceptanceCache {
        match self.cache {
            Some(ref cache) => cache,
            None => AcceptanceCache::global(),
        }
    }

    fn reject(&self) -> ValidationOutcome {
        ValidationOutcome::Invalid(self.message())
    }

    /// The decision procedure against an already-built acceptance set.
    fn check(&self, domain: &AcceptanceSet) -> ValidationOutcome {
        // Compatibility escape hatch: an empty set means no constraints
        // were ever configured, and validation is skipped entirely.
        if domain.is_empty() {
            log::debug!("acceptance set empty, skipping validation");
            return ValidationOutcome::Valid;
        }

        let segments: Vec<&str> = self.value.split('-').collect();
        let is_range_shape =
            segments.len() == 2 && segments.iter().all(|segment| !segment.is_empty());

        if is_range_shape && self.policy.allow_ranges {
            // Each bound stands alone: no ordering constraint between them
            for segment in &segments {
                if segment.parse::<Port>().is_err() {
                    return self.reject();
                }
            }
            return ValidationOutcome::Valid;
        }

        // Scalar: membership in the precomputed set. Strings with three or
        // more segments ("1-2-3") always land here, as does "10-20" when
        // ranges are disabled.
        if domain.contains(&self.value) {
            ValidationOutcome::Valid
        } else {
            self.reject()
        }
    }
}

impl Default for PortValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldValidator for PortValidator {
    fn configure(&mut self, allow_well_known: &str, allow_ranges: &str) {
        self.policy.set_allow_well_known(allow_well_known);
        self.policy.set_allow_ranges(allow_ranges);
    }

    fn set_value(&mut self, raw: &str) {
        self.value = raw.trim().to_lowercase();
    }

    fn validate(&self, required: bool) -> ValidationOutcome {
        // Absence is permitted for optional fields; decided before the
        // acceptance set is ever touched or built.
        if !required && self.value.is_empty() {
            return ValidationOutcome::Valid;
        }

        let domain = self.cache().get(self.policy, &self.catalog);
        self.check(&domain)
    }
}
