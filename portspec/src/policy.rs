//! Validation policy for port specifications.
//!
//! The policy holds the two toggles that change both the accepted grammar
//! (scalar vs. range) and the composed rejection message.

use serde::{Deserialize, Serialize};

/// Policy toggles controlling which port specifications are accepted.
///
/// Both flags default to false: only bare decimal port numbers validate.
/// The policy is `Copy + Eq + Hash` so it can key the acceptance-set cache.
///
/// # Examples
///
/// ```
/// use portspec::PortPolicy;
///
/// let policy = PortPolicy::default();
/// assert!(!policy.allow_well_known);
/// assert!(!policy.allow_ranges);
///
/// let policy = PortPolicy::new(true, false);
/// assert!(policy.allow_well_known);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortPolicy {
    /// Accept well-known service aliases and the literal token `any`.
    #[serde(default)]
    pub allow_well_known: bool,

    /// Accept inclusive numeric ranges of the form `A-B`.
    #[serde(default)]
    pub allow_ranges: bool,
}

impl PortPolicy {
    /// Creates a policy from typed flags.
    #[must_use]
    pub const fn new(allow_well_known: bool, allow_ranges: bool) -> Self {
        Self {
            allow_well_known,
            allow_ranges,
        }
    }

    /// Interprets a free-form flag string as a boolean.
    ///
    /// True only when the trimmed, uppercased input equals `"Y"`. Every
    /// other value (empty, "N", "yes", "1", "maybe") resolves to false.
    /// Malformed input is never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use portspec::PortPolicy;
    ///
    /// assert!(PortPolicy::flag_enabled("Y"));
    /// assert!(PortPolicy::flag_enabled(" y "));
    /// assert!(!PortPolicy::flag_enabled("yes"));
    /// assert!(!PortPolicy::flag_enabled("1"));
    /// assert!(!PortPolicy::flag_enabled(""));
    /// ```
    #[must_use]
    pub fn flag_enabled(raw: &str) -> bool {
        raw.trim().to_uppercase() == "Y"
    }

    /// Sets the well-known-services flag from a free-form string.
    ///
    /// Idempotent; the previous value is fully replaced.
    pub fn set_allow_well_known(&mut self, raw: &str) {
        self.allow_well_known = Self::flag_enabled(raw);
    }

    /// Sets the ranges flag from a free-form string.
    ///
    /// Idempotent; the previous value is fully replaced.
    pub fn set_allow_ranges(&mut self, raw: &str) {
        self.allow_ranges = Self::flag_enabled(raw);
    }
}
