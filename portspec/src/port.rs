//! Network port type with strict parsing.
//!
//! The [`Port`] type carries a validated port number (1-65535). Its
//! `FromStr` implementation is the grammar used for range bounds: pure
//! decimal digits, no sign, no whitespace, no wrapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A valid network port number (1-65535).
///
/// Port 0 is considered invalid as it has special meaning in networking
/// contexts.
///
/// # Examples
///
/// ```
/// use portspec::Port;
///
/// let port = Port::try_from(8080).unwrap();
/// assert_eq!(port.value(), 8080);
///
/// assert!(Port::try_from(0).is_err());
///
/// let parsed: Port = "443".parse().unwrap();
/// assert_eq!(parsed.value(), 443);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// The minimum valid port number.
    pub const MIN: u16 = 1;

    /// The maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Returns the underlying port number.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Port {
    type Error = ParsePortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value == 0 {
            Err(ParsePortError {
                input: "0".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl FromStr for Port {
    type Err = ParsePortError;

    /// Parses a port from its decimal string form.
    ///
    /// The grammar is strict: one or more ASCII digits and nothing else.
    /// Signs, whitespace, decimal points, and values outside 1-65535 are
    /// all rejected; oversized inputs reject rather than wrap.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || ParsePortError { input: s.into() };

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject());
        }

        // Parse into a wider integer so "65536" and longer digit runs fail
        // the bounds check instead of overflowing u16.
        let value: u32 = s.parse().map_err(|_| reject())?;
        if value < u32::from(Self::MIN) || value > u32::from(Self::MAX) {
            return Err(reject());
        }

        #[allow(clippy::cast_possible_truncation)] // bounds checked above
        Ok(Self(value as u16))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for port values that fail the strict grammar or bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePortError {
    /// The offending input text.
    pub input: String,
}

impl fmt::Display for ParsePortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid port '{}': expected an integer between {} and {}",
            self.input,
            Port::MIN,
            Port::MAX
        )
    }
}

impl std::error::Error for ParsePortError {}
