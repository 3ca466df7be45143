//! Well-known service alias catalog.
//!
//! The catalog is the fixed list of service names (e.g. "ssh", "https")
//! accepted as scalar port values when the policy enables well-known
//! services. A replacement catalog can be supplied programmatically or
//! loaded from a YAML file.

use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::error::{Error, Result};

/// The literal token accepted alongside the catalog when well-known
/// services are enabled.
pub const ANY_TOKEN: &str = "any";

/// The built-in list of well-known service aliases, in catalog order.
///
/// Catalog order is preserved because the rejection message lists the
/// aliases inline in this order. All entries are lowercase; candidate
/// values are lowercased on assignment, so matching is effectively
/// case-insensitive.
pub const WELL_KNOWN_SERVICES: [&str; 45] = [
    "cvsup",
    "domain",
    "ftp",
    "hbci",
    "http",
    "https",
    "aol",
    "auth",
    "imap",
    "imaps",
    "ipsec-msft",
    "isakmp",
    "l2f",
    "ldap",
    "ms-streaming",
    "afs3-fileserver",
    "microsoft-ds",
    "ms-wbt-server",
    "wins",
    "msnp",
    "nntp",
    "ntp",
    "netbios-dgm",
    "netbios-ns",
    "netbios-ssn",
    "openvpn",
    "pop3",
    "pop3s",
    "pptp",
    "radius",
    "radius-acct",
    "avt-profile-1",
    "sip",
    "smtp",
    "igmpv3lite",
    "urd",
    "snmp",
    "snmptrap",
    "ssh",
    "nat-stun-port",
    "submission",
    "teredo",
    "telnet",
    "tftp",
    "rfb",
];

/// An ordered catalog of well-known service aliases.
///
/// # Examples
///
/// ```
/// use portspec::ServiceCatalog;
///
/// let catalog = ServiceCatalog::builtin();
/// assert!(catalog.contains("ssh"));
/// assert!(catalog.contains("https"));
/// assert!(!catalog.contains("any"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    names: Vec<String>,
    fingerprint: u64,
}

impl ServiceCatalog {
    /// Returns the built-in 45-entry catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_normalized(WELL_KNOWN_SERVICES.iter().map(ToString::to_string).collect())
    }

    fn from_normalized(names: Vec<String>) -> Self {
        let mut hasher = DefaultHasher::new();
        names.hash(&mut hasher);
        let fingerprint = hasher.finish();
        Self { names, fingerprint }
    }

    /// Creates a catalog from a list of alias names.
    ///
    /// Names are trimmed and ASCII-lowercased; order is preserved.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any name is empty after trimming.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for (i, name) in names.into_iter().enumerate() {
            let trimmed = name.as_ref().trim();
            if trimmed.is_empty() {
                return Err(Error::Validation {
                    field: format!("catalog[{i}]"),
                    message: "alias must be non-empty".into(),
                });
            }
            normalized.push(trimmed.to_lowercase());
        }
        Ok(Self::from_normalized(normalized))
    }

    /// Loads a replacement catalog from a YAML sequence of strings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a YAML sequence
    /// of strings, or contains an empty alias.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use portspec::ServiceCatalog;
    /// use std::path::Path;
    ///
    /// let catalog = ServiceCatalog::from_yaml_file(Path::new("services.yaml")).unwrap();
    /// ```
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let names: Vec<String> = serde_yaml::from_str(&contents)?;
        Self::new(names)
    }

    /// Returns the alias names in catalog order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// A process-stable fingerprint of the catalog contents, computed once
    /// at construction. Catalogs with identical names share a fingerprint;
    /// the acceptance-set cache uses it to keep sets built from different
    /// catalogs apart.
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Returns `true` if the catalog contains the given (lowercase) name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns the number of aliases in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the catalog has no aliases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Renders the catalog as a comma-separated inline list, in catalog
    /// order. Used when composing the rejection message.
    ///
    /// # Examples
    ///
    /// ```
    /// use portspec::ServiceCatalog;
    ///
    /// let catalog = ServiceCatalog::new(["ssh", "https"]).unwrap();
    /// assert_eq!(catalog.inline_list(), "ssh, https");
    /// ```
    #[must_use]
    pub fn inline_list(&self) -> String {
        self.names.join(", ")
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(catalog.len(), 45);
        assert!(catalog.contains("ssh"));
        assert!(catalog.contains("https"));
        assert!(catalog.contains("domain"));
        assert!(catalog.contains("rfb"));
        assert!(!catalog.contains("gopher"));
    }

    #[test]
    fn test_any_is_not_a_catalog_member() {
        let catalog = ServiceCatalog::builtin();
        assert!(!catalog.contains(ANY_TOKEN));
    }

    #[test]
    fn test_builtin_entries_are_lowercase() {
        for name in WELL_KNOWN_SERVICES {
            assert_eq!(name, name.to_lowercase(), "catalog entry {name} not lowercase");
        }
    }

    #[test]
    fn test_builtin_order_preserved() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(catalog.names()[0], "cvsup");
        assert_eq!(catalog.names()[44], "rfb");
    }

    #[test]
    fn test_custom_catalog_normalized() {
        let catalog = ServiceCatalog::new(["  SSH ", "Https"]).unwrap();
        assert!(catalog.contains("ssh"));
        assert!(catalog.contains("https"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_empty_alias_rejected() {
        let result = ServiceCatalog::new(["ssh", "   "]);
        assert!(result.is_err());
    }

    #[test]
    fn test_fingerprint_tracks_contents() {
        let a = ServiceCatalog::new(["ssh", "https"]).unwrap();
        let b = ServiceCatalog::new([" SSH", "Https "]).unwrap();
        let c = ServiceCatalog::new(["ssh"]).unwrap();

        // Same normalized names, same fingerprint
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_ne!(a.fingerprint(), ServiceCatalog::builtin().fingerprint());
    }

    #[test]
    fn test_inline_list() {
        let catalog = ServiceCatalog::new(["ssh", "https", "ftp"]).unwrap();
        assert_eq!(catalog.inline_list(), "ssh, https, ftp");
    }

    #[test]
    fn test_inline_list_builtin_order() {
        let catalog = ServiceCatalog::builtin();
        let list = catalog.inline_list();
        assert!(list.starts_with("cvsup, domain, ftp"));
        assert!(list.ends_with("telnet, tftp, rfb"));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- ssh\n- HTTPS\n- ftp").unwrap();

        let catalog = ServiceCatalog::from_yaml_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("https"));
    }

    #[test]
    fn test_from_yaml_file_not_a_sequence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "services: 42").unwrap();

        assert!(ServiceCatalog::from_yaml_file(file.path()).is_err());
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let result = ServiceCatalog::from_yaml_file(Path::new("/nonexistent/services.yaml"));
        assert!(result.is_err());
    }
}
