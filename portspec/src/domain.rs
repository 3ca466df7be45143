//! Acceptance sets and their cache.
//!
//! An acceptance set is the precomputed collection of strings accepted as a
//! bare scalar port value under one policy and catalog. Construction walks
//! all 65535 port numbers, so sets are built once per (policy, catalog)
//! pair and memoized; every validation call after the first is a set
//! lookup.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use crate::catalog::{ServiceCatalog, ANY_TOKEN};
use crate::policy::PortPolicy;
use crate::port::Port;

/// The set of strings accepted as a bare scalar port value under a policy.
///
/// Contents when well-known services are enabled: the literal `any`, every
/// catalog alias, and the decimal rendering of every port 1-65535. When
/// disabled: the decimal renderings only. The set never holds range
/// expressions and never depends on the candidate being validated.
///
/// # Examples
///
/// ```
/// use portspec::{AcceptanceSet, PortPolicy, ServiceCatalog};
///
/// let catalog = ServiceCatalog::builtin();
/// let set = AcceptanceSet::build(PortPolicy::new(true, false), &catalog);
///
/// assert!(set.contains("8080"));
/// assert!(set.contains("ssh"));
/// assert!(set.contains("any"));
/// assert!(!set.contains("10-20"));
/// ```
#[derive(Debug)]
pub struct AcceptanceSet {
    policy: PortPolicy,
    members: HashSet<String>,
}

impl AcceptanceSet {
    /// Builds the acceptance set for a policy. O(65535).
    #[must_use]
    pub fn build(policy: PortPolicy, catalog: &ServiceCatalog) -> Self {
        let extra = if policy.allow_well_known {
            1 + catalog.len()
        } else {
            0
        };
        let mut members = HashSet::with_capacity(usize::from(Port::MAX) + extra);

        if policy.allow_well_known {
            members.insert(ANY_TOKEN.to_string());
            for name in catalog.names() {
                members.insert(name.clone());
            }
        }

        for port in Port::MIN..=Port::MAX {
            members.insert(port.to_string());
        }

        log::debug!(
            "built acceptance set: {} members (well_known={}, ranges={})",
            members.len(),
            policy.allow_well_known,
            policy.allow_ranges
        );

        Self { policy, members }
    }

    /// An acceptance set with no members. Only used to exercise the
    /// skip-validation-when-empty compatibility path.
    #[cfg(test)]
    pub(crate) fn empty(policy: PortPolicy) -> Self {
        Self {
            policy,
            members: HashSet::new(),
        }
    }

    /// Returns the policy this set was built under.
    #[must_use]
    pub const fn policy(&self) -> PortPolicy {
        self.policy
    }

    /// Returns `true` if the normalized token is an accepted scalar value.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.members.contains(token)
    }

    /// Returns the number of accepted scalar tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Memoizes acceptance sets, keyed by the policy tuple and the catalog
/// that built them.
///
/// This replaces a first-policy-wins shared cache with an explicit map, so
/// validators with different policies, or the same policy but different
/// catalogs, never observe each other's sets. The map is populated under a
/// lock; concurrent callers either find a finished set or block until the
/// builder inserts one.
///
/// # Examples
///
/// ```
/// use portspec::{AcceptanceCache, PortPolicy, ServiceCatalog};
///
/// let cache = AcceptanceCache::new();
/// let catalog = ServiceCatalog::builtin();
/// let policy = PortPolicy::default();
///
/// let set = cache.get(policy, &catalog);
/// assert!(set.contains("443"));
///
/// // Second lookup under the same policy reuses the set
/// let _ = cache.get(policy, &catalog);
/// assert_eq!(cache.build_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AcceptanceCache {
    sets: Mutex<HashMap<(PortPolicy, u64), Arc<AcceptanceSet>>>,
    builds: AtomicUsize,
}

impl AcceptanceCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide shared cache.
    ///
    /// Validators created with [`crate::PortValidator::new`] use this cache,
    /// so the O(65535) construction happens at most once per (policy,
    /// catalog) pair per process.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<AcceptanceCache> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the acceptance set for a (policy, catalog) pair, building
    /// it on first use.
    ///
    /// Set contents depend on the catalog as well as the policy, so the
    /// catalog fingerprint is part of the cache key: two validators with
    /// the same policy but different catalogs each get their own set.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned by a panicking builder.
    #[must_use]
    pub fn get(&self, policy: PortPolicy, catalog: &ServiceCatalog) -> Arc<AcceptanceSet> {
        let key = (policy, catalog.fingerprint());
        let mut sets = self.sets.lock().expect("acceptance cache lock poisoned");
        if let Some(set) = sets.get(&key) {
            return Arc::clone(set);
        }

        let set = Arc::new(AcceptanceSet::build(policy, catalog));
        self.builds.fetch_add(1, Ordering::Relaxed);
        sets.insert(key, Arc::clone(&set));
        set
    }

    /// Number of set constructions performed so far.
    ///
    /// Observable in tests to assert that repeated validation under an
    /// unchanged policy does not rebuild.
    #[must_use]
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
