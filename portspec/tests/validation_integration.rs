//! Integration tests for the port specification validator.
//!
//! This test suite verifies the full decision procedure across the policy
//! matrix:
//! - Scalar acceptance for every shape (numbers, aliases, the `any` token)
//! - Range acceptance and its dependence on the ranges toggle
//! - Normalization, message composition, and override messages
//! - Cache reuse across repeated validations and distinct policies

use std::io::Write;
use std::sync::Arc;

use portspec::{
    AcceptanceCache, FieldValidator, PortPolicy, PortValidator, ServiceCatalog, ValidationOutcome,
    WELL_KNOWN_SERVICES,
};

fn validator(policy: PortPolicy) -> PortValidator {
    PortValidator::new()
        .with_policy(policy)
        .with_cache(Arc::new(AcceptanceCache::new()))
}

fn outcome(policy: PortPolicy, candidate: &str, required: bool) -> ValidationOutcome {
    let mut v = validator(policy);
    v.set_value(candidate);
    v.validate(required)
}

// =============================================================================
// Scalar validation
// =============================================================================

#[test]
fn test_boundary_ports_accepted_under_every_policy() {
    for well_known in [false, true] {
        for ranges in [false, true] {
            let policy = PortPolicy::new(well_known, ranges);
            for candidate in ["1", "1024", "49151", "65535"] {
                assert!(
                    outcome(policy, candidate, true).is_valid(),
                    "{candidate} should validate under well_known={well_known}, ranges={ranges}"
                );
            }
        }
    }
}

#[test]
fn test_out_of_bounds_scalars_rejected() {
    let policy = PortPolicy::default();
    for candidate in ["0", "65536", "-5", "123456789", "8080.0", "port 80"] {
        assert!(
            !outcome(policy, candidate, true).is_valid(),
            "{candidate} should fail"
        );
    }
}

#[test]
fn test_every_builtin_alias_tracks_well_known_flag() {
    for alias in WELL_KNOWN_SERVICES {
        assert!(
            outcome(PortPolicy::new(true, false), alias, true).is_valid(),
            "{alias} should validate with well-known enabled"
        );
        assert!(
            !outcome(PortPolicy::new(false, false), alias, true).is_valid(),
            "{alias} should fail with well-known disabled"
        );
    }
}

#[test]
fn test_any_token() {
    assert!(outcome(PortPolicy::new(true, false), "any", true).is_valid());
    assert!(!outcome(PortPolicy::new(false, false), "any", true).is_valid());
}

#[test]
fn test_case_and_whitespace_normalization() {
    let policy = PortPolicy::new(true, false);
    assert!(outcome(policy, " SSH ", true).is_valid());
    assert!(outcome(policy, "\tHtTpS\n", true).is_valid());
    assert!(outcome(policy, "  443  ", true).is_valid());
}

// =============================================================================
// Range validation
// =============================================================================

#[test]
fn test_range_validity_matrix() {
    let ranges_on = PortPolicy::new(false, true);
    let ranges_off = PortPolicy::default();

    // Valid ranges only when the policy enables them
    assert!(outcome(ranges_on, "10-20", true).is_valid());
    assert!(!outcome(ranges_off, "10-20", true).is_valid());

    // Both bounds out of bounds or malformed
    assert!(!outcome(ranges_on, "70000-1", true).is_valid());
    assert!(!outcome(ranges_on, "0-10", true).is_valid());
    assert!(!outcome(ranges_on, "1.5-20", true).is_valid());
    assert!(!outcome(ranges_on, "+1-20", true).is_valid());

    // Reversed bounds are accepted (no ordering constraint)
    assert!(outcome(ranges_on, "500-100", true).is_valid());

    // Shape mismatches never reach the range path
    assert!(!outcome(ranges_on, "1-2-3", true).is_valid());
    assert!(!outcome(ranges_on, "10-", true).is_valid());
    assert!(!outcome(ranges_on, "-10", true).is_valid());
}

#[test]
fn test_hyphenated_aliases_interact_with_range_grammar() {
    // Two-segment aliases are scalars when ranges are off
    assert!(outcome(PortPolicy::new(true, false), "microsoft-ds", true).is_valid());
    // and get captured by the range grammar when ranges are on
    assert!(!outcome(PortPolicy::new(true, true), "microsoft-ds", true).is_valid());
    // Three-segment aliases are always scalars
    assert!(outcome(PortPolicy::new(true, true), "avt-profile-1", true).is_valid());
}

// =============================================================================
// Required-ness
// =============================================================================

#[test]
fn test_optional_empty_value_accepted() {
    assert!(outcome(PortPolicy::default(), "", false).is_valid());
    assert!(outcome(PortPolicy::default(), "   ", false).is_valid());
}

#[test]
fn test_required_empty_value_rejected() {
    assert!(!outcome(PortPolicy::default(), "", true).is_valid());
}

#[test]
fn test_optional_non_empty_value_still_checked() {
    assert!(!outcome(PortPolicy::default(), "bogus", false).is_valid());
    assert!(outcome(PortPolicy::default(), "8080", false).is_valid());
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn test_standard_message_without_well_known() {
    let rejected = outcome(PortPolicy::default(), "bogus", true);
    assert_eq!(
        rejected.message(),
        Some("Please specify a valid port number (1-65535).")
    );
}

#[test]
fn test_standard_message_lists_all_aliases_in_order() {
    let rejected = outcome(PortPolicy::new(true, false), "bogus", true);
    let message = rejected.message().unwrap();

    let expected_list = WELL_KNOWN_SERVICES.join(", ");
    assert!(message.contains(&expected_list));
}

#[test]
fn test_override_message_verbatim() {
    let mut v = validator(PortPolicy::new(true, true));
    v.set_message("Choose a port between 1 and 65535.");
    v.set_value("not-valid");

    assert_eq!(
        v.validate(true).message(),
        Some("Choose a port between 1 and 65535.")
    );
}

#[test]
fn test_invalid_outcome_converts_to_error() {
    let err = outcome(PortPolicy::default(), "bogus", true)
        .into_result()
        .unwrap_err();
    assert!(format!("{err}").contains("invalid port specification"));
}

// =============================================================================
// Cache behavior
// =============================================================================

#[test]
fn test_repeated_validation_does_not_rebuild() {
    let cache = Arc::new(AcceptanceCache::new());
    let mut v = PortValidator::new()
        .with_policy(PortPolicy::new(true, true))
        .with_cache(Arc::clone(&cache));

    v.set_value("ssh");
    let first = v.validate(true);
    for _ in 0..10 {
        assert_eq!(v.validate(true), first);
    }
    assert_eq!(cache.build_count(), 1);
}

#[test]
fn test_validators_with_distinct_policies_share_cache_safely() {
    let cache = Arc::new(AcceptanceCache::new());

    let mut plain = PortValidator::new().with_cache(Arc::clone(&cache));
    let mut with_services = PortValidator::new()
        .with_policy(PortPolicy::new(true, false))
        .with_cache(Arc::clone(&cache));

    plain.set_value("ssh");
    with_services.set_value("ssh");

    // The second validator must not reuse the first validator's set
    assert!(!plain.validate(true).is_valid());
    assert!(with_services.validate(true).is_valid());
    assert_eq!(cache.build_count(), 2);
}

#[test]
fn test_validators_with_distinct_catalogs_share_cache_safely() {
    let cache = Arc::new(AcceptanceCache::new());
    let policy = PortPolicy::new(true, false);

    let mut builtin = PortValidator::new()
        .with_policy(policy)
        .with_cache(Arc::clone(&cache));
    builtin.set_value("ssh");
    assert!(builtin.validate(true).is_valid());

    // Same policy, replacement catalog: must get its own set, not the
    // builtin-catalog set cached above
    let mut custom = PortValidator::new()
        .with_policy(policy)
        .with_catalog(ServiceCatalog::new(["postgres"]).unwrap())
        .with_cache(Arc::clone(&cache));

    custom.set_value("postgres");
    assert!(custom.validate(true).is_valid());
    custom.set_value("ssh");
    assert!(!custom.validate(true).is_valid());

    assert_eq!(cache.build_count(), 2);
}

// =============================================================================
// Custom catalogs
// =============================================================================

#[test]
fn test_yaml_catalog_drives_validation_and_message() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "- postgres\n- redis").unwrap();

    let catalog = ServiceCatalog::from_yaml_file(file.path()).unwrap();
    let mut v = PortValidator::new()
        .with_policy(PortPolicy::new(true, false))
        .with_catalog(catalog)
        .with_cache(Arc::new(AcceptanceCache::new()));

    v.set_value("redis");
    assert!(v.validate(true).is_valid());

    v.set_value("ssh");
    let rejected = v.validate(true);
    assert!(!rejected.is_valid());
    assert!(rejected.message().unwrap().contains("(postgres, redis)."));
}

// =============================================================================
// String-flag configuration
// =============================================================================

#[test]
fn test_configure_with_sentinel_flags() {
    let mut v = PortValidator::new().with_cache(Arc::new(AcceptanceCache::new()));

    v.configure(" y ", "N");
    v.set_value("domain");
    assert!(v.validate(true).is_valid());

    v.set_value("10-20");
    assert!(!v.validate(true).is_valid());

    v.configure("maybe", "Y");
    v.set_value("10-20");
    assert!(v.validate(true).is_valid());

    v.set_value("domain");
    assert!(!v.validate(true).is_valid());
}
