use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use portspec::{
    AcceptanceCache, AcceptanceSet, FieldValidator, PortPolicy, PortValidator, ServiceCatalog,
};

fn bench_acceptance_set_build(c: &mut Criterion) {
    let catalog = ServiceCatalog::builtin();

    c.bench_function("acceptance_set_build_plain", |b| {
        b.iter(|| AcceptanceSet::build(black_box(PortPolicy::default()), &catalog));
    });

    c.bench_function("acceptance_set_build_well_known", |b| {
        b.iter(|| AcceptanceSet::build(black_box(PortPolicy::new(true, false)), &catalog));
    });
}

fn bench_validation(c: &mut Criterion) {
    let cache = Arc::new(AcceptanceCache::new());
    let mut validator = PortValidator::new()
        .with_policy(PortPolicy::new(true, true))
        .with_cache(cache);

    // Warm the cache so the measurements cover the steady-state lookup path
    validator.set_value("1");
    let _ = validator.validate(true);

    c.bench_function("validate_scalar_number", |b| {
        validator.set_value("8080");
        b.iter(|| black_box(validator.validate(true)));
    });

    c.bench_function("validate_service_alias", |b| {
        validator.set_value("https");
        b.iter(|| black_box(validator.validate(true)));
    });

    c.bench_function("validate_range", |b| {
        validator.set_value("1024-2048");
        b.iter(|| black_box(validator.validate(true)));
    });

    c.bench_function("validate_rejected_scalar", |b| {
        validator.set_value("not-a-port");
        b.iter(|| black_box(validator.validate(true)));
    });
}

criterion_group!(benches, bench_acceptance_set_build, bench_validation);
criterion_main!(benches);
