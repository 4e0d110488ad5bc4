//! Analysis pipeline benchmarks.
//!
//! Run with: cargo criterion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rotorvib::config::default_cases;
use rotorvib::prelude::*;

fn bench_analyze_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_case");
    let (unbalanced, _) = default_cases().expect("default scenario");
    let omega = omega_from_rpm(600.0);

    for samples in [100_usize, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("samples", samples),
            &samples,
            |b, &samples| {
                b.iter(|| {
                    let result = analyze_case(&unbalanced, omega, 2.0, samples)
                        .expect("analysis succeeds");
                    black_box(result.centrifugal_force)
                });
            },
        );
    }

    group.finish();
}

fn bench_balanced_variant(c: &mut Criterion) {
    let (unbalanced, _) = default_cases().expect("default scenario");

    c.bench_function("balanced_variant", |b| {
        b.iter(|| {
            let balanced = unbalanced.balanced("bench").expect("balance succeeds");
            black_box(balanced.total_mass())
        });
    });
}

criterion_group!(benches, bench_analyze_case, bench_balanced_variant);
criterion_main!(benches);
