// Benchmarking the scope runner against a direct call.
// The scoped forms add an acquire and a release around the same body.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resource_patterns::{with_scope, ScopeGuard};

fn sum_direct(data: &[u64]) -> u64 {
    data.iter().sum()
}

fn sum_with_scope(data: &[u64]) -> u64 {
    let result: Result<u64, resource_patterns::ScopeError<&str>> = with_scope(
        || Ok(data),
        |slice| Ok(slice.iter().sum()),
        |_| Ok(()),
    );
    match result {
        Ok(sum) => sum,
        Err(_) => 0,
    }
}

fn sum_with_guard(data: &[u64]) -> u64 {
    let guard = ScopeGuard::new(data, |_| {});
    guard.iter().sum()
}

fn benchmark_scope_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("scope_overhead");

    let data: Vec<u64> = (0..1000).collect();

    group.bench_function("direct", |b| b.iter(|| sum_direct(black_box(&data))));

    group.bench_function("with_scope", |b| {
        b.iter(|| sum_with_scope(black_box(&data)))
    });

    group.bench_function("scope_guard", |b| {
        b.iter(|| sum_with_guard(black_box(&data)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_scope_overhead);
criterion_main!(benches);
