use criterion::{Criterion, black_box, criterion_group, criterion_main};

use meshweld_buffers::{RecencyCache, build_fastest, build_local_optimize};
use meshweld_core::mesh::generators::generate_sphere;

// ---------------------------------------------------------------------------
// Build strategies
// ---------------------------------------------------------------------------

fn bench_build_fastest(c: &mut Criterion) {
    let mesh = generate_sphere(1.0, 64, 32);
    c.bench_function("build_fastest_sphere_64x32", |b| {
        b.iter(|| build_fastest(black_box(&mesh)));
    });
}

fn bench_build_local_optimize(c: &mut Criterion) {
    let mesh = generate_sphere(1.0, 64, 32);
    c.bench_function("build_local_optimize_sphere_64x32", |b| {
        b.iter(|| build_local_optimize(black_box(&mesh), RecencyCache::DEFAULT_CAPACITY));
    });
}

// ---------------------------------------------------------------------------
// Cache capacity trade-off
// ---------------------------------------------------------------------------

fn bench_cache_capacities(c: &mut Criterion) {
    let mesh = generate_sphere(1.0, 64, 32);
    let mut group = c.benchmark_group("local_optimize_cache_capacity");
    for capacity in [8usize, 32, 128] {
        group.bench_function(format!("capacity_{capacity}"), |b| {
            b.iter(|| build_local_optimize(black_box(&mesh), capacity));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build_fastest,
    bench_build_local_optimize,
    bench_cache_capacities,
);
criterion_main!(benches);
