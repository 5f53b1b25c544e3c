use citizen_paths::geo_utils::{position_along_path, total_distance};
use citizen_paths::models::Waypoint;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// A 200-point zigzag path through the Venice lagoon.
fn lagoon_path() -> Vec<Waypoint> {
    (0..200)
        .map(|i| {
            let t = i as f64 / 199.0;
            let jitter = if i % 2 == 0 { 0.0005 } else { 0.0 };
            Waypoint::new(45.43 + t * 0.01 + jitter, 12.33 + t * 0.02)
        })
        .collect()
}

fn benchmark_interpolation(c: &mut Criterion) {
    let path = lagoon_path();

    let mut group = c.benchmark_group("interpolation");

    group.bench_function("total_distance_200pts", |b| {
        b.iter(|| total_distance(black_box(&path)))
    });

    group.bench_function("position_mid_path_200pts", |b| {
        b.iter(|| position_along_path(black_box(&path), black_box(0.5)))
    });

    group.bench_function("position_sweep_200pts", |b| {
        b.iter(|| {
            for step in 0..=10 {
                let progress = step as f64 / 10.0;
                black_box(position_along_path(black_box(&path), progress));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_interpolation);
criterion_main!(benches);
