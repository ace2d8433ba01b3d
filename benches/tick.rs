//! Benchmarks for spawn and per-frame particle physics.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fiesta::{ParticleSystem, Viewport};

fn bench_spawn(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    group.bench_function("spawn_all_default", |b| {
        let mut sys = ParticleSystem::new(Viewport::default()).with_seed(42);
        b.iter(|| {
            sys.spawn_all();
            black_box(sys.confetti().len())
        })
    });

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("spawn_confetti", count), &count, |b, &n| {
            let mut sys = ParticleSystem::new(Viewport::default())
                .with_seed(42)
                .with_counts(n, 0, 0);
            b.iter(|| {
                sys.spawn_confetti();
                black_box(sys.confetti().len())
            })
        });
    }

    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("tick_default_populations", |b| {
        let mut sys = ParticleSystem::new(Viewport::default()).with_seed(42);
        sys.spawn_all();
        let mut elapsed = 0.0f32;
        b.iter(|| {
            elapsed += 0.016;
            sys.tick(black_box(elapsed));
        })
    });

    for count in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("tick_large", count), &count, |b, &n| {
            let mut sys = ParticleSystem::new(Viewport::default())
                .with_seed(42)
                .with_counts(n, n / 2, n / 4);
            sys.spawn_all();
            let mut elapsed = 0.0f32;
            b.iter(|| {
                elapsed += 0.016;
                sys.tick(black_box(elapsed));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spawn, bench_tick);
criterion_main!(benches);
