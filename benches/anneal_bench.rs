//! Criterion benchmarks for the SA engine.
//!
//! Uses synthetic random cost matrices to measure engine throughput
//! across instance sizes and cooling schedules.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tsp_anneal::instance::TspInstance;
use tsp_anneal::sa::{CoolingSchedule, SaConfig, SaRunner};

fn random_symmetric(n: usize, seed: u64) -> TspInstance {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let c = rng.random_range(1..1000i64);
            matrix[i][j] = c;
            matrix[j][i] = c;
        }
    }
    TspInstance::new(format!("bench{n}"), matrix).expect("square by construction")
}

fn bench_engine_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_engine");
    for n in [10usize, 50, 100] {
        let instance = random_symmetric(n, 42);
        let config = SaConfig::default()
            .with_epochs(50)
            .with_epoch_iterations(50)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::new("cities", n), &instance, |b, instance| {
            b.iter(|| {
                let result = SaRunner::run(black_box(instance), black_box(&config));
                black_box(result.best_cost)
            })
        });
    }
    group.finish();
}

fn bench_cooling_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("cooling_schedules");
    let instance = random_symmetric(50, 7);
    let schedules = [
        ("linear", CoolingSchedule::Linear { rate: 1.0 }),
        ("geometric", CoolingSchedule::Geometric { factor: 0.95 }),
        ("logarithmic", CoolingSchedule::Logarithmic { offset: 2.0 }),
    ];
    for (name, schedule) in schedules {
        let config = SaConfig::default()
            .with_cooling(schedule)
            .with_epochs(50)
            .with_epoch_iterations(50)
            .with_seed(7);
        group.bench_function(name, |b| {
            b.iter(|| {
                let result = SaRunner::run(black_box(&instance), black_box(&config));
                black_box(result.best_cost)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_engine_sizes, bench_cooling_schedules);
criterion_main!(benches);
