//! Criterion benchmarks for the metaheur-bench strategies.
//!
//! Continuous strategies run on the Sphere function to measure pure
//! algorithm overhead; GA and ACO run on cities placed on a circle.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use metaheur_bench::aco::{AcoConfig, AcoRunner};
use metaheur_bench::de::{DeConfig, DeRunner};
use metaheur_bench::ga::{GaConfig, GaRunner};
use metaheur_bench::objective::{Benchmark, Function, HistoryMode};
use metaheur_bench::pso::{PsoConfig, PsoRunner};
use metaheur_bench::sa::{SaConfig, SaRunner};
use metaheur_bench::tsp::Cities;

fn circle(n: usize) -> Cities {
    let coords = (0..n)
        .map(|i| {
            let a = std::f64::consts::TAU * i as f64 / n as f64;
            [a.cos() * 100.0, a.sin() * 100.0]
        })
        .collect();
    Cities::new(coords).expect("circle instance is valid")
}

// ===========================================================================
// Continuous
// ===========================================================================

fn bench_sa_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa_sphere");
    group.sample_size(10);

    for &dim in &[10, 30, 100] {
        let function = Function::new(Benchmark::Sphere, dim);
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.01)
            .with_iterations(1000)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &(function, config), |b, (f, c)| {
            b.iter(|| {
                let result = SaRunner::run(black_box(f), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_de_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("de_sphere");
    group.sample_size(10);

    for (dim, pop, gen) in [(10usize, 30usize, 100usize), (30, 30, 100), (100, 50, 50)] {
        let function = Function::new(Benchmark::Sphere, dim);
        let config = DeConfig {
            population_size: pop,
            max_generations: gen,
            history: HistoryMode::Best,
            seed: Some(42),
            ..DeConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_p{}_g{}", dim, pop, gen), dim),
            &(function, config),
            |b, (f, c)| {
                b.iter(|| {
                    let result = DeRunner::run(black_box(f), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_pso_history_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_history");
    group.sample_size(10);

    let function = Function::new(Benchmark::Sphere, 30);
    for (label, mode) in [("full", HistoryMode::Full), ("best", HistoryMode::Best)] {
        let config = PsoConfig::default()
            .with_population_size(30)
            .with_max_generations(100)
            .with_history(mode)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(label), &config, |b, c| {
            b.iter(|| {
                let result = PsoRunner::run(black_box(&function), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// TSP
// ===========================================================================

fn bench_ga_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_tsp");
    group.sample_size(10);

    for &n in &[10, 30, 60] {
        let cities = circle(n);
        let config = GaConfig::default().with_max_generations(100).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(cities, config), |b, (t, c)| {
            b.iter(|| {
                let result = GaRunner::run(black_box(t), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_aco_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_tsp");
    group.sample_size(10);

    for &n in &[10, 30, 60] {
        let cities = circle(n);
        let config = AcoConfig::default()
            .with_ants(n)
            .with_iterations(50)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(cities, config), |b, (t, c)| {
            b.iter(|| {
                let result = AcoRunner::run(black_box(t), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sa_sphere,
    bench_de_sphere,
    bench_pso_history_modes,
    bench_ga_tsp,
    bench_aco_tsp
);
criterion_main!(benches);
