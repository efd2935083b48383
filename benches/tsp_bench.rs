//! Criterion benchmarks for Hill Climbing and Ant System.
//!
//! Uses seeded random Euclidean instances so that every sample runs the
//! same search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_heur::aco::{AsConfig, AsRunner, DepositRule};
use tsp_heur::distance::DistanceMatrix;
use tsp_heur::hc::{HcConfig, HcRunner};
use tsp_heur::instance::{random_points, DEFAULT_EXTENT};
use tsp_heur::random::create_rng;

fn instance(n: usize) -> DistanceMatrix {
    DistanceMatrix::from_points(&random_points(n, DEFAULT_EXTENT, &mut create_rng(42)))
}

fn bench_hc(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climbing");
    group.sample_size(10);

    for &n in &[10usize, 20, 40] {
        let matrix = instance(n);
        let config = HcConfig::default().with_max_iterations(200).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(matrix, config), |b, (m, c)| {
            b.iter(|| {
                let result = HcRunner::run(black_box(m), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_as(c: &mut Criterion) {
    let mut group = c.benchmark_group("ant_system");
    group.sample_size(10);

    for (n, rule, parallel) in [
        (20usize, DepositRule::VisitedNode, false),
        (20, DepositRule::TraversedEdge, false),
        (20, DepositRule::VisitedNode, true),
        (40, DepositRule::VisitedNode, false),
    ] {
        let matrix = instance(n);
        let config = AsConfig::default()
            .with_iterations(20)
            .with_deposit_rule(rule)
            .with_parallel(parallel)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("{rule:?}_par{parallel}"), n),
            &(matrix, config),
            |b, (m, c)| {
                b.iter(|| {
                    let result = AsRunner::run(black_box(m), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_hc, bench_as);
criterion_main!(benches);
