//! Criterion benchmarks for the 8-puzzle GA.
//!
//! Measures full seeded solves and the per-generation building blocks
//! (fitness evaluation, random solvable boards) in isolation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use puzzle8_ga::ga::GaConfig;
use puzzle8_ga::puzzle::generator::random_solvable_state;
use puzzle8_ga::puzzle::{solve, Goal, Heuristic, SolverConfig, State};
use puzzle8_ga::random::create_rng;

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for heuristic in [Heuristic::Manhattan, Heuristic::Misplaced] {
        for pop in [50usize, 150] {
            let config = SolverConfig::default()
                .with_heuristic(heuristic)
                .with_ga(
                    GaConfig::default()
                        .with_population_size(pop)
                        .with_max_generations(2000)
                        .with_seed(42),
                );
            group.bench_with_input(
                BenchmarkId::new(format!("{heuristic:?}"), pop),
                &config,
                |b, cfg| {
                    b.iter(|| {
                        let report = solve(black_box(cfg)).expect("valid config");
                        black_box(report)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_heuristics(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic");
    let goal = Goal::default();
    let mut rng = create_rng(42);
    let boards: Vec<State> = (0..1000)
        .map(|_| random_solvable_state(goal.state(), &mut rng))
        .collect();

    for heuristic in [Heuristic::Manhattan, Heuristic::Misplaced] {
        group.bench_function(format!("{heuristic:?}"), |b| {
            b.iter(|| {
                let total: u32 = boards
                    .iter()
                    .map(|s| heuristic.evaluate(&goal, black_box(s)))
                    .sum();
                black_box(total)
            })
        });
    }
    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let goal = State::solved();
    let mut rng = create_rng(7);
    c.bench_function("random_solvable_state", |b| {
        b.iter(|| black_box(random_solvable_state(&goal, &mut rng)))
    });
}

criterion_group!(benches, bench_solve, bench_heuristics, bench_generator);
criterion_main!(benches);
