//! Benchmarks for neighbor generation and scoring.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

use tilefit::{Problem, State};

/// A mid-size instance with stock of every standard block.
fn mid_size_problem() -> Problem {
    let inventory: FxHashMap<char, u32> = "+|LZT4".chars().map(|b| (b, 8)).collect();
    Problem::with_standard_blocks(8, inventory).expect("standard instance is valid")
}

/// A partially tiled state, reached by a short seeded climb.
fn partially_tiled(problem: &Problem) -> State {
    let mut rng = StdRng::seed_from_u64(17);
    let mut state = problem.initial_state();
    for _ in 0..6 {
        match problem.random_improving_neighbor(&state, &mut rng) {
            Some(next) => state = next,
            None => break,
        }
    }
    state
}

/// Benchmark full neighbor enumeration from a blank grid.
fn bench_neighbors_blank(c: &mut Criterion) {
    let problem = mid_size_problem();
    let state = problem.initial_state();

    c.bench_function("neighbors_blank", |b| {
        b.iter(|| problem.neighbors(black_box(&state)))
    });
}

/// Benchmark neighbor enumeration from a partially tiled grid.
fn bench_neighbors_partial(c: &mut Criterion) {
    let problem = mid_size_problem();
    let state = partially_tiled(&problem);

    c.bench_function("neighbors_partial", |b| {
        b.iter(|| problem.neighbors(black_box(&state)))
    });
}

/// Benchmark greedy best-step selection.
fn bench_best_neighbor(c: &mut Criterion) {
    let problem = mid_size_problem();
    let state = partially_tiled(&problem);

    c.bench_function("best_neighbor", |b| {
        b.iter(|| problem.best_neighbor(black_box(&state)))
    });
}

/// Benchmark scoring a state.
fn bench_score(c: &mut Criterion) {
    let problem = mid_size_problem();
    let state = partially_tiled(&problem);

    c.bench_function("score", |b| b.iter(|| black_box(&state).score()));
}

criterion_group!(
    benches,
    bench_neighbors_blank,
    bench_neighbors_partial,
    bench_best_neighbor,
    bench_score
);
criterion_main!(benches);
