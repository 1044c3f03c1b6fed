//! Search benchmarks for performance profiling.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure full decisions at varying iteration budgets and
//! the rollout policy on its own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use isolation_mcts::core::{PlayerId, SearchRng};
use isolation_mcts::game::GameEngine;
use isolation_mcts::games::isolation::{Isolation, IsolationState};
use isolation_mcts::mcts::{RandomRollout, RolloutPolicy, SearchConfig, SearchEngine};

/// A full-size position with both knights placed.
fn midgame() -> (Isolation, IsolationState) {
    let game = Isolation::default();
    let state = game.initial_state();
    let state = game.result(&state, &30);
    let state = game.result(&state, &68);
    (game, state)
}

fn bench_decide_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("decide_iterations");

    for iterations in [10, 50, 100, 200] {
        group.throughput(Throughput::Elements(iterations as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            &iterations,
            |b, &iterations| {
                let (game, state) = midgame();
                let config = SearchConfig::default()
                    .with_iterations(iterations)
                    .with_seed(42);
                let mut search = SearchEngine::new(game, config);

                b.iter(|| black_box(search.decide(black_box(&state), PlayerId::new(0))));
            },
        );
    }

    group.finish();
}

fn bench_rollout(c: &mut Criterion) {
    c.bench_function("random_rollout", |b| {
        let (game, state) = midgame();
        let mut rng = SearchRng::new(42);

        b.iter(|| {
            black_box(RandomRollout.rollout(&game, black_box(&state), PlayerId::new(0), &mut rng))
        });
    });
}

criterion_group!(benches, bench_decide_iterations, bench_rollout);
criterion_main!(benches);
