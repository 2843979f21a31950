//! Strategy-matrix benchmarks.
//!
//! Runs every method × variable-ordering × value-ordering combination over
//! the same puzzles so their step counts and wall-clock costs can be
//! compared.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench strategies
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlock_core::Board;
use gridlock_solver::{
    SearchMethod, SolverConfig, ValueOrdering, VariableOrdering, solve,
};

fn classic_puzzle() -> Board {
    "
        53..7....
        6..195...
        .98....6.
        8...6...3
        4..8.3..1
        7...2...6
        .6....28.
        ...419..5
        ....8..79
    "
    .parse()
    .unwrap()
}

fn seventeen_clue_puzzle() -> Board {
    "
        000000010
        400000000
        020000000
        000050407
        008000300
        001090000
        300400200
        050100000
        000806000
    "
    .parse()
    .unwrap()
}

fn bench_strategy_matrix(c: &mut Criterion) {
    let board = classic_puzzle();

    for config in SolverConfig::all() {
        c.bench_with_input(
            BenchmarkId::new("classic", config.to_string()),
            &config,
            |b, config| {
                b.iter(|| {
                    let report = solve(hint::black_box(&board), *config);
                    hint::black_box(report)
                });
            },
        );
    }
}

fn bench_seventeen_clues(c: &mut Criterion) {
    let board = seventeen_clue_puzzle();

    // First-empty orderings thrash on a grid this sparse; only the
    // MRV-driven configurations finish in bench-friendly time.
    let configs = [
        SearchMethod::Pruning,
        SearchMethod::ForwardChecking,
        SearchMethod::MaintainedArcConsistency,
    ]
    .into_iter()
    .flat_map(|method| {
        [ValueOrdering::Natural, ValueOrdering::LeastConstrainingValue]
            .into_iter()
            .map(move |value_ordering| SolverConfig {
                method,
                variable_ordering: VariableOrdering::MinimumRemainingValues,
                value_ordering,
                preprocess: false,
            })
    });

    for config in configs {
        c.bench_with_input(
            BenchmarkId::new("seventeen_clues", config.to_string()),
            &config,
            |b, config| {
                b.iter(|| {
                    let report = solve(hint::black_box(&board), *config);
                    hint::black_box(report)
                });
            },
        );
    }
}

criterion_group!(benches, bench_strategy_matrix, bench_seventeen_clues);
criterion_main!(benches);
