use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expendibots_solver::engine::Side;
use expendibots_solver::solver::{solve, SearchConfig};
use expendibots_solver::utils::board_from_str_rows;

/// One boom clears everything: measures overhead around a trivial search.
const ADJACENT_CLUSTER: [&str; 8] = [
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  1b .  .  .  .",
    ".  .  .  .  1b .  .  .",
    ".  .  .  .  1w .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
];

/// The stack has to cross the board before it can boom.
const LONG_WALK: [&str; 8] = [
    ".  .  .  .  .  .  1b 1b",
    ".  .  .  .  .  .  1b .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    "2w .  .  .  .  .  .  .",
];

/// Two separated targets: the solver has to split or walk twice.
const SPLIT_TARGETS: [&str; 8] = [
    "1b .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
    ".  .  .  .  .  .  .  1b",
    ".  .  2w .  .  .  .  .",
    ".  .  .  .  .  .  .  .",
];

fn bench_solver(c: &mut Criterion) {
    let scenarios = [
        ("adjacent_cluster", ADJACENT_CLUSTER),
        ("long_walk", LONG_WALK),
        ("split_targets", SPLIT_TARGETS),
    ];
    for (name, rows) in scenarios {
        let board = board_from_str_rows(&rows).unwrap();
        let config = SearchConfig::default();
        c.bench_function(name, |b| {
            b.iter(|| solve(black_box(&board), Side::White, &config))
        });
    }
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
