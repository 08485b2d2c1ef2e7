use expendibots_solver::engine::Side;
use expendibots_solver::heuristics::Heuristic;
use expendibots_solver::solver::{solve, SearchConfig};
use expendibots_solver::utils::random_board;
use std::collections::HashMap;

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;
const WHITE_STACKS: usize = 3;
const BLACK_STACKS: usize = 3;
// Keeps a single degenerate board from stalling the whole batch.
const MAX_EXPANSIONS_PER_RUN: usize = 200_000;

#[derive(Clone, Copy, Default)]
struct PolicyTally {
    solved: usize,
    total_actions: usize,
    total_expanded: usize,
}

fn main() {
    env_logger::init();

    let policies: Vec<(&str, Heuristic)> = vec![
        ("Manhattan", Heuristic::ManhattanSum),
        ("Discounted", Heuristic::DiscountedSum),
        ("Cluster", Heuristic::ClusterDiscount),
    ];

    let mut tallies: HashMap<&str, PolicyTally> = HashMap::new();
    for (name, _) in &policies {
        tallies.insert(*name, PolicyTally::default());
    }

    println!(
        "Starting heuristic evaluation for {} boards...",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let current_seed = START_SEED + board_idx as u64;
        let initial_board = random_board(current_seed, WHITE_STACKS, BLACK_STACKS);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        for (policy_name, policy) in &policies {
            let config = SearchConfig::new()
                .with_heuristic(*policy)
                .with_max_expansions(MAX_EXPANSIONS_PER_RUN);
            let report = solve(&initial_board, Side::White, &config);

            let tally = tallies.get_mut(*policy_name).unwrap();
            match report.outcome.solution() {
                Some(solution) => {
                    println!(
                        "  Policy: {:<10}, Actions: {:<3}, Expanded: {}",
                        policy_name,
                        solution.len(),
                        report.stats.expanded
                    );
                    tally.solved += 1;
                    tally.total_actions += solution.len();
                    tally.total_expanded += report.stats.expanded;
                }
                None => {
                    println!(
                        "  Policy: {:<10}, unsolved after {} expansions",
                        policy_name, report.stats.expanded
                    );
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!(
        "Number of boards evaluated: {}",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );
    println!(
        "Policies evaluated: {}",
        policies
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("\n--- Averages over solved boards ---");

    let mut summary: Vec<(&str, f64, f64, usize)> = Vec::new();
    for (policy_name, _) in &policies {
        let tally = tallies[*policy_name];
        if tally.solved == 0 {
            println!("Policy {:<10}: no boards solved.", policy_name);
            continue;
        }
        let avg_actions = tally.total_actions as f64 / tally.solved as f64;
        let avg_expanded = tally.total_expanded as f64 / tally.solved as f64;
        summary.push((*policy_name, avg_expanded, avg_actions, tally.solved));
    }

    // Cheapest policies first: sort by average expansions ascending.
    summary.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (policy_name, avg_expanded, avg_actions, solved) in summary {
        println!(
            "Policy {:<10}: Avg Expanded = {:<10.1} Avg Actions = {:<5.2} Solved = {}/{}",
            policy_name, avg_expanded, avg_actions, solved, NUM_RANDOM_BOARDS_FOR_EVALUATION
        );
    }
}
