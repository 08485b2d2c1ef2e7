use clap::Parser;
use expendibots_solver::engine::{Board, Side};
use expendibots_solver::heuristics::Heuristic;
use expendibots_solver::solver::{solve, SearchConfig, SearchOutcome};
use expendibots_solver::utils::board_from_json_str;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (JSON with "white" and "black" stack lists)
    board_file: PathBuf,

    /// Estimator policy: cluster, discounted or manhattan
    #[clap(long, default_value = "cluster")]
    heuristic: String,

    /// Side to clear the board for: w or b
    #[clap(long, default_value = "w")]
    side: String,

    /// Stop after this many node expansions
    #[clap(long)]
    max_expansions: Option<usize>,

    /// Stop after this many milliseconds of search time
    #[clap(long)]
    max_time_ms: Option<u64>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    board_from_json_str(&content).map_err(|e| format!("Invalid board description: {}", e))
}

fn parse_heuristic(name: &str) -> Result<Heuristic, String> {
    match name {
        "cluster" => Ok(Heuristic::ClusterDiscount),
        "discounted" => Ok(Heuristic::DiscountedSum),
        "manhattan" => Ok(Heuristic::ManhattanSum),
        other => Err(format!(
            "Unknown heuristic '{}' (expected cluster, discounted or manhattan)",
            other
        )),
    }
}

fn parse_side(name: &str) -> Result<Side, String> {
    match name {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        other => Err(format!("Unknown side '{}' (expected w or b)", other)),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let board = match read_board_file(&args.board_file) {
        Ok(board) => board,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };
    let heuristic = match parse_heuristic(&args.heuristic) {
        Ok(heuristic) => heuristic,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };
    let side = match parse_side(&args.side) {
        Ok(side) => side,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    let mut config = SearchConfig::new().with_heuristic(heuristic);
    if let Some(cap) = args.max_expansions {
        config = config.with_max_expansions(cap);
    }
    if let Some(ms) = args.max_time_ms {
        config = config.with_max_time(Duration::from_millis(ms));
    }

    println!("Loaded board from {}\n", args.board_file.display());
    println!("Initial board state:\n{}\n", board);
    println!("Searching for a clearing sequence...\n");

    let report = solve(&board, side, &config);
    match report.outcome {
        SearchOutcome::Solved(solution) => {
            println!("Solution found ({} actions):", solution.len());
            if solution.is_empty() {
                println!("  Board is already clear.");
            } else {
                for (i, action) in solution.actions.iter().enumerate() {
                    println!("  Turn {}: {}", i + 1, action);
                }
            }
            println!("\nFinal board state:\n{}\n", solution.final_board);
        }
        SearchOutcome::Exhausted => {
            println!("No solution exists for this board.\n");
        }
        SearchOutcome::OutOfBudget => {
            println!("Search stopped: budget exhausted before a solution was found.\n");
        }
    }
    println!(
        "Expanded {} nodes, generated {} ({} duplicates dropped) in {:?}.",
        report.stats.expanded,
        report.stats.generated,
        report.stats.duplicates,
        report.stats.elapsed
    );
}
