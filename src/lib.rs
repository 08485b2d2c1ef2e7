//! # Expendibots Solver Library
//!
//! This library provides the board mechanics of the Expendibots game and a
//! heuristic best-first solver that finds a short sequence of moves and
//! booms clearing every opposing stack from the 8x8 board.
//!
//! It is used by two binaries:
//! - `ai_solver`: Reads a JSON board description and prints the action
//!   sequence the search found, in referee notation.
//! - `heuristic_evaluator`: Runs the estimator policies against batches of
//!   seeded random boards and compares their cost and solution quality.
//!
//! ## Modules
//! - `engine`: The board representation (`Board`), stacks and coordinates,
//!   the two state transitions (`relocate`, `detonate`), and `Action`.
//! - `solver`: The `solve` entry point with its configuration, outcome and
//!   statistics types.
//! - `heuristics`: The estimator policies ordering the solver's frontier.
//! - `error`: The `SetupError` type covering every invalid board description.
//! - `utils`: Board construction helpers: JSON input, text fixtures and
//!   seeded random scenarios.

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, are accessed via their full path,
// e.g. `expendibots_solver::solver::solve()`. This keeps the top-level
// library namespace cleaner.
