//! Cost estimators guiding the clearing search.
//!
//! All estimators map a board and an acting side to a non-negative score,
//! where lower means closer to a cleared board. They are deliberately not
//! admissible: the goal is to reach short solutions quickly, not to certify
//! optimality.
//!
//! Three policies are provided:
//! - `ManhattanSum`: raw sum of manhattan distances over every (own,
//!   opposing) stack pair.
//! - `DiscountedSum`: the same sum with each pair discounted by 2, since a
//!   stack never needs to reach its target, only the target's blast range.
//! - `ClusterDiscount` (the default): `DiscountedSum` computed after
//!   stripping, per own stack, the opposing clusters its boom would already
//!   consume.
use std::collections::VecDeque;

use crate::engine::{Board, Pos, Side};

/// Which estimator `solve` uses to order the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Sum of manhattan distances over all (own, opposing) stack pairs.
    ManhattanSum,
    /// Manhattan sum with each pair discounted by 2 and clamped at zero.
    DiscountedSum,
    /// `DiscountedSum` after removing opposing clusters already in blast
    /// range of an own stack.
    #[default]
    ClusterDiscount,
}

/// Scores `board` from the point of view of `side` under `policy`.
///
/// Returns 0 once `side.opponent()` has no stacks left, so a zero estimate
/// on a goal board is guaranteed for every policy.
pub fn estimate(board: &Board, side: Side, policy: Heuristic) -> u32 {
    let opponent = side.opponent();
    match policy {
        Heuristic::ManhattanSum => board
            .stacks(side)
            .map(|(own, _)| {
                board
                    .stacks(opponent)
                    .map(|(target, _)| manhattan(own, target))
                    .sum::<u32>()
            })
            .sum(),
        Heuristic::DiscountedSum => board
            .stacks(side)
            .map(|(own, _)| {
                board
                    .stacks(opponent)
                    .map(|(target, _)| manhattan(own, target).saturating_sub(2))
                    .sum::<u32>()
            })
            .sum(),
        Heuristic::ClusterDiscount => {
            // The working copy is shared across own stacks, so clusters an
            // earlier stack strips no longer count against later ones. The
            // board-scan order of `stacks` keeps the result deterministic.
            let attackers: Vec<Pos> = board.stacks(side).map(|(pos, _)| pos).collect();
            let mut remaining = board.clone();
            let mut total = 0u32;
            for attacker in attackers {
                remaining = strip_adjacent_clusters(&remaining, attacker, opponent);
                for (target, _) in remaining.stacks(opponent) {
                    let distance = manhattan(attacker, target);
                    // Stripping removed everything inside the 3x3 blast
                    // range, so every survivor is at least two squares away
                    // on some axis and the discount cannot underflow.
                    debug_assert!(distance >= 2);
                    total += distance - 2;
                }
            }
            total
        }
    }
}

/// Manhattan distance between two squares.
fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) as u32 + a.y.abs_diff(b.y) as u32
}

/// Removes from `board` every `target`-side cluster with a member inside the
/// 3x3 neighbourhood of `origin`.
///
/// A cluster is a set of `target` stacks transitively connected through 3x3
/// adjacency among themselves. Unlike `Board::detonate`, the flood fill here
/// spreads through `target` stacks only; stacks of the other side neither
/// stop it nor join it.
fn strip_adjacent_clusters(board: &Board, origin: Pos, target: Side) -> Board {
    let mut next = board.clone();
    let mut queue: VecDeque<Pos> = VecDeque::new();
    for neighbour in origin.neighbours() {
        if is_side(&next, neighbour, target) {
            next.clear(neighbour);
            queue.push_back(neighbour);
        }
    }
    while let Some(cell) = queue.pop_front() {
        for neighbour in cell.neighbours() {
            if is_side(&next, neighbour, target) {
                next.clear(neighbour);
                queue.push_back(neighbour);
            }
        }
    }
    next
}

fn is_side(board: &Board, pos: Pos, side: Side) -> bool {
    matches!(board.stack_at(pos), Some(piece) if piece.side == side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Board;

    #[test]
    fn test_all_policies_zero_on_cleared_board() {
        let board = Board::from_stack_lists(&[[2, 4, 4], [1, 0, 0]], &[]).unwrap();
        for policy in [
            Heuristic::ManhattanSum,
            Heuristic::DiscountedSum,
            Heuristic::ClusterDiscount,
        ] {
            assert_eq!(estimate(&board, Side::White, policy), 0);
        }
    }

    #[test]
    fn test_manhattan_sum_over_pairs() {
        let board = Board::from_stack_lists(&[[1, 0, 0]], &[[1, 3, 0], [2, 0, 4]]).unwrap();
        assert_eq!(estimate(&board, Side::White, Heuristic::ManhattanSum), 7);
    }

    #[test]
    fn test_discounted_sum_clamps_at_zero() {
        let board = Board::from_stack_lists(&[[1, 0, 0]], &[[1, 1, 0], [1, 0, 3]]).unwrap();
        // Distances 1 and 3 discount to 0 and 1.
        assert_eq!(estimate(&board, Side::White, Heuristic::DiscountedSum), 1);
    }

    #[test]
    fn test_cluster_discount_strips_adjacent_cluster() {
        // The black stack sits diagonally adjacent to the white one, so the
        // default policy treats the position as winnable on the spot.
        let board = Board::from_stack_lists(&[[1, 4, 4]], &[[1, 5, 5]]).unwrap();
        assert_eq!(estimate(&board, Side::White, Heuristic::ClusterDiscount), 0);
        assert_eq!(estimate(&board, Side::White, Heuristic::ManhattanSum), 2);
    }

    #[test]
    fn test_cluster_discount_two_squares_away() {
        // Chebyshev distance 2: outside blast range, so nothing is stripped,
        // but the manhattan discount still cancels the distance exactly.
        let board = Board::from_stack_lists(&[[1, 4, 4]], &[[1, 4, 6]]).unwrap();
        assert_eq!(estimate(&board, Side::White, Heuristic::ClusterDiscount), 0);
    }

    #[test]
    fn test_cluster_discount_shared_working_copy() {
        // The first white stack strips the chain at (1,1)-(2,2); the second
        // then only scores against the survivor at (5,5).
        let board = Board::from_stack_lists(
            &[[1, 0, 0], [1, 7, 7]],
            &[[1, 1, 1], [1, 2, 2], [1, 5, 5]],
        )
        .unwrap();
        // (0,0): strips (1,1) and through it (2,2); term for (5,5) is 10-2.
        // (7,7): (5,5) is outside its blast range; term is 4-2.
        assert_eq!(estimate(&board, Side::White, Heuristic::ClusterDiscount), 10);
    }

    #[test]
    fn test_cluster_strip_ignores_own_side() {
        // A friendly stack inside the blast range is not stripped and does
        // not carry the flood fill onward to the black stack behind it.
        let board = Board::from_stack_lists(&[[1, 0, 0], [1, 1, 1]], &[[1, 3, 3]]).unwrap();
        let stripped = strip_adjacent_clusters(&board, Pos::new(0, 0), Side::Black);
        assert_eq!(stripped.stack_count(Side::White), 2);
        assert_eq!(stripped.stack_count(Side::Black), 1);
    }

    #[test]
    fn test_default_policy_is_cluster_discount() {
        assert_eq!(Heuristic::default(), Heuristic::ClusterDiscount);
    }

    #[test]
    fn test_no_own_stacks_scores_zero() {
        let board = Board::from_stack_lists(&[], &[[3, 3, 3]]).unwrap();
        for policy in [
            Heuristic::ManhattanSum,
            Heuristic::DiscountedSum,
            Heuristic::ClusterDiscount,
        ] {
            assert_eq!(estimate(&board, Side::White, policy), 0);
        }
    }
}
