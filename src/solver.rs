//! Best-first search for a short clearing action sequence.
//!
//! The solver runs an A*-style loop over whole `Board` states with unit
//! action costs:
//! - `SearchConfig`: heuristic policy plus optional expansion and wall-clock
//!   budgets.
//! - `solve`: expands states in ascending `f = g + h` order until the acting
//!   side's opponent has no stacks left.
//! - `SearchReport`: the outcome (`Solved`, `Exhausted` or `OutOfBudget`)
//!   together with the counters accumulated along the way.
//!
//! Visited boards are deduplicated structurally. A state is expanded at most
//! once; while queued it is re-queued only for a strictly cheaper path, and
//! the superseded frontier entry is skipped when it eventually pops.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::time::{Duration, Instant};

use itertools::iproduct;
use log::{debug, trace};

use crate::engine::{Action, Board, Pos, Side, DIRECTIONS};
use crate::heuristics::{estimate, Heuristic};

/// Tuning knobs for `solve`.
///
/// The default configuration uses the `ClusterDiscount` estimator and no
/// budget: the search stops only on success or an exhausted frontier.
#[derive(Clone, Debug, Default)]
pub struct SearchConfig {
    /// Estimator policy ordering the frontier.
    pub heuristic: Heuristic,
    /// Give up after this many node expansions.
    pub max_expansions: Option<usize>,
    /// Give up once this much wall-clock time has passed.
    pub max_time: Option<Duration>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the estimator policy.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Caps the number of expansions before the run reports `OutOfBudget`.
    pub fn with_max_expansions(mut self, cap: usize) -> Self {
        self.max_expansions = Some(cap);
        self
    }

    /// Caps the wall-clock time before the run reports `OutOfBudget`.
    pub fn with_max_time(mut self, cap: Duration) -> Self {
        self.max_time = Some(cap);
        self
    }
}

/// A clearing sequence found by `solve`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Actions in play order. Replaying them through `Board::apply` from the
    /// starting board yields `final_board`.
    pub actions: Vec<Action>,
    /// The board after the last action, with no opposing stacks left.
    pub final_board: Board,
}

impl Solution {
    /// Number of actions in the sequence.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True for the degenerate solution on a board that starts cleared.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Counters accumulated during one search run.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    pub expanded: usize,
    /// Successor states generated, duplicates included.
    pub generated: usize,
    /// Successors dropped because an equal board was already expanded, or
    /// queued at least as cheaply.
    pub duplicates: usize,
    /// Frontier entries discarded on pop because their board had already
    /// been expanded through a cheaper copy.
    pub stale_skips: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// How a search run ended.
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// A clearing sequence was found.
    Solved(Solution),
    /// Every reachable state was tried without clearing the board.
    Exhausted,
    /// An expansion or time budget was hit first.
    OutOfBudget,
}

impl SearchOutcome {
    /// The solution, if this outcome carries one.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Outcome and counters of one `solve` call.
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// One reached state. Parent links index back into the arena, so path
/// reconstruction never clones a board.
struct Node {
    state: Board,
    parent: Option<usize>,
    action: Option<Action>,
    g: u32,
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed
/// to pop the lowest `f` first; ties prefer the lower estimate, then the
/// earlier insertion.
#[derive(PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    h: u32,
    id: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Searches for a short sequence of `side` actions that removes every
/// opposing stack from `board`.
///
/// Costs are uniform (one per action) and the estimators are not admissible,
/// so the result is a short solution rather than a certified optimal one.
/// When the starting board already has no opposing stacks the run succeeds
/// immediately with an empty action list, whatever the budgets say.
///
/// # Arguments
/// * `board`: The starting position.
/// * `side`: The acting side; the opposing side never takes a turn.
/// * `config`: Estimator policy and optional budgets.
///
/// # Returns
/// A `SearchReport` carrying the outcome and the run's counters.
///
/// # Examples
/// ```
/// use expendibots_solver::engine::{Board, Side};
/// use expendibots_solver::solver::{solve, SearchConfig};
///
/// let board = Board::from_stack_lists(&[[1, 4, 4]], &[[1, 4, 5]]).unwrap();
/// let report = solve(&board, Side::White, &SearchConfig::default());
/// assert_eq!(report.outcome.solution().unwrap().len(), 1);
/// ```
pub fn solve(board: &Board, side: Side, config: &SearchConfig) -> SearchReport {
    let start = Instant::now();
    let opponent = side.opponent();
    let mut stats = SearchStats::default();

    let mut arena: Vec<Node> = Vec::new();
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut closed: HashSet<Board> = HashSet::new();
    // Cheapest g at which each still-queued board was pushed.
    let mut queued: HashMap<Board, u32> = HashMap::new();

    let h0 = estimate(board, side, config.heuristic);
    arena.push(Node {
        state: board.clone(),
        parent: None,
        action: None,
        g: 0,
    });
    queued.insert(board.clone(), 0);
    open.push(OpenEntry { f: h0, h: h0, id: 0 });
    debug!(
        "search start: {} own stacks vs {} opposing, h0={}, policy {:?}",
        board.stack_count(side),
        board.stack_count(opponent),
        h0,
        config.heuristic
    );

    while let Some(entry) = open.pop() {
        let state = arena[entry.id].state.clone();
        // A cheaper copy of this board was expanded already.
        if closed.contains(&state) {
            stats.stale_skips += 1;
            continue;
        }

        if state.stack_count(opponent) == 0 {
            stats.elapsed = start.elapsed();
            let actions = reconstruct(&arena, entry.id);
            debug!(
                "solved: {} actions after {} expansions in {:?}",
                actions.len(),
                stats.expanded,
                stats.elapsed
            );
            return SearchReport {
                outcome: SearchOutcome::Solved(Solution {
                    actions,
                    final_board: state,
                }),
                stats,
            };
        }

        if over_budget(config, &stats, start) {
            stats.elapsed = start.elapsed();
            debug!(
                "budget hit after {} expansions, {} entries still queued",
                stats.expanded,
                open.len()
            );
            return SearchReport {
                outcome: SearchOutcome::OutOfBudget,
                stats,
            };
        }

        queued.remove(&state);
        closed.insert(state.clone());
        stats.expanded += 1;
        let parent_g = arena[entry.id].g;
        trace!(
            "expand #{}: g={} h={} open={}",
            stats.expanded,
            parent_g,
            entry.h,
            open.len()
        );

        for (action, successor) in successors(&state, side) {
            stats.generated += 1;
            if closed.contains(&successor) {
                stats.duplicates += 1;
                continue;
            }
            let g = parent_g + 1;
            if queued.get(&successor).is_some_and(|&best| best <= g) {
                stats.duplicates += 1;
                continue;
            }
            let h = estimate(&successor, side, config.heuristic);
            let id = arena.len();
            queued.insert(successor.clone(), g);
            open.push(OpenEntry { f: g + h, h, id });
            arena.push(Node {
                state: successor,
                parent: Some(entry.id),
                action: Some(action),
                g,
            });
        }
    }

    stats.elapsed = start.elapsed();
    debug!("frontier exhausted after {} expansions", stats.expanded);
    SearchReport {
        outcome: SearchOutcome::Exhausted,
        stats,
    }
}

/// Enumerates every legal action of `side` on `state` with its resulting
/// board: all (count, steps, direction) relocations stack by stack, then one
/// detonation per stack. Stacks arrive in board-scan order, so the expansion
/// order, and with it tie-breaking, is deterministic.
fn successors(state: &Board, side: Side) -> Vec<(Action, Board)> {
    let mut out = Vec::new();
    let stacks: Vec<(Pos, u32)> = state.stacks(side).collect();
    for &(from, size) in &stacks {
        for (count, steps, direction) in iproduct!(1..=size, 1..=size, DIRECTIONS) {
            let to = match from.step(direction, steps) {
                Some(pos) => pos,
                None => continue,
            };
            if let Some(next) = state.relocate(count, from, direction, steps) {
                out.push((Action::Move { count, from, to }, next));
            }
        }
    }
    for &(at, _) in &stacks {
        out.push((Action::Boom { at }, state.detonate(at)));
    }
    out
}

fn over_budget(config: &SearchConfig, stats: &SearchStats, start: Instant) -> bool {
    if config.max_expansions.is_some_and(|cap| stats.expanded >= cap) {
        return true;
    }
    config.max_time.is_some_and(|cap| start.elapsed() >= cap)
}

/// Walks parent links from `goal` back to the root and returns the recorded
/// actions in play order.
fn reconstruct(arena: &[Node], goal: usize) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut cursor = Some(goal);
    while let Some(id) = cursor {
        if let Some(action) = arena[id].action {
            actions.push(action);
        }
        cursor = arena[id].parent;
    }
    actions.reverse();
    actions
}
