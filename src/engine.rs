//! Core game engine for the Expendibots board.
//!
//! This module defines the game's fundamental components:
//! - `Side`: The two players, White and Black.
//! - `Pos` and `Direction`: Coordinates on the 8x8 grid and the four cardinal
//!   moves between them.
//! - `Piece`: A stack of one or more tokens belonging to a single side.
//! - `Board`: The grid of stacks, with the two state transitions of the game,
//!   `relocate` (move part of a stack) and `detonate` (boom a cell and cascade
//!   through every stack in blast range).
//! - `Action`: A recorded move or boom, printable in referee notation.
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

use crate::error::SetupError;

/// Defines the size of the game board (width and height).
/// The board is always square: 8 columns by 8 rows.
pub const BOARD_SIZE: usize = 8;

/// Largest stack count accepted in a board description. Setups are hand-written
/// or generated from small piece budgets, so anything beyond this is treated as
/// a malformed input rather than a playable position.
pub const MAX_SETUP_COUNT: u32 = 10_000;

/// The side a stack belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// The white player, the side the solver acts for by convention.
    White,
    /// The black player.
    Black,
}

impl Side {
    /// Returns the opposing side.
    ///
    /// # Examples
    /// ```
    /// use expendibots_solver::engine::Side;
    /// assert_eq!(Side::White.opponent(), Side::Black);
    /// assert_eq!(Side::Black.opponent(), Side::White);
    /// ```
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Converts the side to its character representation.
    ///
    /// This is used for text-based display and for the token suffix in board
    /// fixtures ("2w", "1b").
    pub fn to_char(self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

/// A square on the board.
///
/// `x` is the column (0 at the left edge) and `y` is the row (0 at the bottom
/// edge). Both are always in `0..BOARD_SIZE` for a constructed `Pos`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    /// Creates a position from in-bounds coordinates.
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(
            (x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE,
            "position ({}, {}) outside the board",
            x,
            y
        );
        Pos { x, y }
    }

    /// Returns the position `steps` squares away in `direction`, or `None` if
    /// that square is off the board.
    ///
    /// # Examples
    /// ```
    /// use expendibots_solver::engine::{Direction, Pos};
    /// let p = Pos::new(4, 6);
    /// assert_eq!(p.step(Direction::North, 1), Some(Pos::new(4, 7)));
    /// assert_eq!(p.step(Direction::North, 2), None);
    /// ```
    pub fn step(self, direction: Direction, steps: u32) -> Option<Pos> {
        let (dx, dy) = direction.offset();
        let x = self.x as i64 + dx as i64 * steps as i64;
        let y = self.y as i64 + dy as i64 * steps as i64;
        if (0..BOARD_SIZE as i64).contains(&x) && (0..BOARD_SIZE as i64).contains(&y) {
            Some(Pos {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Returns the up-to-eight squares in the 3x3 neighbourhood around `self`,
    /// excluding `self` and anything off the board. This is the blast range of
    /// a boom at `self`.
    pub(crate) fn neighbours(self) -> SmallVec<[Pos; 8]> {
        let mut out = SmallVec::new();
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let x = self.x as i64 + dx;
                let y = self.y as i64 + dy;
                if (0..BOARD_SIZE as i64).contains(&x) && (0..BOARD_SIZE as i64).contains(&y) {
                    out.push(Pos {
                        x: x as u8,
                        y: y as u8,
                    });
                }
            }
        }
        out
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One of the four cardinal movement directions.
///
/// North is towards increasing `y`, East towards increasing `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// All four directions, in the order move generation scans them.
pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    /// The `(dx, dy)` unit offset of one step in this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

/// A stack of tokens on a single square.
///
/// A stack always has `count >= 1`; an empty square is represented by the
/// absence of a `Piece`, never by a zero count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub side: Side,
    pub count: u32,
}

/// Represents the game board as an 8x8 grid of optional stacks.
///
/// The grid is indexed `[y][x]`. Boards are immutable from the caller's point
/// of view: `relocate` and `detonate` return a fresh board and leave `self`
/// untouched, so search nodes can share predecessors freely.
///
/// Structural equality (`PartialEq`, `Hash`) covers the full grid, which makes
/// `Board` directly usable as the key of visited-state sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new board with every square empty.
    ///
    /// # Examples
    /// ```
    /// use expendibots_solver::engine::{Board, Side};
    /// let board = Board::new_empty();
    /// assert_eq!(board.stack_count(Side::White), 0);
    /// assert_eq!(board.stack_count(Side::Black), 0);
    /// ```
    pub fn new_empty() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from per-side stack lists, validating every entry.
    ///
    /// Each entry is a `[count, x, y]` triple, the order used by the JSON
    /// board format. Validation rejects off-board coordinates, non-positive
    /// or oversized counts, and two stacks on the same square (including a
    /// white and a black one).
    ///
    /// # Arguments
    /// * `white`: Stack triples for the white side.
    /// * `black`: Stack triples for the black side.
    ///
    /// # Returns
    /// The populated board, or the first `SetupError` encountered.
    pub fn from_stack_lists(white: &[[i64; 3]], black: &[[i64; 3]]) -> Result<Board, SetupError> {
        let mut board = Board::new_empty();
        for (side, triples) in [(Side::White, white), (Side::Black, black)] {
            for &[count, x, y] in triples {
                if !(0..BOARD_SIZE as i64).contains(&x) || !(0..BOARD_SIZE as i64).contains(&y) {
                    return Err(SetupError::OutOfBounds { x, y });
                }
                if !(1..=MAX_SETUP_COUNT as i64).contains(&count) {
                    return Err(SetupError::BadCount { count, x, y });
                }
                let pos = Pos::new(x as u8, y as u8);
                if board.is_occupied(pos) {
                    return Err(SetupError::DuplicatePosition { x: pos.x, y: pos.y });
                }
                board.grid[pos.y as usize][pos.x as usize] = Some(Piece {
                    side,
                    count: count as u32,
                });
            }
        }
        Ok(board)
    }

    /// Returns the stack on `pos`, if any.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board dimensions (`pos.x < BOARD_SIZE`,
    /// `pos.y < BOARD_SIZE`).
    pub fn stack_at(&self, pos: Pos) -> Option<Piece> {
        self.grid[pos.y as usize][pos.x as usize]
    }

    /// Removes the stack on `pos`, if any.
    pub(crate) fn clear(&mut self, pos: Pos) {
        self.grid[pos.y as usize][pos.x as usize] = None;
    }

    /// Returns `true` if a stack of either side occupies `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board dimensions.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.stack_at(pos).is_some()
    }

    /// Iterates over `side`'s stacks as `(position, count)` pairs.
    ///
    /// The iteration follows board-scan order: ascending `y`, then ascending
    /// `x` within a row. Successor generation and the heuristics rely on this
    /// order being stable, so two equal boards always enumerate identically.
    pub fn stacks(&self, side: Side) -> impl Iterator<Item = (Pos, u32)> + '_ {
        (0..BOARD_SIZE as u8)
            .flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Pos { x, y }))
            .filter_map(move |pos| match self.stack_at(pos) {
                Some(piece) if piece.side == side => Some((pos, piece.count)),
                _ => None,
            })
    }

    /// Number of squares occupied by `side`.
    pub fn stack_count(&self, side: Side) -> usize {
        self.stacks(side).count()
    }

    /// Total number of tokens `side` has on the board, over all stacks.
    pub fn total_pieces(&self, side: Side) -> u32 {
        self.stacks(side).map(|(_, count)| count).sum()
    }

    /// Moves `count` tokens from the stack on `from`, `steps` squares in
    /// `direction`, returning the resulting board.
    ///
    /// The move is legal when all of the following hold:
    /// - `from` holds a stack with at least `count` tokens, `count >= 1`;
    /// - `steps` is between 1 and the size of the source stack (the whole
    ///   stack on `from`, not just the part being moved);
    /// - the destination square is on the board and not occupied by the
    ///   opposing side.
    ///
    /// Tokens landing on a friendly stack merge with it; landing on an empty
    /// square forms a new stack. Moving the entire stack empties `from`.
    /// Opposing stacks between `from` and the destination do not block the
    /// move, only the destination square itself matters.
    ///
    /// # Returns
    /// The new board, or `None` if the move is illegal.
    pub fn relocate(
        &self,
        count: u32,
        from: Pos,
        direction: Direction,
        steps: u32,
    ) -> Option<Board> {
        let source = self.stack_at(from)?;
        if count == 0 || count > source.count || steps == 0 || steps > source.count {
            return None;
        }
        let to = from.step(direction, steps)?;
        if let Some(dest) = self.stack_at(to) {
            if dest.side != source.side {
                return None;
            }
        }

        let mut next = self.clone();
        next.grid[from.y as usize][from.x as usize] = if count == source.count {
            None
        } else {
            Some(Piece {
                side: source.side,
                count: source.count - count,
            })
        };
        let landed = match next.stack_at(to) {
            Some(dest) => dest.count + count,
            None => count,
        };
        next.grid[to.y as usize][to.x as usize] = Some(Piece {
            side: source.side,
            count: landed,
        });
        Some(next)
    }

    /// Detonates the stack on `at` and returns the resulting board.
    ///
    /// The stack on `at` is removed, along with every stack of either side in
    /// its 3x3 blast range; each of those detonates in turn, so the removal
    /// flood-fills through chains of mutually adjacent stacks. Detonating an
    /// empty square is a no-op and returns an unchanged board.
    ///
    /// Cells are removed as soon as they are discovered, before their own
    /// neighbourhood is examined, so a cell enters the cascade at most once
    /// and the cascade always terminates.
    pub fn detonate(&self, at: Pos) -> Board {
        let mut next = self.clone();
        if !next.is_occupied(at) {
            return next;
        }

        let mut queue: VecDeque<Pos> = VecDeque::new();
        next.clear(at);
        queue.push_back(at);
        while let Some(cell) = queue.pop_front() {
            for neighbour in cell.neighbours() {
                if next.is_occupied(neighbour) {
                    next.clear(neighbour);
                    queue.push_back(neighbour);
                }
            }
        }
        next
    }

    /// Applies an `Action` to the board, re-deriving and re-checking the
    /// underlying operator.
    ///
    /// For a `Move` the `from`/`to` pair must be axis-aligned and the implied
    /// relocation legal; for a `Boom` the target square must be occupied.
    /// Replaying a recorded action sequence through `apply` reproduces the
    /// board it was recorded from.
    ///
    /// # Returns
    /// The new board, or `None` if the action is not legal on `self`.
    pub fn apply(&self, action: &Action) -> Option<Board> {
        match *action {
            Action::Move { count, from, to } => {
                let (direction, steps) = direction_between(from, to)?;
                self.relocate(count, from, direction, steps)
            }
            Action::Boom { at } => {
                if self.is_occupied(at) {
                    Some(self.detonate(at))
                } else {
                    None
                }
            }
        }
    }
}

/// Returns the direction and step count leading from `from` to `to`, or
/// `None` if the two squares are not distinct and axis-aligned.
fn direction_between(from: Pos, to: Pos) -> Option<(Direction, u32)> {
    let dx = to.x as i64 - from.x as i64;
    let dy = to.y as i64 - from.y as i64;
    match (dx, dy) {
        (0, 0) => None,
        (0, d) if d > 0 => Some((Direction::North, d as u32)),
        (0, d) => Some((Direction::South, (-d) as u32)),
        (d, 0) if d > 0 => Some((Direction::East, d as u32)),
        (d, 0) => Some((Direction::West, (-d) as u32)),
        _ => None,
    }
}

impl fmt::Display for Board {
    /// Renders the board with the `y = 7` row on top, matching the printed
    /// orientation of the game: North is up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} |", y)?;
            for x in 0..BOARD_SIZE {
                match self.grid[y][x] {
                    Some(piece) => {
                        let cell = format!("{}{}", piece.count, piece.side.to_char());
                        write!(f, "{:>4}", cell)?;
                    }
                    None => write!(f, "{:>4}", '.')?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  +")?;
        for _ in 0..BOARD_SIZE {
            write!(f, "----")?;
        }
        writeln!(f)?;
        write!(f, "   ")?;
        for x in 0..BOARD_SIZE {
            write!(f, "{:>4}", x)?;
        }
        Ok(())
    }
}

/// A single turn in referee notation: move some tokens, or boom a square.
///
/// # Examples
/// ```
/// use expendibots_solver::engine::{Action, Pos};
/// let mv = Action::Move { count: 2, from: Pos::new(4, 4), to: Pos::new(4, 6) };
/// assert_eq!(mv.to_string(), "MOVE 2 (4,4) (4,6)");
/// let boom = Action::Boom { at: Pos::new(0, 7) };
/// assert_eq!(boom.to_string(), "BOOM (0,7)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move `count` tokens from the stack on `from` to `to`.
    Move { count: u32, from: Pos, to: Pos },
    /// Detonate the stack on `at`.
    Boom { at: Pos },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move { count, from, to } => write!(f, "MOVE {} {} {}", count, from, to),
            Action::Boom { at } => write!(f, "BOOM {}", at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_rows;

    fn pieces(board: &Board) -> u32 {
        board.total_pieces(Side::White) + board.total_pieces(Side::Black)
    }

    #[test]
    fn test_step_stays_on_board() {
        let p = Pos::new(0, 0);
        assert_eq!(p.step(Direction::East, 3), Some(Pos::new(3, 0)));
        assert_eq!(p.step(Direction::West, 1), None);
        assert_eq!(p.step(Direction::South, 1), None);
        assert_eq!(p.step(Direction::North, 7), Some(Pos::new(0, 7)));
        assert_eq!(p.step(Direction::North, 8), None);
    }

    #[test]
    fn test_neighbours_centre_and_corner() {
        assert_eq!(Pos::new(4, 4).neighbours().len(), 8);
        assert_eq!(Pos::new(0, 0).neighbours().len(), 3);
        assert_eq!(Pos::new(7, 0).neighbours().len(), 3);
        assert_eq!(Pos::new(0, 4).neighbours().len(), 5);
        assert!(!Pos::new(4, 4).neighbours().contains(&Pos::new(4, 4)));
    }

    #[test]
    fn test_from_stack_lists_valid() {
        let board = Board::from_stack_lists(&[[2, 4, 4], [1, 0, 0]], &[[3, 7, 7]]).unwrap();
        assert_eq!(
            board.stack_at(Pos::new(4, 4)),
            Some(Piece {
                side: Side::White,
                count: 2
            })
        );
        assert_eq!(board.stack_count(Side::White), 2);
        assert_eq!(board.total_pieces(Side::White), 3);
        assert_eq!(board.total_pieces(Side::Black), 3);
    }

    #[test]
    fn test_from_stack_lists_rejects_out_of_bounds() {
        let err = Board::from_stack_lists(&[[1, 8, 0]], &[]).unwrap_err();
        assert!(matches!(err, SetupError::OutOfBounds { x: 8, y: 0 }));
        let err = Board::from_stack_lists(&[], &[[1, 0, -1]]).unwrap_err();
        assert!(matches!(err, SetupError::OutOfBounds { x: 0, y: -1 }));
    }

    #[test]
    fn test_from_stack_lists_rejects_bad_count() {
        let err = Board::from_stack_lists(&[[0, 3, 3]], &[]).unwrap_err();
        assert!(matches!(err, SetupError::BadCount { count: 0, .. }));
        let err = Board::from_stack_lists(&[[-2, 3, 3]], &[]).unwrap_err();
        assert!(matches!(err, SetupError::BadCount { count: -2, .. }));
        let err = Board::from_stack_lists(&[[20_000, 3, 3]], &[]).unwrap_err();
        assert!(matches!(err, SetupError::BadCount { count: 20_000, .. }));
    }

    #[test]
    fn test_from_stack_lists_rejects_shared_square() {
        let err = Board::from_stack_lists(&[[1, 3, 3], [1, 3, 3]], &[]).unwrap_err();
        assert!(matches!(err, SetupError::DuplicatePosition { x: 3, y: 3 }));
        // A white stack and a black stack cannot share a square either.
        let err = Board::from_stack_lists(&[[1, 2, 5]], &[[1, 2, 5]]).unwrap_err();
        assert!(matches!(err, SetupError::DuplicatePosition { x: 2, y: 5 }));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_stack_at_panics_off_board() {
        // `Pos` fields are public, so a raw literal can sidestep the
        // `Pos::new` bounds assertion.
        let board = Board::new_empty();
        let _ = board.stack_at(Pos { x: 8, y: 0 });
    }

    #[test]
    fn test_stacks_scan_order() {
        let board = Board::from_stack_lists(&[[1, 5, 2], [1, 1, 2], [1, 3, 0]], &[]).unwrap();
        let order: Vec<Pos> = board.stacks(Side::White).map(|(pos, _)| pos).collect();
        assert_eq!(order, vec![Pos::new(3, 0), Pos::new(1, 2), Pos::new(5, 2)]);
    }

    #[test]
    fn test_relocate_partial_leaves_remainder() {
        let board = Board::from_stack_lists(&[[3, 4, 4]], &[]).unwrap();
        let next = board
            .relocate(2, Pos::new(4, 4), Direction::North, 3)
            .unwrap();
        assert_eq!(
            next.stack_at(Pos::new(4, 4)),
            Some(Piece {
                side: Side::White,
                count: 1
            })
        );
        assert_eq!(
            next.stack_at(Pos::new(4, 7)),
            Some(Piece {
                side: Side::White,
                count: 2
            })
        );
        assert_eq!(pieces(&next), pieces(&board));
        // The source board is untouched.
        assert_eq!(board.stack_at(Pos::new(4, 4)).unwrap().count, 3);
    }

    #[test]
    fn test_relocate_whole_stack_empties_source() {
        let board = Board::from_stack_lists(&[[2, 1, 1]], &[]).unwrap();
        let next = board
            .relocate(2, Pos::new(1, 1), Direction::East, 1)
            .unwrap();
        assert_eq!(next.stack_at(Pos::new(1, 1)), None);
        assert_eq!(next.stack_at(Pos::new(2, 1)).unwrap().count, 2);
    }

    #[test]
    fn test_relocate_merges_friendly_stacks() {
        let board = Board::from_stack_lists(&[[2, 2, 2], [3, 2, 4]], &[]).unwrap();
        let next = board
            .relocate(1, Pos::new(2, 2), Direction::North, 2)
            .unwrap();
        assert_eq!(next.stack_at(Pos::new(2, 4)).unwrap().count, 4);
        assert_eq!(next.stack_at(Pos::new(2, 2)).unwrap().count, 1);
        assert_eq!(next.stack_count(Side::White), 2);
    }

    #[test]
    fn test_relocate_steps_bounded_by_stack_size() {
        let board = Board::from_stack_lists(&[[2, 3, 3]], &[]).unwrap();
        // A 2-stack may travel one or two squares, never three.
        assert!(board
            .relocate(1, Pos::new(3, 3), Direction::East, 2)
            .is_some());
        assert!(board
            .relocate(1, Pos::new(3, 3), Direction::East, 3)
            .is_none());
        // The bound comes from the source stack, not the moved count.
        assert!(board
            .relocate(2, Pos::new(3, 3), Direction::East, 2)
            .is_some());
    }

    #[test]
    fn test_relocate_rejects_bad_inputs() {
        let board = Board::from_stack_lists(&[[2, 0, 0]], &[[1, 2, 0]]).unwrap();
        let from = Pos::new(0, 0);
        // Empty source square.
        assert!(board
            .relocate(1, Pos::new(5, 5), Direction::North, 1)
            .is_none());
        // Zero tokens or more tokens than the stack holds.
        assert!(board.relocate(0, from, Direction::North, 1).is_none());
        assert!(board.relocate(3, from, Direction::North, 1).is_none());
        // Zero steps.
        assert!(board.relocate(1, from, Direction::North, 0).is_none());
        // Off the board.
        assert!(board.relocate(1, from, Direction::West, 1).is_none());
        // Onto an opposing stack.
        assert!(board.relocate(1, from, Direction::East, 2).is_none());
        assert!(board.relocate(2, from, Direction::East, 2).is_none());
    }

    #[test]
    fn test_detonate_single_stack() {
        let board = Board::from_stack_lists(&[[1, 0, 0]], &[[2, 7, 7]]).unwrap();
        let next = board.detonate(Pos::new(0, 0));
        assert_eq!(next.stack_count(Side::White), 0);
        // Out of blast range, so the black stack survives.
        assert_eq!(next.stack_at(Pos::new(7, 7)).unwrap().count, 2);
    }

    #[test]
    fn test_detonate_empty_square_is_noop() {
        let board = Board::from_stack_lists(&[[1, 0, 0]], &[]).unwrap();
        let next = board.detonate(Pos::new(4, 4));
        assert_eq!(next, board);
    }

    #[test]
    fn test_detonate_cascades_through_chain() {
        // A diagonal chain of stacks, each within blast range of the next.
        let board = board_from_str_rows(&[
            ".  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
            ".  .  .  .  1b .  .  .",
            ".  .  .  2b .  .  .  .",
            ".  .  1b .  .  .  .  .",
            ".  1w .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
        ])
        .unwrap();
        let next = board.detonate(Pos::new(1, 1));
        assert_eq!(next.stack_count(Side::White), 0);
        assert_eq!(next.stack_count(Side::Black), 0);
    }

    #[test]
    fn test_detonate_spares_disconnected_stacks() {
        let board = board_from_str_rows(&[
            "1b .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
            ".  2b .  .  .  .  .  .",
            "1w .  .  .  .  .  .  .",
            ".  .  .  .  .  .  .  .",
        ])
        .unwrap();
        let next = board.detonate(Pos::new(0, 1));
        assert_eq!(next.stack_count(Side::White), 0);
        // (1, 2) is caught in the blast, (0, 7) is not.
        assert_eq!(next.stack_count(Side::Black), 1);
        assert!(next.is_occupied(Pos::new(0, 7)));
    }

    #[test]
    fn test_apply_move_matches_relocate() {
        let board = Board::from_stack_lists(&[[2, 4, 4]], &[]).unwrap();
        let action = Action::Move {
            count: 1,
            from: Pos::new(4, 4),
            to: Pos::new(4, 6),
        };
        let via_apply = board.apply(&action).unwrap();
        let via_relocate = board
            .relocate(1, Pos::new(4, 4), Direction::North, 2)
            .unwrap();
        assert_eq!(via_apply, via_relocate);
    }

    #[test]
    fn test_apply_rejects_illegal_actions() {
        let board = Board::from_stack_lists(&[[1, 4, 4]], &[[1, 4, 6]]).unwrap();
        // Diagonal target.
        assert!(board
            .apply(&Action::Move {
                count: 1,
                from: Pos::new(4, 4),
                to: Pos::new(5, 5),
            })
            .is_none());
        // Move onto itself.
        assert!(board
            .apply(&Action::Move {
                count: 1,
                from: Pos::new(4, 4),
                to: Pos::new(4, 4),
            })
            .is_none());
        // Step bound: a 1-stack cannot travel two squares.
        assert!(board
            .apply(&Action::Move {
                count: 1,
                from: Pos::new(4, 4),
                to: Pos::new(6, 4),
            })
            .is_none());
        // Boom on an empty square.
        assert!(board.apply(&Action::Boom { at: Pos::new(0, 0) }).is_none());
    }

    #[test]
    fn test_action_display() {
        let mv = Action::Move {
            count: 12,
            from: Pos::new(0, 1),
            to: Pos::new(0, 5),
        };
        assert_eq!(mv.to_string(), "MOVE 12 (0,1) (0,5)");
        assert_eq!(
            Action::Boom { at: Pos::new(7, 0) }.to_string(),
            "BOOM (7,0)"
        );
    }

    #[test]
    fn test_display_orientation() {
        let board = Board::from_stack_lists(&[[1, 0, 7]], &[[2, 7, 0]]).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        // Eight board rows plus the separator and the column footer.
        assert_eq!(lines.len(), BOARD_SIZE + 2);
        // y = 7 prints first, so the white stack appears on the top row.
        assert!(lines[0].starts_with("7 |"));
        assert!(lines[0].contains("1w"));
        assert!(lines[BOARD_SIZE - 1].contains("2b"));
    }
}
