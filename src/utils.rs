//! Board construction helpers: JSON descriptions, text fixtures and seeded
//! random scenarios.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::engine::{Board, Side, BOARD_SIZE};
use crate::error::SetupError;

/// The JSON shape of a board description:
/// `{"white": [[n, x, y], ...], "black": [[n, x, y], ...]}`.
///
/// Each triple places a stack of `n` tokens on square `(x, y)`.
#[derive(Clone, Debug, Deserialize)]
pub struct BoardSetup {
    pub white: Vec<[i64; 3]>,
    pub black: Vec<[i64; 3]>,
}

/// Parses a JSON board description into a validated `Board`.
///
/// Syntax errors and shape mismatches surface as `SetupError::Json`; a
/// well-formed description can still be rejected by board validation, for
/// example for an off-board square or a duplicated one.
///
/// # Examples
/// ```
/// use expendibots_solver::engine::{Pos, Side};
/// use expendibots_solver::utils::board_from_json_str;
///
/// let board = board_from_json_str(r#"{"white": [[1, 4, 4]], "black": [[2, 0, 7]]}"#).unwrap();
/// assert_eq!(board.stack_at(Pos::new(0, 7)).unwrap().count, 2);
/// assert_eq!(board.total_pieces(Side::White), 1);
/// ```
pub fn board_from_json_str(text: &str) -> Result<Board, SetupError> {
    let setup: BoardSetup = serde_json::from_str(text)?;
    Board::from_stack_lists(&setup.white, &setup.black)
}

/// Parses a text fixture into a `Board`.
///
/// The fixture has exactly one line per board row, written top-down: the
/// first line is the `y = 7` row and the last the `y = 0` row, matching the
/// `Display` orientation. Each line holds exactly eight whitespace-separated
/// tokens, one per column: `"."` for an empty square, or a stack count
/// followed by `'w'` or `'b'`, as in `"2w"` or `"12b"`.
///
/// # Examples
/// ```
/// use expendibots_solver::engine::{Pos, Side};
/// use expendibots_solver::utils::board_from_str_rows;
///
/// let board = board_from_str_rows(&[
///     "1b .  .  .  .  .  .  .",
///     ".  .  .  .  .  .  .  .",
///     ".  .  .  .  .  .  .  .",
///     ".  .  .  .  .  .  .  .",
///     ".  .  .  .  .  .  .  .",
///     ".  .  .  .  .  .  .  .",
///     ".  .  .  .  .  .  .  .",
///     "2w .  .  .  .  .  .  .",
/// ]).unwrap();
/// assert_eq!(board.stack_at(Pos::new(0, 7)).unwrap().side, Side::Black);
/// assert_eq!(board.stack_at(Pos::new(0, 0)).unwrap().count, 2);
/// ```
pub fn board_from_str_rows(rows: &[&str]) -> Result<Board, SetupError> {
    if rows.len() != BOARD_SIZE {
        return Err(SetupError::BadRowCount {
            expected: BOARD_SIZE,
            found: rows.len(),
        });
    }

    let mut white: Vec<[i64; 3]> = Vec::new();
    let mut black: Vec<[i64; 3]> = Vec::new();
    for (row, line) in rows.iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != BOARD_SIZE {
            return Err(SetupError::BadRowWidth {
                row,
                expected: BOARD_SIZE,
                found: tokens.len(),
            });
        }
        let y = (BOARD_SIZE - 1 - row) as i64;
        for (x, token) in tokens.iter().enumerate() {
            if *token == "." {
                continue;
            }
            let (count, side) = parse_stack_token(token).ok_or_else(|| SetupError::BadToken {
                row,
                token: (*token).to_string(),
            })?;
            let entry = [count, x as i64, y];
            match side {
                Side::White => white.push(entry),
                Side::Black => black.push(entry),
            }
        }
    }
    Board::from_stack_lists(&white, &black)
}

/// Splits a `"<count><side>"` token such as `"2w"`. Returns `None` when the
/// token does not have that shape; range checking the count is left to board
/// validation.
fn parse_stack_token(token: &str) -> Option<(i64, Side)> {
    let (digits, side) = match token.strip_suffix('w') {
        Some(digits) => (digits, Side::White),
        None => (token.strip_suffix('b')?, Side::Black),
    };
    if digits.is_empty() {
        return None;
    }
    let count = digits.parse::<i64>().ok()?;
    Some((count, side))
}

/// Generates a reproducible random scenario with the requested number of
/// white and black stacks.
///
/// Stacks land on distinct squares chosen uniformly, each holding one to
/// three tokens. The same seed always produces the same board, so batch
/// evaluations and benchmarks can name scenarios by their seed.
///
/// # Panics
/// Panics if more stacks are requested than the board has squares.
pub fn random_board(seed: u64, white_stacks: usize, black_stacks: usize) -> Board {
    assert!(
        white_stacks + black_stacks <= BOARD_SIZE * BOARD_SIZE,
        "more stacks requested than squares available"
    );
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut free: Vec<(u8, u8)> = (0..BOARD_SIZE as u8)
        .flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| (x, y)))
        .collect();

    let mut white: Vec<[i64; 3]> = Vec::new();
    let mut black: Vec<[i64; 3]> = Vec::new();
    for (side_stacks, entries) in [(white_stacks, &mut white), (black_stacks, &mut black)] {
        for _ in 0..side_stacks {
            let idx = rng.gen_range(0..free.len());
            let (x, y) = free.swap_remove(idx);
            entries.push([rng.gen_range(1..=3i64), x as i64, y as i64]);
        }
    }
    Board::from_stack_lists(&white, &black)
        .expect("distinct squares and counts in 1..=3 always validate")
}
