//! Error types for board setup and fixture parsing.
//!
//! Every way a board description can be rejected is a `SetupError` variant,
//! so callers get one error type whether the input came from JSON, from a
//! text fixture, or from hand-built stack lists.
use thiserror::Error;

/// An invalid board description.
#[derive(Error, Debug)]
pub enum SetupError {
    /// A stack was placed outside the 8x8 grid.
    #[error("position ({x}, {y}) is outside the 8x8 board")]
    OutOfBounds { x: i64, y: i64 },

    /// A stack count was zero, negative, or absurdly large.
    #[error("stack count {count} at ({x}, {y}) must be between 1 and 10000")]
    BadCount { count: i64, x: i64, y: i64 },

    /// Two stacks were placed on the same square.
    #[error("two stacks occupy ({x}, {y})")]
    DuplicatePosition { x: u8, y: u8 },

    /// A text fixture did not have exactly one line per board row.
    #[error("expected {expected} board rows, found {found}")]
    BadRowCount { expected: usize, found: usize },

    /// A text fixture row did not have exactly one token per column.
    #[error("board row {row} has {found} cells, expected {expected}")]
    BadRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell token was not "." or a count followed by 'w' or 'b'.
    #[error("unrecognized token {token:?} in board row {row}")]
    BadToken { row: usize, token: String },

    /// The input was not syntactically valid JSON, or did not match the
    /// expected `{"white": [...], "black": [...]}` shape.
    #[error("board description is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
