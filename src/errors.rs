//! Error taxonomy shared across the crate.
//!
//! Every failure is recoverable by the caller; nothing here aborts the
//! process. State-mutating operations leave their receiver untouched when
//! they return an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// The move is not in the current legal-move set.
    #[error("illegal move: {notation}")]
    IllegalMove { notation: String },

    /// Square coordinates outside the `0..=7` range.
    #[error("square ({row}, {col}) is off the board")]
    OutOfRangeSquare { row: i8, col: i8 },

    /// A square string that does not parse as `a1`..`h8`.
    #[error("invalid algebraic square: {input}")]
    BadAlgebraic { input: String },

    /// A state transition was requested after the game reached a terminal
    /// status.
    #[error("the game is already over")]
    GameOver,
}

pub type ChessResult<T> = Result<T, ChessError>;
