//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by the rules engine, the
//! notation parsers and the session layer. Every variant is a recoverable,
//! caller-facing condition: an illegal move request, a coordinate outside the
//! board, an undo with nothing to undo, or malformed input text.
//!
//! Broken internal invariants (for example a live game without a king) are
//! programming errors and are reported with assertions instead.

use std::fmt;

use crate::game_state::square::Square;

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The game already ended; no further moves are accepted.
    GameOver,
    /// The piece on the source square belongs to the side not on move.
    WrongTurn,
    /// There is no piece on the source square.
    EmptySquare,
    /// The destination is not in the legal move set of the source square.
    NotLegal,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::GameOver => write!(f, "the game is over"),
            IllegalMoveReason::WrongTurn => write!(f, "it is not that side's turn"),
            IllegalMoveReason::EmptySquare => write!(f, "no piece on the source square"),
            IllegalMoveReason::NotLegal => write!(f, "destination is not a legal move"),
        }
    }
}

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A move request was rejected.
    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },

    /// A coordinate fell outside the 8x8 board.
    ///
    /// Payload: the offending input, rendered for diagnostics.
    #[error("coordinate out of range: {0}")]
    OutOfRange(String),

    /// `undo_move` was called with an empty history.
    #[error("no moves to undo")]
    NothingToUndo,

    /// A FEN string could not be parsed into a playable position.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A session configuration document could not be loaded.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
