//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the internal
//! square representation reused by FEN/PGN components and the scene layer.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::square::Square;

/// Convert algebraic notation (for example: "e4") to a square.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::OutOfRange(format!("algebraic square '{square}'")));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::OutOfRange(format!("file '{}'", file as char)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::OutOfRange(format!("rank '{}'", rank as char)));
    }

    Square::new(file - b'a', rank - b'1')
}

/// Convert a square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.file());
    let rank_char = char::from(b'1' + square.rank());
    format!("{file_char}{rank_char}")
}

/// Coordinate form of a move, e.g. "e2e4".
pub fn move_to_coordinate_notation(from: Square, to: Square) -> String {
    format!("{}{}", square_to_algebraic(from), square_to_algebraic(to))
}

/// Parse coordinate move notation ("e2e4") into its two squares.
pub fn coordinate_notation_to_move(text: &str) -> ChessResult<(Square, Square)> {
    let trimmed = text.trim();
    if trimmed.len() != 4 || !trimmed.is_ascii() {
        return Err(ChessError::OutOfRange(format!("move '{trimmed}'")));
    }
    let from = algebraic_to_square(&trimmed[0..2])?;
    let to = algebraic_to_square(&trimmed[2..4])?;
    Ok((from, to))
}
