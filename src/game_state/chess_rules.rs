//! Canonical chess-rule constants.
//!
//! Static rule literals: the starting position, the inactivity draw limit and
//! the home squares that castling depends on.

use crate::game_state::chess_types::{CastleSide, Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Half-moves without a capture or pawn move after which the game is drawn.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// King start square for `color`.
#[inline]
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

/// Rook start square on `side` for `color`.
#[inline]
pub const fn rook_home(color: Color, side: CastleSide) -> Square {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => Square::H1,
        (Color::White, CastleSide::Queenside) => Square::A1,
        (Color::Black, CastleSide::Kingside) => Square::H8,
        (Color::Black, CastleSide::Queenside) => Square::A8,
    }
}

/// Where king and rook land when castling: `(king_to, rook_to)`.
#[inline]
pub const fn castle_destinations(color: Color, side: CastleSide) -> (Square, Square) {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => (Square::G1, Square::F1),
        (Color::White, CastleSide::Queenside) => (Square::C1, Square::D1),
        (Color::Black, CastleSide::Kingside) => (Square::G8, Square::F8),
        (Color::Black, CastleSide::Queenside) => (Square::C8, Square::D8),
    }
}

/// Squares that must be empty between king and rook.
pub const fn castle_gap(color: Color, side: CastleSide) -> &'static [Square] {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &[Square::F1, Square::G1],
        (Color::White, CastleSide::Queenside) => &[Square::B1, Square::C1, Square::D1],
        (Color::Black, CastleSide::Kingside) => &[Square::F8, Square::G8],
        (Color::Black, CastleSide::Queenside) => &[Square::B8, Square::C8, Square::D8],
    }
}

/// Squares the king stands on, crosses and lands on; none may be attacked.
pub const fn castle_king_path(color: Color, side: CastleSide) -> &'static [Square] {
    match (color, side) {
        (Color::White, CastleSide::Kingside) => &[Square::E1, Square::F1, Square::G1],
        (Color::White, CastleSide::Queenside) => &[Square::E1, Square::D1, Square::C1],
        (Color::Black, CastleSide::Kingside) => &[Square::E8, Square::F8, Square::G8],
        (Color::Black, CastleSide::Queenside) => &[Square::E8, Square::D8, Square::C8],
    }
}
