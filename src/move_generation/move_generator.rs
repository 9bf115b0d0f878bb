//! Pseudo-legal move dispatch.
//!
//! Each piece kind has one generator producing the destinations its movement
//! pattern allows from a square, ignoring whether the mover's king would be
//! left attacked. `pseudo_legal_destinations` is the single dispatch point,
//! indexing a function table by `PieceKind::index`.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::utils::algebraic::move_to_coordinate_notation;

/// A source/destination pair as picked by a player or an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", move_to_coordinate_notation(self.from, self.to))
    }
}

/// Destinations for a `color` piece standing on a square.
pub type PieceMoveGenerator = fn(&GameState, Square, Color) -> SquareSet;

const PIECE_MOVE_GENERATORS: [PieceMoveGenerator; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

/// Pseudo-legal destinations of whatever piece stands on `from`; empty for an
/// empty square.
pub fn pseudo_legal_destinations(game_state: &GameState, from: Square) -> SquareSet {
    match game_state.board.get(from) {
        Some(piece) => PIECE_MOVE_GENERATORS[piece.kind.index()](game_state, from, piece.color),
        None => SquareSet::EMPTY,
    }
}
