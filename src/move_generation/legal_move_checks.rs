//! Attack detection and terminal classification.
//!
//! Attacks are computed from the target square outwards: a square is attacked
//! by `attacker_color` when a piece of that color sits where the matching
//! pattern, traced from the target, lands. Pawns contribute their diagonal
//! capture pattern only.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVE_LIMIT;
use crate::game_state::chess_types::*;
use crate::game_state::game_outcome::GameOutcome;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let king_sq = game_state.king_position(color);
    debug_assert_eq!(
        game_state.board.get(king_sq),
        Some(Piece::new(PieceKind::King, color)),
        "cached king square out of step with the board"
    );
    is_square_attacked(&game_state.board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    !attackers_to_square(board, square, attacker_color).is_empty()
}

/// Squares of every `attacker_color` piece attacking `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> SquareSet {
    let occupancy = board.occupancy_all();
    let pieces = |kind| board.pieces_of(attacker_color, kind);

    let bishops_queens = pieces(PieceKind::Bishop) | pieces(PieceKind::Queen);
    let rooks_queens = pieces(PieceKind::Rook) | pieces(PieceKind::Queen);

    // A pawn of the attacking color attacks `square` exactly when a pawn of
    // the other color on `square` would attack it back.
    (pawn_attacks(attacker_color.opposite(), square) & pieces(PieceKind::Pawn))
        | (knight_attacks(square) & pieces(PieceKind::Knight))
        | (king_attacks(square) & pieces(PieceKind::King))
        | (bishop_attacks(square, occupancy) & bishops_queens)
        | (rook_attacks(square, occupancy) & rooks_queens)
}

/// Classifies the position for the side to move.
pub fn classify_outcome(game_state: &GameState) -> GameOutcome {
    let side = game_state.current_player;
    if !has_legal_move(game_state, side) {
        if is_king_in_check(game_state, side) {
            GameOutcome::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        }
    } else if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
        GameOutcome::FiftyMoveRule
    } else {
        GameOutcome::InProgress
    }
}
