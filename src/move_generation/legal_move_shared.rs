use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_moves_pawn::{en_passant_victim_square, is_en_passant_capture};

/// Drops destinations occupied by `color`'s own pieces.
#[inline]
pub fn exclude_own_pieces(board: &Board, color: Color, targets: SquareSet) -> SquareSet {
    targets & !board.occupancy(color)
}

/// Enemy piece on `square` from `color`'s point of view.
#[inline]
pub fn enemy_piece_on(board: &Board, color: Color, square: Square) -> Option<Piece> {
    board.get(square).filter(|piece| piece.color != color)
}

/// Piece a `from`/`to` move would capture, including an en-passant victim
/// that does not stand on `to`.
pub fn piece_captured_by(game_state: &GameState, from: Square, to: Square) -> Option<Piece> {
    let piece = game_state.board.get(from)?;
    let victim_square = if is_en_passant_capture(game_state, piece, from, to) {
        en_passant_victim_square(from, to)
    } else {
        to
    };
    enemy_piece_on(&game_state.board, piece.color, victim_square)
}
