//! Rook move generation.
//!
//! Slides along ranks and files; the first enemy piece on a line is a
//! capture, the first friendly piece ends the line without being included.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::exclude_own_pieces;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, from: Square, color: Color) -> SquareSet {
    let board = &game_state.board;
    exclude_own_pieces(board, color, rook_attacks(from, board.occupancy_all()))
}
