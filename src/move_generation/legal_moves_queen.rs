use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::exclude_own_pieces;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, from: Square, color: Color) -> SquareSet {
    let board = &game_state.board;
    exclude_own_pieces(board, color, queen_attacks(from, board.occupancy_all()))
}
