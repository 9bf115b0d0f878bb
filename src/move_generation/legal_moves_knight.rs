use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::exclude_own_pieces;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_moves(game_state: &GameState, from: Square, color: Color) -> SquareSet {
    exclude_own_pieces(&game_state.board, color, knight_attacks(from))
}
