//! Engine abstraction used by the session and the self-play harness.
//!
//! An engine picks one move for a color from the current position without
//! applying it. Policies are selected at runtime behind this single trait.

use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::ChessMove;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Drops any per-game state.
    fn new_game(&mut self) {}

    /// Proposed move for `color`, or `None` when `color` is not on move, the
    /// game is over, or there is nothing legal to play.
    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<ChessMove>;
}

/// Legal moves an engine may pick from for `color`.
pub fn candidate_moves(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    if game_state.current_player() != color {
        return Vec::new();
    }
    game_state.all_legal_moves()
}
