//! Random-move engine.
//!
//! Picks uniformly among legal moves, or among captures only when asked to
//! prefer them and at least one exists.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::{candidate_moves, Engine};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::piece_captured_by;
use crate::move_generation::move_generator::ChessMove;

pub struct RandomEngine {
    rng: StdRng,
    prefer_captures: bool,
}

impl RandomEngine {
    pub fn new(prefer_captures: bool) -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
            prefer_captures,
        }
    }

    pub fn with_seed(seed: u64, prefer_captures: bool) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            prefer_captures,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Overlay Chess Random"
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<ChessMove> {
        let legal_moves = candidate_moves(game_state, color);

        let captures: Vec<ChessMove> = if self.prefer_captures {
            legal_moves
                .iter()
                .copied()
                .filter(|mv| piece_captured_by(game_state, mv.from, mv.to).is_some())
                .collect()
        } else {
            Vec::new()
        };
        let pool = if captures.is_empty() { &legal_moves } else { &captures };

        let picked = pool.choose(&mut self.rng).copied();
        debug!(
            engine = self.name(),
            legal_moves = legal_moves.len(),
            captures = captures.len(),
            picked = ?picked,
            "random engine chose"
        );
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    #[test]
    fn picks_a_legal_move_for_the_side_to_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(7, false);
        for _ in 0..32 {
            let mv = engine.choose_move(&game, Color::White).expect("start has moves");
            assert!(game.legal_moves(mv.from).contains(mv.to));
        }
    }

    #[test]
    fn declines_wrong_turn_and_finished_games() {
        let mut engine = RandomEngine::with_seed(7, false);
        assert_eq!(engine.choose_move(&GameState::new_game(), Color::Black), None);

        let stalemate = GameState::from_fen("8/8/8/8/8/kq6/8/K7 w - - 0 1").expect("FEN should parse");
        assert_eq!(engine.choose_move(&stalemate, Color::White), None);
    }

    #[test]
    fn capture_preference_only_picks_captures() {
        // Rook can take the hanging knight; everything else is quiet.
        let game = GameState::from_fen("4k3/8/8/8/n7/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(11, true);
        for _ in 0..16 {
            let mv = engine.choose_move(&game, Color::White).expect("white has moves");
            assert_eq!(mv.to.to_string(), "a4");
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let game = GameState::new_game();
        let mut a = RandomEngine::with_seed(99, false);
        let mut b = RandomEngine::with_seed(99, false);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&game, Color::White),
                b.choose_move(&game, Color::White)
            );
        }
    }
}
