//! One-ply scored engine.
//!
//! Each legal move is scored on the position it is played from: material
//! taken, how central the destination is, minor pieces leaving their back
//! rank, a small penalty for king moves and a little jitter. The engine then
//! picks uniformly among all moves within `NEAR_BEST_MARGIN` of the best
//! score, so play stays varied without dropping material.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::engines::engine_trait::{candidate_moves, Engine};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::piece_captured_by;
use crate::move_generation::move_generator::ChessMove;

const CENTRALIZATION_WEIGHT: f64 = 0.1;
const DEVELOPMENT_BONUS: f64 = 0.3;
const KING_MOVE_PENALTY: f64 = 0.2;
const JITTER: f64 = 0.1;
const NEAR_BEST_MARGIN: f64 = 0.5;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    fn piece_value(piece: PieceKind) -> f64 {
        match piece {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 100.0,
        }
    }

    /// 0.7 on the four centre squares down to 0.0 in the corners.
    fn centralization(square: Square) -> f64 {
        let (row, col) = square.to_row_col();
        let distance = (f64::from(row) - 3.5).abs() + (f64::from(col) - 3.5).abs();
        (7.0 - distance) * CENTRALIZATION_WEIGHT
    }

    /// Score without jitter.
    pub fn evaluate_move(game_state: &GameState, mv: ChessMove) -> f64 {
        let Some(piece) = game_state.board().get(mv.from) else {
            return f64::MIN;
        };

        let mut score = piece_captured_by(game_state, mv.from, mv.to)
            .map_or(0.0, |captured| Self::piece_value(captured.kind));

        score += Self::centralization(mv.to);

        if matches!(piece.kind, PieceKind::Knight | PieceKind::Bishop)
            && mv.from.rank() == piece.color.back_rank()
        {
            score += DEVELOPMENT_BONUS;
        }

        if piece.kind == PieceKind::King {
            score -= KING_MOVE_PENALTY;
        }

        score
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Overlay Chess Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState, color: Color) -> Option<ChessMove> {
        let legal_moves = candidate_moves(game_state, color);
        if legal_moves.is_empty() {
            return None;
        }

        let scored: Vec<(ChessMove, f64)> = legal_moves
            .iter()
            .map(|mv| {
                let jitter = self.rng.random::<f64>() * JITTER;
                (*mv, Self::evaluate_move(game_state, *mv) + jitter)
            })
            .collect();

        let best_score = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::MIN, f64::max);
        let near_best: Vec<ChessMove> = scored
            .iter()
            .filter(|(_, score)| *score >= best_score - NEAR_BEST_MARGIN)
            .map(|(mv, _)| *mv)
            .collect();

        let picked = near_best.choose(&mut self.rng).copied();
        debug!(
            engine = self.name(),
            legal_moves = legal_moves.len(),
            near_best = near_best.len(),
            best_score,
            picked = ?picked,
            "greedy engine chose"
        );
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_generator::ChessMove;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn evaluation_terms() {
        let game = GameState::new_game();

        // Knight g1-f3: development plus f3 centrality (3.0 off centre).
        let knight = GreedyEngine::evaluate_move(&game, ChessMove::new(sq("g1"), sq("f3")));
        assert!(close(knight, 0.3 + 0.4));

        // Pawn e2-e4: e4 is one of the four centre squares.
        let pawn = GreedyEngine::evaluate_move(&game, ChessMove::new(sq("e2"), sq("e4")));
        assert!(close(pawn, 0.6));

        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let king = GreedyEngine::evaluate_move(&game, ChessMove::new(sq("e1"), sq("d2")));
        assert!(close(king, 0.4 - 0.2));
    }

    #[test]
    fn en_passant_scores_as_a_pawn_capture() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let score = GreedyEngine::evaluate_move(&game, ChessMove::new(sq("e5"), sq("d6")));
        assert!(close(score, 1.0 + 0.5));
    }

    #[test]
    fn always_takes_a_hanging_queen() {
        let game = GameState::from_fen("4k3/8/8/8/3q4/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        for seed in 0..16 {
            let mut engine = GreedyEngine::with_seed(seed);
            let mv = engine.choose_move(&game, Color::White).expect("white has moves");
            assert_eq!(mv, ChessMove::new(sq("d1"), sq("d4")));
        }
    }

    #[test]
    fn no_move_for_the_side_not_on_move_or_when_mated() {
        let mut engine = GreedyEngine::with_seed(3);
        assert_eq!(engine.choose_move(&GameState::new_game(), Color::Black), None);

        let mated = GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        assert!(mated.is_game_over());
        assert_eq!(engine.choose_move(&mated, Color::White), None);
    }
}
