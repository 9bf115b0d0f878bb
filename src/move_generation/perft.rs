use std::panic;
use std::thread;

use crate::chess_errors::ChessResult;
use crate::game_state::game_outcome::Winner;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::MoveOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, outcome: &MoveOutcome) {
        self.nodes += 1;
        if let Some((square, _)) = outcome.captured {
            self.captures += 1;
            if square != outcome.to {
                self.en_passant += 1;
            }
        }
        if outcome.rook_relocation.is_some() {
            self.castles += 1;
        }
        if outcome.gives_check {
            self.checks += 1;
        }
        if matches!(outcome.winner, Some(Winner::Side(_))) {
            self.checkmates += 1;
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    perft_recurse(&mut scratch, depth, &mut total)?;
    Ok(total)
}

/// Same counts as [`perft`], with one scoped worker per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth);
    }

    let root_moves = game_state.all_legal_moves();
    let results: Vec<ChessResult<PerftCounts>> = thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || -> ChessResult<PerftCounts> {
                    let mut child = game_state.clone();
                    child.apply_move(mv.from, mv.to)?;
                    let mut local = PerftCounts::default();
                    perft_recurse(&mut child, depth - 1, &mut local)?;
                    Ok(local)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });

    let mut total = PerftCounts::default();
    for result in results {
        total.merge(result?);
    }
    Ok(total)
}

fn perft_recurse(game_state: &mut GameState, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in game_state.all_legal_moves() {
        let outcome = game_state.apply_move(mv.from, mv.to)?;
        if depth == 1 {
            counts.record_leaf(&outcome);
        } else {
            perft_recurse(game_state, depth - 1, counts)?;
        }
        game_state.undo_move()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ROOK_ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game();
        let counts = perft(&game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn perft_start_position_shallow_depths() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&game, 2).expect("perft should run").nodes, 400);

        let counts = perft(&game, 3).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn perft_kiwipete_depth_two() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");
        let counts = perft(&game, 2).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn perft_rook_endgame_depth_three() {
        let game = GameState::from_fen(ROOK_ENDGAME_FEN).expect("FEN should parse");
        let counts = perft(&game, 3).expect("perft should run");
        assert_eq!(counts.nodes, 2812);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);
    }

    #[test]
    fn perft_leaves_the_input_untouched_and_threads_agree() {
        let game = GameState::from_fen(KIWIPETE_FEN).expect("FEN should parse");
        let single = perft(&game, 2).expect("perft should run");
        let threaded = perft_multi_threaded(&game, 2).expect("perft should run");
        assert_eq!(single, threaded);
        assert_eq!(game.get_fen(), KIWIPETE_FEN);
    }
}
