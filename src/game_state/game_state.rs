//! Owned game state.
//!
//! `GameState` is the central model for the engine: the board, side to move,
//! castling rights, en-passant target, clocks, cached king squares, the undo
//! history and the terminal classification. Fields are only writable inside
//! the crate; every mutation goes through the move executor in
//! `move_generation::legal_move_apply`, which updates all dependent fields in
//! the same call.

use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::game_outcome::{GameOutcome, Winner};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::{self, MoveOutcome, UndoOutcome};
use crate::move_generation::legal_move_checks::{classify_outcome, is_king_in_check};
use crate::move_generation::legal_move_generator::{legal_destinations, legal_moves_for_color};
use crate::move_generation::move_generator::ChessMove;
use crate::utils::algebraic::move_to_coordinate_notation;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,

    pub(crate) current_player: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // [color]
    pub(crate) king_positions: [Square; 2],

    pub(crate) history: Vec<UndoState>,
    pub(crate) outcome: GameOutcome,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            current_player: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_positions: [Square::E1, Square::E8],
            history: Vec::new(),
            outcome: GameOutcome::InProgress,
        }
    }

    /// Reinitializes in place to the initial position.
    pub fn reset(&mut self) {
        *self = Self::new_game();
        info!("game reset to the initial position");
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Assembles a state from raw parts, validating the kings and the
    /// en-passant target and classifying the position for the side to move.
    /// The side not on move may not be in check.
    pub(crate) fn from_parts(
        board: Board,
        current_player: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        let mut king_positions = [Square::E1, Square::E8];
        for color in Color::ALL {
            let kings = board.pieces_of(color, PieceKind::King);
            let Some(king_sq) = kings.iter().next().filter(|_| kings.len() == 1) else {
                return Err(ChessError::InvalidFen(format!(
                    "expected exactly one {color} king, found {}",
                    kings.len()
                )));
            };
            king_positions[color.index()] = king_sq;
        }

        if let Some(target) = en_passant_target {
            let expected_rank = match current_player {
                Color::White => 5,
                Color::Black => 2,
            };
            let victim = target
                .offset(0, current_player.opposite().forward())
                .and_then(|square| board.get(square));
            if target.rank() != expected_rank
                || board.get(target).is_some()
                || victim != Some(Piece::new(PieceKind::Pawn, current_player.opposite()))
            {
                return Err(ChessError::InvalidFen(format!(
                    "en-passant target {target} has no {} pawn behind it",
                    current_player.opposite()
                )));
            }
        }

        let mut state = Self {
            board,
            current_player,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            king_positions,
            history: Vec::new(),
            outcome: GameOutcome::InProgress,
        };
        if is_king_in_check(&state, current_player.opposite()) {
            return Err(ChessError::InvalidFen(format!(
                "{} is in check with {current_player} to move",
                current_player.opposite()
            )));
        }
        state.outcome = classify_outcome(&state);
        Ok(state)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn king_position(&self, color: Color) -> Square {
        self.king_positions[color.index()]
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Winner> {
        self.outcome.winner()
    }

    /// Current classification; its `Display` is the human-readable result.
    #[inline]
    pub fn game_result(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Legal destinations from `square`. Empty when the square is empty, the
    /// piece is not on move, or the game is over.
    pub fn legal_moves(&self, square: Square) -> SquareSet {
        if self.is_game_over() {
            return SquareSet::EMPTY;
        }
        match self.board.get(square) {
            Some(piece) if piece.color == self.current_player => legal_destinations(self, square),
            _ => SquareSet::EMPTY,
        }
    }

    /// Every legal move for the side to move.
    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        if self.is_game_over() {
            return Vec::new();
        }
        legal_moves_for_color(self, self.current_player)
    }

    pub fn apply_move(&mut self, from: Square, to: Square) -> ChessResult<MoveOutcome> {
        legal_move_apply::apply_move(self, from, to)
    }

    pub fn undo_move(&mut self) -> ChessResult<UndoOutcome> {
        legal_move_apply::undo_move(self)
    }

    /// Pieces of `color` that have been captured so far, in capture order.
    pub fn captured_pieces(&self, color: Color) -> Vec<Piece> {
        self.history
            .iter()
            .filter_map(|entry| entry.captured.map(|(_, piece)| piece))
            .filter(|piece| piece.color == color)
            .collect()
    }

    /// Applied moves in coordinate notation ("e2e4"), oldest first.
    pub fn move_list(&self) -> Vec<String> {
        self.history
            .iter()
            .map(|entry| move_to_coordinate_notation(entry.from, entry.to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_outcome::GameOutcome;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.game_result(), GameOutcome::InProgress);
        assert_eq!(game.all_legal_moves().len(), 20);
    }

    #[test]
    fn legal_moves_are_empty_for_wrong_turn_and_empty_squares() {
        let game = GameState::new_game();
        assert!(game.legal_moves(sq("e7")).is_empty());
        assert!(game.legal_moves(sq("e4")).is_empty());
        assert_eq!(game.legal_moves(sq("g1")).len(), 2);
    }

    #[test]
    fn reset_restores_initial_position() {
        let mut game = GameState::new_game();
        game.apply_move(sq("e2"), sq("e4")).expect("e2e4 is legal");
        game.apply_move(sq("e7"), sq("e5")).expect("e7e5 is legal");
        game.reset();
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn fen_without_both_kings_is_rejected() {
        let err = GameState::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1").expect_err("no black king");
        assert!(matches!(err, ChessError::InvalidFen(_)));
    }

    #[test]
    fn side_not_on_move_in_check_is_rejected() {
        let err = GameState::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").expect_err("black king en prise");
        assert!(matches!(err, ChessError::InvalidFen(_)));

        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1").expect("black to move out of check");
        assert!(game.is_in_check(Color::Black));
        assert!(!game.legal_moves(Square::E8).contains(sq("e7")));
    }

    #[test]
    fn en_passant_target_needs_the_double_stepped_pawn() {
        for fen in [
            "4k3/8/8/4P3/8/8/8/4K3 w - d6 0 2",
            "4k3/8/8/3NP3/8/8/8/4K3 w - d6 0 2",
            "4k3/8/3n4/3pP3/8/8/8/4K3 w - d6 0 2",
            "4k3/8/8/8/3pP3/8/8/4K3 w - e3 0 2",
        ] {
            assert!(
                matches!(GameState::from_fen(fen), Err(ChessError::InvalidFen(_))),
                "'{fen}' should be rejected"
            );
        }

        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("valid en-passant FEN");
        assert_eq!(game.en_passant_target(), Some(sq("d6")));
    }

    #[test]
    fn captured_pieces_follow_history() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5"), ("d8", "d5")] {
            game.apply_move(sq(from), sq(to)).expect("scripted move is legal");
        }
        assert_eq!(
            game.captured_pieces(Color::Black),
            vec![Piece::new(PieceKind::Pawn, Color::Black)]
        );
        assert_eq!(
            game.captured_pieces(Color::White),
            vec![Piece::new(PieceKind::Pawn, Color::White)]
        );
        assert_eq!(game.move_list(), vec!["e2e4", "d7d5", "e4d5", "d8d5"]);
    }
}
