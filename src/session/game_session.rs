//! Paced play against the computer.
//!
//! `GameSession` owns a `GameState` and an engine. When a player's move
//! leaves the computer's color on move, the reply is scheduled
//! `reply_delay_ms` later and fired by the first `tick` at or after that
//! instant. Undo and reset cancel a scheduled reply. Time is always passed in
//! by the caller, so the session never sleeps or reads a clock itself.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::chess_errors::{ChessError, ChessResult, IllegalMoveReason};
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{MoveOutcome, UndoOutcome};
use crate::move_generation::move_generator::ChessMove;
use crate::session::session_config::SessionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingReply {
    color: Color,
    due_at: Instant,
}

pub struct GameSession {
    game_state: GameState,
    config: SessionConfig,
    engine: Box<dyn Engine>,
    pending_reply: Option<PendingReply>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        let engine = config.build_engine();
        Self::with_engine(config, engine)
    }

    pub fn with_engine(config: SessionConfig, engine: Box<dyn Engine>) -> Self {
        Self {
            game_state: GameState::new_game(),
            config,
            engine,
            pending_reply: None,
        }
    }

    /// Resumes from an existing position, e.g. one loaded from FEN.
    pub fn from_position(config: SessionConfig, game_state: GameState) -> Self {
        let engine = config.build_engine();
        Self {
            game_state,
            config,
            engine,
            pending_reply: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// When the scheduled computer reply becomes due, if one is pending.
    pub fn reply_due_at(&self) -> Option<Instant> {
        self.pending_reply.map(|pending| pending.due_at)
    }

    /// Schedules the opening reply when the computer has the first move.
    pub fn start(&mut self, now: Instant) {
        self.schedule_reply_if_due(now);
    }

    pub fn legal_moves(&self, square: Square) -> SquareSet {
        if self.pending_reply.is_some() {
            return SquareSet::EMPTY;
        }
        self.game_state.legal_moves(square)
    }

    /// Applies a player's move and schedules the computer's answer.
    ///
    /// Refused with `WrongTurn` while a computer reply is pending.
    pub fn submit_player_move(&mut self, from: Square, to: Square, now: Instant) -> ChessResult<MoveOutcome> {
        if self.pending_reply.is_some() {
            return Err(ChessError::IllegalMove {
                from,
                to,
                reason: IllegalMoveReason::WrongTurn,
            });
        }

        let outcome = self.game_state.apply_move(from, to)?;
        self.schedule_reply_if_due(now);
        Ok(outcome)
    }

    /// Plays the pending computer reply once it is due.
    ///
    /// `Ok(None)` when nothing is pending, the reply is not yet due, or the
    /// engine had no move to offer.
    pub fn tick(&mut self, now: Instant) -> ChessResult<Option<MoveOutcome>> {
        let Some(pending) = self.pending_reply else {
            return Ok(None);
        };
        if now < pending.due_at {
            trace!(remaining_ms = (pending.due_at - now).as_millis() as u64, "computer reply not yet due");
            return Ok(None);
        }
        self.pending_reply = None;

        let Some(mv) = self.computer_move(pending.color) else {
            debug!(color = %pending.color, "computer has no move to play");
            return Ok(None);
        };
        let outcome = self.game_state.apply_move(mv.from, mv.to)?;
        debug!(engine = self.engine.name(), mv = %mv, "computer reply played");
        Ok(Some(outcome))
    }

    /// Proposed computer move for `color`; does not change the game.
    pub fn computer_move(&mut self, color: Color) -> Option<ChessMove> {
        self.engine.choose_move(&self.game_state, color)
    }

    /// Takes back one ply and cancels any pending reply.
    pub fn undo(&mut self) -> ChessResult<UndoOutcome> {
        self.cancel_pending_reply("undo");
        self.game_state.undo_move()
    }

    /// Starts over from the initial position and cancels any pending reply.
    pub fn reset(&mut self, now: Instant) {
        self.cancel_pending_reply("reset");
        self.game_state.reset();
        self.engine.new_game();
        self.schedule_reply_if_due(now);
    }

    fn schedule_reply_if_due(&mut self, now: Instant) {
        let Some(computer_color) = self.config.computer_color else {
            return;
        };
        if self.game_state.is_game_over() || self.game_state.current_player() != computer_color {
            return;
        }

        let due_at = now + Duration::from_millis(self.config.reply_delay_ms);
        trace!(color = %computer_color, delay_ms = self.config.reply_delay_ms, "computer reply scheduled");
        self.pending_reply = Some(PendingReply {
            color: computer_color,
            due_at,
        });
    }

    fn cancel_pending_reply(&mut self, cause: &str) {
        if self.pending_reply.take().is_some() {
            trace!(cause, "pending computer reply cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::GameSession;
    use crate::chess_errors::{ChessError, IllegalMoveReason};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::session::session_config::{OpponentPolicy, SessionConfig};

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn config(computer_color: Option<Color>) -> SessionConfig {
        SessionConfig {
            computer_color,
            reply_delay_ms: 1000,
            opponent: OpponentPolicy::Scored,
            seed: Some(5),
        }
    }

    #[test]
    fn reply_fires_only_after_the_delay() {
        let t0 = Instant::now();
        let mut session = GameSession::new(config(Some(Color::Black)));
        session.start(t0);
        assert_eq!(session.reply_due_at(), None);

        session.submit_player_move(sq("e2"), sq("e4"), t0).expect("e2e4 is legal");
        assert_eq!(session.reply_due_at(), Some(t0 + Duration::from_millis(1000)));

        let early = session.tick(t0 + Duration::from_millis(999)).expect("tick should not fail");
        assert_eq!(early, None);
        assert_eq!(session.game_state().current_player(), Color::Black);

        let reply = session
            .tick(t0 + Duration::from_millis(1000))
            .expect("tick should not fail")
            .expect("reply is due");
        assert_eq!(reply.moved_piece.color, Color::Black);
        assert_eq!(session.game_state().current_player(), Color::White);
        assert_eq!(session.reply_due_at(), None);
        assert_eq!(session.game_state().history().len(), 2);
    }

    #[test]
    fn player_cannot_move_while_reply_is_pending() {
        let t0 = Instant::now();
        let mut session = GameSession::new(config(Some(Color::Black)));
        session.submit_player_move(sq("e2"), sq("e4"), t0).expect("e2e4 is legal");

        assert!(session.legal_moves(sq("e7")).is_empty());
        let err = session
            .submit_player_move(sq("e7"), sq("e5"), t0)
            .expect_err("computer is on move");
        assert!(matches!(
            err,
            ChessError::IllegalMove {
                reason: IllegalMoveReason::WrongTurn,
                ..
            }
        ));
    }

    #[test]
    fn undo_cancels_the_pending_reply() {
        let t0 = Instant::now();
        let mut session = GameSession::new(config(Some(Color::Black)));
        session.submit_player_move(sq("d2"), sq("d4"), t0).expect("d2d4 is legal");

        let undo = session.undo().expect("one move to undo");
        assert_eq!(undo.restored_to, sq("d2"));
        assert_eq!(session.reply_due_at(), None);

        let later = session.tick(t0 + Duration::from_secs(5)).expect("tick should not fail");
        assert_eq!(later, None);
        assert_eq!(*session.game_state(), GameState::new_game());
    }

    #[test]
    fn reset_cancels_the_pending_reply() {
        let t0 = Instant::now();
        let mut session = GameSession::new(config(Some(Color::Black)));
        session.submit_player_move(sq("g1"), sq("f3"), t0).expect("g1f3 is legal");

        session.reset(t0 + Duration::from_millis(500));
        assert_eq!(session.reply_due_at(), None);
        assert_eq!(session.tick(t0 + Duration::from_secs(5)).expect("tick should not fail"), None);
        assert_eq!(*session.game_state(), GameState::new_game());
    }

    #[test]
    fn computer_playing_white_opens_after_start() {
        let t0 = Instant::now();
        let mut session = GameSession::new(config(Some(Color::White)));
        session.start(t0);
        assert_eq!(session.reply_due_at(), Some(t0 + Duration::from_millis(1000)));

        let reply = session
            .tick(t0 + Duration::from_secs(1))
            .expect("tick should not fail")
            .expect("opening move is due");
        assert_eq!(reply.moved_piece.color, Color::White);
        assert_eq!(session.game_state().current_player(), Color::Black);
    }

    #[test]
    fn no_reply_after_a_game_ending_move() {
        let t0 = Instant::now();
        let back_rank = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let mut session = GameSession::from_position(config(Some(Color::Black)), back_rank);
        session.start(t0);
        assert_eq!(session.reply_due_at(), None);

        let outcome = session.submit_player_move(sq("a1"), sq("a8"), t0).expect("Ra8 is legal");
        assert!(outcome.game_over);
        assert_eq!(session.reply_due_at(), None);
        assert_eq!(session.tick(t0 + Duration::from_secs(5)).expect("tick should not fail"), None);
    }

    #[test]
    fn two_player_sessions_never_schedule() {
        let t0 = Instant::now();
        let mut session = GameSession::new(config(None));
        session.start(t0);
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3")] {
            session.submit_player_move(sq(from), sq(to), t0).expect("scripted move is legal");
            assert_eq!(session.reply_due_at(), None);
        }
    }

    #[test]
    fn computer_move_does_not_apply() {
        let mut session = GameSession::new(config(Some(Color::Black)));
        let proposal = session.computer_move(Color::White).expect("white has moves");
        assert!(session.game_state().legal_moves(proposal.from).contains(proposal.to));
        assert_eq!(*session.game_state(), GameState::new_game());
        assert_eq!(session.computer_move(Color::Black), None);
    }
}
