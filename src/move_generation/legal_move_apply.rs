//! Move executor.
//!
//! `apply_move` is the only way a game advances: it validates the request
//! against the legal move set, snapshots the derived state into the history,
//! resolves castling and en passant side effects, updates rights, clocks, the
//! king cache and the side to move, then reclassifies the position.
//! `undo_move` pops one history record and restores everything it captured.

use tracing::{debug, info, warn};

use crate::chess_errors::{ChessError, ChessResult, IllegalMoveReason};
use crate::game_state::chess_rules::{castle_destinations, rook_home};
use crate::game_state::chess_types::*;
use crate::game_state::game_outcome::{GameOutcome, Winner};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::{classify_outcome, is_king_in_check};
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::move_generation::legal_moves_king::castle_side_for_move;
use crate::move_generation::legal_moves_pawn::{en_passant_victim_square, is_en_passant_capture};

/// What the scene layer needs to animate an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    /// Captured piece and the square to remove it from.
    pub captured: Option<(Square, Piece)>,
    /// Rook hop `(from, to)` of a castle.
    pub rook_relocation: Option<(Square, Square)>,
    /// The side now on move is in check.
    pub gives_check: bool,
    pub game_over: bool,
    pub winner: Option<Winner>,
}

impl MoveOutcome {
    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }
}

/// What the scene layer needs to animate an undone move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoOutcome {
    /// Square the moved piece is lifted from (the move's destination).
    pub restored_from: Square,
    /// Square the moved piece returns to (the move's origin).
    pub restored_to: Square,
    pub moved_piece: Piece,
    /// Piece put back on the board and where.
    pub recaptured: Option<(Square, Piece)>,
    /// Rook hop to reverse, as `(from, to)` of the reversal.
    pub rook_relocation: Option<(Square, Square)>,
}

pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> ChessResult<MoveOutcome> {
    let reject = |reason: IllegalMoveReason| {
        warn!(%from, %to, %reason, "move rejected");
        Err(ChessError::IllegalMove { from, to, reason })
    };

    if game_state.is_game_over() {
        return reject(IllegalMoveReason::GameOver);
    }
    let Some(piece) = game_state.board.get(from) else {
        return reject(IllegalMoveReason::EmptySquare);
    };
    if piece.color != game_state.current_player {
        return reject(IllegalMoveReason::WrongTurn);
    }
    if !legal_destinations(game_state, from).contains(to) {
        return reject(IllegalMoveReason::NotLegal);
    }

    let mut entry = UndoState {
        from,
        to,
        moved_piece: piece,
        captured: None,
        rook_relocation: None,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_target: game_state.en_passant_target,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
    };

    // Castling rook move.
    if let Some(side) = castle_side_for_move(piece, from, to) {
        let rook_from = rook_home(piece.color, side);
        let (_, rook_to) = castle_destinations(piece.color, side);
        game_state.board.relocate(rook_from, rook_to);
        entry.rook_relocation = Some((rook_from, rook_to));
    }

    // En-passant victim stands behind the target square.
    if is_en_passant_capture(game_state, piece, from, to) {
        let victim_sq = en_passant_victim_square(from, to);
        let enemy_pawn = Piece::new(PieceKind::Pawn, piece.color.opposite());
        if game_state.board.get(victim_sq) == Some(enemy_pawn) {
            game_state.board.set(victim_sq, None);
            entry.captured = Some((victim_sq, enemy_pawn));
        }
    }

    game_state.en_passant_target = if piece.kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
        from.offset(0, piece.color.forward())
    } else {
        None
    };

    update_castling_rights(game_state, piece, from, to);

    if let Some(captured) = game_state.board.relocate(from, to) {
        entry.captured = Some((to, captured));
    }
    if piece.kind == PieceKind::King {
        game_state.king_positions[piece.color.index()] = to;
    }

    if piece.kind == PieceKind::Pawn || entry.captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if piece.color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.current_player = piece.color.opposite();

    let outcome = MoveOutcome {
        from,
        to,
        moved_piece: piece,
        captured: entry.captured,
        rook_relocation: entry.rook_relocation,
        gives_check: false,
        game_over: false,
        winner: None,
    };
    game_state.history.push(entry);
    game_state.outcome = classify_outcome(game_state);

    debug!(
        %from,
        %to,
        piece = %piece,
        captured = ?outcome.captured_piece(),
        halfmove_clock = game_state.halfmove_clock,
        "move applied"
    );
    if game_state.outcome != GameOutcome::InProgress {
        info!(result = %game_state.outcome, "game over");
    }

    Ok(MoveOutcome {
        gives_check: is_king_in_check(game_state, game_state.current_player),
        game_over: game_state.outcome.is_over(),
        winner: game_state.outcome.winner(),
        ..outcome
    })
}

pub fn undo_move(game_state: &mut GameState) -> ChessResult<UndoOutcome> {
    let entry = game_state.history.pop().ok_or(ChessError::NothingToUndo)?;

    game_state.board.set(entry.to, None);
    game_state.board.set(entry.from, Some(entry.moved_piece));
    if let Some((square, piece)) = entry.captured {
        game_state.board.set(square, Some(piece));
    }
    if let Some((rook_from, rook_to)) = entry.rook_relocation {
        game_state.board.relocate(rook_to, rook_from);
    }

    let color = entry.moved_piece.color;
    if entry.moved_piece.kind == PieceKind::King {
        game_state.king_positions[color.index()] = entry.from;
    }
    game_state.castling_rights = entry.prev_castling_rights;
    game_state.en_passant_target = entry.prev_en_passant_target;
    game_state.halfmove_clock = entry.prev_halfmove_clock;
    game_state.fullmove_number = entry.prev_fullmove_number;
    game_state.current_player = color;
    game_state.outcome = GameOutcome::InProgress;

    debug!(from = %entry.to, to = %entry.from, piece = %entry.moved_piece, "move undone");

    Ok(UndoOutcome {
        restored_from: entry.to,
        restored_to: entry.from,
        moved_piece: entry.moved_piece,
        recaptured: entry.captured,
        rook_relocation: entry.rook_relocation.map(|(rook_from, rook_to)| (rook_to, rook_from)),
    })
}

fn update_castling_rights(game_state: &mut GameState, piece: Piece, from: Square, to: Square) {
    let rights = &mut game_state.castling_rights;

    if piece.kind == PieceKind::King {
        rights.revoke_all(piece.color);
    }

    for color in Color::ALL {
        for side in CastleSide::ALL {
            let home = rook_home(color, side);
            // A rook leaving home, or anything landing on a rook's home square
            // (which captures it), ends that castle.
            if (piece.kind == PieceKind::Rook && piece.color == color && from == home) || to == home {
                rights.revoke(color, side);
            }
        }
    }
}
