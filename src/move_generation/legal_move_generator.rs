//! Legality filter.
//!
//! Every pseudo-legal destination is played out on a scratch copy of the
//! board, including the rook hop of a castle and the pawn removed by en
//! passant, and rejected when the mover's king ends up attacked. The live
//! board is never touched.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_destinations, rook_home};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_king::castle_side_for_move;
use crate::move_generation::legal_moves_pawn::{en_passant_victim_square, is_en_passant_capture};
use crate::move_generation::move_generator::{pseudo_legal_destinations, ChessMove};

/// Legal destinations for the piece on `from`, whichever color it is.
pub fn legal_destinations(game_state: &GameState, from: Square) -> SquareSet {
    let Some(piece) = game_state.board.get(from) else {
        return SquareSet::EMPTY;
    };

    pseudo_legal_destinations(game_state, from)
        .iter()
        .filter(|to| !leaves_king_attacked(game_state, piece, from, *to))
        .collect()
}

/// All legal moves for `color`, in board order.
pub fn legal_moves_for_color(game_state: &GameState, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(48);
    for from in game_state.board.occupancy(color) {
        for to in legal_destinations(game_state, from) {
            moves.push(ChessMove::new(from, to));
        }
    }
    moves
}

/// Whether `color` has at least one legal move; stops at the first one found.
pub fn has_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .board
        .occupancy(color)
        .iter()
        .any(|from| !legal_destinations(game_state, from).is_empty())
}

fn leaves_king_attacked(game_state: &GameState, piece: Piece, from: Square, to: Square) -> bool {
    let scratch = play_on_scratch_board(game_state, piece, from, to);
    let king_sq = if piece.kind == PieceKind::King {
        to
    } else {
        game_state.king_position(piece.color)
    };
    is_square_attacked(&scratch, king_sq, piece.color.opposite())
}

/// Board after `piece` moves `from` → `to`, with every side effect on pieces.
fn play_on_scratch_board(game_state: &GameState, piece: Piece, from: Square, to: Square) -> Board {
    let mut scratch = game_state.board.clone();

    if is_en_passant_capture(game_state, piece, from, to) {
        scratch.set(en_passant_victim_square(from, to), None);
    }
    if let Some(side) = castle_side_for_move(piece, from, to) {
        let (_, rook_to) = castle_destinations(piece.color, side);
        scratch.relocate(rook_home(piece.color, side), rook_to);
    }
    scratch.relocate(from, to);

    scratch
}
