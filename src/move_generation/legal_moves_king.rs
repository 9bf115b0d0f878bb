use crate::game_state::chess_rules::{
    castle_destinations, castle_gap, castle_king_path, king_home, rook_home,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::exclude_own_pieces;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color) -> SquareSet {
    let mut out = exclude_own_pieces(&game_state.board, color, king_attacks(from));
    for side in CastleSide::ALL {
        if can_castle(game_state, from, color, side) {
            out.insert(castle_destinations(color, side).0);
        }
    }
    out
}

/// Castling is offered when the right is held, king and rook stand on their
/// home squares, the gap between them is empty, and none of the king's start,
/// transit or landing squares is attacked.
pub fn can_castle(game_state: &GameState, from: Square, color: Color, side: CastleSide) -> bool {
    let board = &game_state.board;
    if !game_state.castling_rights.has(color, side) || from != king_home(color) {
        return false;
    }
    if board.get(from) != Some(Piece::new(PieceKind::King, color))
        || board.get(rook_home(color, side)) != Some(Piece::new(PieceKind::Rook, color))
    {
        return false;
    }
    if castle_gap(color, side).iter().any(|sq| board.get(*sq).is_some()) {
        return false;
    }

    let enemy = color.opposite();
    !castle_king_path(color, side)
        .iter()
        .any(|sq| is_square_attacked(board, *sq, enemy))
}

/// The castling side a king move from `from` to `to` performs, if any.
pub fn castle_side_for_move(piece: Piece, from: Square, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King || from != king_home(piece.color) {
        return None;
    }
    CastleSide::ALL
        .into_iter()
        .find(|side| castle_destinations(piece.color, *side).0 == to)
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn white_king_moves(fen: &str) -> SquareSet {
        let game = GameState::from_fen(fen).expect("king FEN should parse");
        generate_king_moves(&game, Square::E1, Color::White)
    }

    #[test]
    fn both_castles_offered_on_clear_back_rank() {
        let moves = white_king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert!(moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn castling_needs_the_right() {
        let moves = white_king_moves("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1");
        assert!(!moves.contains(Square::G1));
        assert!(moves.contains(Square::C1));
    }

    #[test]
    fn castling_needs_empty_gap() {
        let moves = white_king_moves("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1");
        assert!(!moves.contains(Square::G1));
        assert!(!moves.contains(Square::C1));
    }

    #[test]
    fn castling_blocked_by_attacked_transit_or_destination_or_check() {
        // f1 attacked by the f8 rook.
        let moves = white_king_moves("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!moves.contains(Square::G1));

        // g1 attacked by the g8 rook.
        let moves = white_king_moves("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!moves.contains(Square::G1));

        // King in check from the e8 rook.
        let moves = white_king_moves("k3r3/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!moves.contains(Square::G1));
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        // b1 is attacked but the king never crosses it.
        let moves = white_king_moves("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(moves.contains(Square::C1));
        assert!(!moves.contains(sq("b1")));
    }
}
