//! Pawn move generation.
//!
//! Single and double pushes onto empty squares, diagonal captures of enemy
//! pieces, and the diagonal step onto the en-passant target.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color) -> SquareSet {
    let board = &game_state.board;
    let empty = !board.occupancy_all();
    let mut out = SquareSet::EMPTY;

    if let Some(one_step) = from.offset(0, color.forward()) {
        if empty.contains(one_step) {
            out.insert(one_step);

            if from.rank() == color.pawn_home_rank() {
                if let Some(two_step) = one_step.offset(0, color.forward()) {
                    if empty.contains(two_step) {
                        out.insert(two_step);
                    }
                }
            }
        }
    }

    let attacks = pawn_attacks(color, from);
    out |= attacks & board.occupancy(color.opposite());

    if let Some(target) = en_passant_target_for(game_state, color) {
        if attacks.contains(target) && has_en_passant_victim(game_state, color, from, target) {
            out.insert(target);
        }
    }

    out
}

/// The en-passant target a `color` pawn could capture onto, if any.
///
/// The target is only meaningful for the side that did not make the double
/// step, which is recognisable from its rank.
pub fn en_passant_target_for(game_state: &GameState, color: Color) -> Option<Square> {
    let capture_rank = match color {
        Color::White => 5,
        Color::Black => 2,
    };
    game_state
        .en_passant_target
        .filter(|target| target.rank() == capture_rank)
}

/// Whether moving `piece` from `from` to `to` is an en-passant capture.
pub fn is_en_passant_capture(game_state: &GameState, piece: Piece, from: Square, to: Square) -> bool {
    piece.kind == PieceKind::Pawn
        && from.file() != to.file()
        && game_state.board.get(to).is_none()
        && en_passant_target_for(game_state, piece.color) == Some(to)
        && has_en_passant_victim(game_state, piece.color, from, to)
}

/// An enemy pawn stands where a `color` pawn capturing en passant from
/// `from` onto `to` would remove it.
fn has_en_passant_victim(game_state: &GameState, color: Color, from: Square, to: Square) -> bool {
    game_state.board.get(en_passant_victim_square(from, to)) == Some(Piece::new(PieceKind::Pawn, color.opposite()))
}

/// Square of the pawn removed by an en-passant capture onto `to`.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Square {
    Square::new(to.file(), from.rank()).expect("file and rank come from valid squares")
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn every_home_rank_pawn_has_exactly_its_two_pushes() {
        let game = GameState::new_game();
        for file in 0..8u8 {
            for color in Color::ALL {
                let from = Square::new(file, color.pawn_home_rank()).expect("home square in range");
                let one = from.offset(0, color.forward()).expect("one step on board");
                let two = one.offset(0, color.forward()).expect("two steps on board");
                let expected: SquareSet = [one, two].into_iter().collect();
                assert_eq!(generate_pawn_moves(&game, from, color), expected);
            }
        }
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("blocked pawn FEN should parse");
        assert!(generate_pawn_moves(&game, sq("e2"), Color::White).is_empty());

        let game = GameState::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1")
            .expect("half-blocked pawn FEN should parse");
        let moves = generate_pawn_moves(&game, sq("e2"), Color::White);
        assert_eq!(moves.len(), 1);
        assert!(moves.contains(sq("e3")));
    }

    #[test]
    fn pawn_captures_diagonally_only_enemies() {
        let game = GameState::from_fen("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1")
            .expect("capture FEN should parse");
        let moves = generate_pawn_moves(&game, sq("e2"), Color::White);
        assert!(moves.contains(sq("d3")));
        assert!(!moves.contains(sq("f3")));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn pawn_on_last_rank_has_no_forward_move() {
        let game = GameState::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1")
            .expect("last rank FEN should parse");
        assert!(generate_pawn_moves(&game, sq("a8"), Color::White).is_empty());
    }

    #[test]
    fn en_passant_target_is_offered_to_the_capturing_side_only() {
        let game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2")
            .expect("en passant FEN should parse");
        let moves = generate_pawn_moves(&game, sq("e5"), Color::White);
        assert!(moves.contains(sq("d6")));
        assert!(moves.contains(sq("e6")));
        assert!(generate_pawn_moves(&game, sq("d5"), Color::Black).contains(sq("d4")));
        assert!(!generate_pawn_moves(&game, sq("d5"), Color::Black).contains(sq("d6")));
    }
}
