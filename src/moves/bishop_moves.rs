//! Bishop reach over the four diagonals.

use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::rays::{trace_rays, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    trace_rays(square, &DIAGONAL_DIRECTIONS, occupancy)
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::{Square, SquareSet};

    #[test]
    fn bishop_in_corner_sees_the_long_diagonal() {
        let attacks = bishop_attacks(Square::A1, SquareSet::EMPTY);
        assert_eq!(attacks.len(), 7);
        assert!(attacks.contains(Square::H8));
    }

    #[test]
    fn bishop_stops_on_first_blocker() {
        let d4: Square = "d4".parse().expect("d4 should parse");
        let f6: Square = "f6".parse().expect("f6 should parse");
        let blockers: SquareSet = [f6].into_iter().collect();
        let attacks = bishop_attacks(d4, blockers);

        assert!(attacks.contains(f6));
        assert!(!attacks.contains("g7".parse().expect("g7 should parse")));
        assert_eq!(attacks.len(), 11);
    }
}
