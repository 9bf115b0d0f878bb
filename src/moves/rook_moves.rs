use crate::game_state::chess_types::{Square, SquareSet};
use crate::moves::rays::{trace_rays, ORTHOGONAL_DIRECTIONS};

/// Rook reach from `square` given board occupancy; blockers are included.
#[inline]
pub fn rook_attacks(square: Square, occupancy: SquareSet) -> SquareSet {
    trace_rays(square, &ORTHOGONAL_DIRECTIONS, occupancy)
}
