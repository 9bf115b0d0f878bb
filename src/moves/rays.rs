//! Ray tracing shared by the sliding pieces.

use crate::game_state::chess_types::{Square, SquareSet};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

/// Squares reached stepping from `square` along one direction, up to and
/// including the first occupied square.
pub fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: SquareSet) -> SquareSet {
    let mut attacks = SquareSet::EMPTY;
    let mut current = square.offset(file_step, rank_step);

    while let Some(target) = current {
        attacks.insert(target);
        if occupancy.contains(target) {
            break;
        }
        current = target.offset(file_step, rank_step);
    }

    attacks
}

/// Union of [`trace_ray`] over a direction set.
pub fn trace_rays(square: Square, directions: &[(i8, i8)], occupancy: SquareSet) -> SquareSet {
    directions
        .iter()
        .fold(SquareSet::EMPTY, |acc, &(file_step, rank_step)| {
            acc | trace_ray(square, file_step, rank_step, occupancy)
        })
}
