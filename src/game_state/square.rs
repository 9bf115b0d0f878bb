//! Board squares and square sets.
//!
//! A `Square` is one of the 64 file/rank identities, indexed `0 == a1`,
//! `7 == h1`, `63 == h8`. It can only be built from in-range coordinates, so
//! every `Square` value in the engine is on the board. `SquareSet` is a
//! one-bit-per-square set over the same indexing and is what move generation
//! hands back to callers.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);

    /// Square from zero-based file (`a == 0`) and rank (`1 == 0`).
    pub fn new(file: u8, rank: u8) -> ChessResult<Self> {
        if file > 7 || rank > 7 {
            return Err(ChessError::OutOfRange(format!("file {file}, rank {rank}")));
        }
        Ok(Square(rank * 8 + file))
    }

    pub fn from_index(index: u8) -> ChessResult<Self> {
        if index > 63 {
            return Err(ChessError::OutOfRange(format!("square index {index}")));
        }
        Ok(Square(index))
    }

    /// Index is masked into range; only for internal bit iteration.
    #[inline]
    pub(crate) const fn from_index_masked(index: u8) -> Self {
        Square(index & 63)
    }

    /// Square from the scene grid, where row 0 is rank 8 and column 0 is file a.
    pub fn from_row_col(row: u8, col: u8) -> ChessResult<Self> {
        if row > 7 || col > 7 {
            return Err(ChessError::OutOfRange(format!("row {row}, column {col}")));
        }
        Square::new(col, 7 - row)
    }

    /// Inverse of [`Square::from_row_col`].
    #[inline]
    pub const fn to_row_col(self) -> (u8, u8) {
        (7 - self.rank(), self.file())
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// The square `d_file`/`d_rank` away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let file = self.file() as i8 + d_file;
        let rank = self.rank() as i8 + d_rank;
        if Board::is_in_bounds(file, rank) {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", square_to_algebraic(*self))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// Set of squares, one bit per square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn from_mask(mask: u64) -> Self {
        SquareSet(mask)
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & square.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        self.0 |= square.bit();
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !square.bit();
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;

    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl Not for SquareSet {
    type Output = SquareSet;

    fn not(self) -> SquareSet {
        SquareSet(!self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

/// Iterates a set in ascending square order.
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square::from_index_masked(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use super::{Square, SquareSet};
    use crate::chess_errors::ChessError;

    #[test]
    fn grid_and_notation_agree_on_every_square() {
        for square in Square::all() {
            let (row, col) = square.to_row_col();
            assert_eq!(Square::from_row_col(row, col).expect("in range"), square);

            let text = square.to_string();
            assert_eq!(text.parse::<Square>().expect("notation should parse"), square);
        }
    }

    #[test]
    fn grid_row_zero_is_rank_eight() {
        let a8 = Square::from_row_col(0, 0).expect("a8 in range");
        let h1 = Square::from_row_col(7, 7).expect("h1 in range");
        assert_eq!(a8, Square::A8);
        assert_eq!(h1, Square::H1);
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        assert!(matches!(Square::new(8, 0), Err(ChessError::OutOfRange(_))));
        assert!(matches!(Square::from_row_col(0, 8), Err(ChessError::OutOfRange(_))));
        assert!(matches!(Square::from_index(64), Err(ChessError::OutOfRange(_))));
    }

    #[test]
    fn offsets_off_the_board_are_none() {
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
        assert_eq!(Square::E1.offset(1, 1).map(|sq| sq.to_string()), Some("f2".to_owned()));
    }

    #[test]
    fn set_iterates_in_index_order() {
        let set: SquareSet = [Square::H8, Square::A1, Square::E1].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(Square::E1));
        let ordered: Vec<Square> = set.iter().collect();
        assert_eq!(ordered, vec![Square::A1, Square::E1, Square::H8]);
    }
}
