//! Piece placement.
//!
//! `Board` maps each of the 64 squares to a piece or nothing and keeps
//! per-color occupancy masks in step with every write. It knows nothing about
//! chess rules.

use crate::game_state::chess_types::*;

const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    occupancy_by_color: [u64; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
            occupancy_by_color: [0; 2],
        }
    }

    /// Standard initial placement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let file = file as u8;
            for color in Color::ALL {
                let back = Square::new(file, color.back_rank()).expect("file and rank in range");
                let pawn = Square::new(file, color.pawn_home_rank()).expect("file and rank in range");
                board.set(back, Some(Piece::new(*kind, color)));
                board.set(pawn, Some(Piece::new(PieceKind::Pawn, color)));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Writes `piece` (or clears) the square, returning what was there.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let slot = &mut self.squares[square.index() as usize];
        let previous = std::mem::replace(slot, piece);
        if let Some(old) = previous {
            self.occupancy_by_color[old.color.index()] &= !square.bit();
        }
        if let Some(new) = piece {
            self.occupancy_by_color[new.color.index()] |= square.bit();
        }
        previous
    }

    /// Whether a zero-based file/rank pair lies on the board.
    #[inline]
    pub const fn is_in_bounds(file: i8, rank: i8) -> bool {
        file >= 0 && file < 8 && rank >= 0 && rank < 8
    }

    /// Moves whatever stands on `from` to `to`, returning the piece displaced on `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.set(from, None);
        self.set(to, moving)
    }

    #[inline]
    pub fn occupancy(&self, color: Color) -> SquareSet {
        SquareSet::from_mask(self.occupancy_by_color[color.index()])
    }

    #[inline]
    pub fn occupancy_all(&self) -> SquareSet {
        SquareSet::from_mask(self.occupancy_by_color[0] | self.occupancy_by_color[1])
    }

    /// Squares holding `kind` pieces of `color`.
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> SquareSet {
        self.occupancy(color)
            .iter()
            .filter(|sq| self.get(*sq).map(|p| p.kind) == Some(kind))
            .collect()
    }

    /// Every occupied square with its piece, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupancy_all()
            .into_iter()
            .filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).iter().next()
    }
}
