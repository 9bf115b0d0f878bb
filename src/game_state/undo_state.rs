use crate::game_state::chess_types::*;

/// History record for one applied move; enough to invert it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    /// Captured piece and the square it stood on (differs from `to` for en passant).
    pub captured: Option<(Square, Piece)>,
    /// Rook relocation `(from, to)` when the move castled.
    pub rook_relocation: Option<(Square, Square)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
}
