use chess::{Color, Piece};

use crate::board::Grid;

pub const PAWN_VALUE: i16 = 1;
pub const KNIGHT_VALUE: i16 = 3;
pub const BISHOP_VALUE: i16 = 3;
pub const ROOK_VALUE: i16 = 5;
pub const QUEEN_VALUE: i16 = 9;
pub const KING_VALUE: i16 = 0;

#[inline(always)]
pub fn piece_value(piece: Piece) -> i16 {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}

/// Sums the values of all pieces `color` has on the board.
pub fn material(grid: &Grid, color: Color) -> i16 {
    grid.iter()
        .flatten()
        .filter_map(|cell| match cell {
            Some((piece, owner)) if *owner == color => Some(piece_value(*piece)),
            _ => None,
        })
        .sum()
}

/// Sums the values of a list of pieces, e.g. a side's captures.
pub fn total_value(pieces: &[Piece]) -> i16 {
    pieces.iter().map(|&piece| piece_value(piece)).sum()
}
