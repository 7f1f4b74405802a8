use crate::game_state::chess_types::{Bitboard, Color, FILE_A, FILE_H};

/// Squares attacked by every pawn in `pawns`, moving as `color`.
///
/// The whole set is shifted along both capture diagonals at once; the
/// file masks drop pawns that would wrap from one edge file to the other.
#[inline]
pub const fn pawn_attacks(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::White => ((pawns & !FILE_H) << 9) | ((pawns & !FILE_A) << 7),
        Color::Black => ((pawns & !FILE_H) >> 7) | ((pawns & !FILE_A) >> 9),
    }
}

/// Single-step push targets, ignoring occupancy.
#[inline]
pub const fn pawn_pushes(color: Color, pawns: Bitboard) -> Bitboard {
    match color {
        Color::White => pawns << 8,
        Color::Black => pawns >> 8,
    }
}
