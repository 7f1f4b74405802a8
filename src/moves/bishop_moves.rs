//! Bishop attack sets from diagonal ray walks.

use crate::game_state::chess_types::{square_bit, Bitboard, Square};
use crate::moves::rays::{ray_attacks, DIAGONALS};

#[inline]
pub fn bishop_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    let origin = square_bit(square);
    let mut attacks = 0u64;

    for direction in DIAGONALS {
        attacks |= ray_attacks(origin, direction, occupancy);
    }

    attacks
}
