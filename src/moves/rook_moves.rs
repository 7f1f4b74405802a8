use crate::game_state::chess_types::{square_bit, Bitboard, Square};
use crate::moves::rays::{ray_attacks, ORTHOGONALS};

#[inline]
pub fn rook_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    let origin = square_bit(square);
    let mut attacks = 0u64;

    for direction in ORTHOGONALS {
        attacks |= ray_attacks(origin, direction, occupancy);
    }

    attacks
}
