//! Knight attack table.
//!
//! Built at compile time by shifting a one-hot bitboard along the eight
//! knight jumps, masking off the files that would wrap around the board.

use crate::game_state::chess_types::{Bitboard, Square, FILE_A, FILE_AB, FILE_GH, FILE_H};

pub const KNIGHT_ATTACKS: [Bitboard; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: Square) -> Bitboard {
    if (square as usize) < KNIGHT_ATTACKS.len() {
        KNIGHT_ATTACKS[square as usize]
    } else {
        0
    }
}

/// Knight targets from every square set in `from`.
pub const fn knight_targets(from: Bitboard) -> Bitboard {
    let mut attacks = 0u64;

    attacks |= (from & !FILE_H) << 17;
    attacks |= (from & !FILE_A) << 15;
    attacks |= (from & !FILE_GH) << 10;
    attacks |= (from & !FILE_AB) << 6;
    attacks |= (from & !FILE_H) >> 15;
    attacks |= (from & !FILE_A) >> 17;
    attacks |= (from & !FILE_GH) >> 6;
    attacks |= (from & !FILE_AB) >> 10;

    attacks
}

const fn generate_knight_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = knight_targets(1u64 << sq);
        sq += 1;
    }

    table
}
