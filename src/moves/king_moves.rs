//! King attack table.
//!
//! One lookup per square, computed at compile time with the same shift and
//! file-mask technique as the knight table.

use crate::game_state::chess_types::{Bitboard, Square, FILE_A, FILE_H};

pub const KING_ATTACKS: [Bitboard; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> Bitboard {
    if (square as usize) < KING_ATTACKS.len() {
        KING_ATTACKS[square as usize]
    } else {
        0
    }
}

const fn king_targets(from: Bitboard) -> Bitboard {
    let mut attacks = 0u64;

    attacks |= from << 8;
    attacks |= from >> 8;
    attacks |= (from & !FILE_H) << 9;
    attacks |= (from & !FILE_A) >> 9;
    attacks |= (from & !FILE_A) << 7;
    attacks |= (from & !FILE_H) >> 7;
    attacks |= (from & !FILE_H) << 1;
    attacks |= (from & !FILE_A) >> 1;

    attacks
}

const fn generate_king_attacks() -> [Bitboard; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = king_targets(1u64 << sq);
        sq += 1;
    }

    table
}
