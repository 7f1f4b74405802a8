use crate::game_state::chess_types::{Bitboard, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;

    #[test]
    fn queen_rays_from_d4_have_twenty_seven_squares() {
        let d4 = 27u8;
        assert_eq!(queen_attacks(d4, 0).count_ones(), 27);
    }

    #[test]
    fn queen_attacks_match_union() {
        let d4 = 27u8;
        let blockers = (1u64 << 43) | (1u64 << 30);
        let attacks = queen_attacks(d4, blockers);

        assert_ne!(attacks & (1u64 << 43), 0);
        assert_ne!(attacks & (1u64 << 30), 0);
        assert_eq!(attacks & (1u64 << 51), 0);
        assert_eq!(attacks & (1u64 << 31), 0);
    }
}
