//! Square and bitboard conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! square/bitboard representations reused by the FEN and coordinate-move
//! components.

use crate::errors::SquareError;
use crate::game_state::chess_types::{Bitboard, Square};

/// Convert algebraic notation (for example: "e4") to a square index.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, SquareError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(SquareError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(SquareError::InvalidAlgebraic(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert algebraic notation (for example: "e4") to a one-hot bitboard.
#[inline]
pub fn algebraic_to_bitboard(square: &str) -> Result<Bitboard, SquareError> {
    let index = algebraic_to_square(square)?;
    Ok(1u64 << index)
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, SquareError> {
    if square > 63 {
        return Err(SquareError::OutOfBounds(square));
    }

    Ok(square_name(square))
}

/// Name of a square already known to be on the board.
#[inline]
pub fn square_name(square: Square) -> String {
    let square = square & 63;
    let file_char = char::from(b'a' + square % 8);
    let rank_char = char::from(b'1' + square / 8);

    format!("{file_char}{rank_char}")
}

/// Convert a one-hot bitboard to algebraic notation (for example: "e4").
#[inline]
pub fn bitboard_to_algebraic(bitboard: Bitboard) -> Result<String, SquareError> {
    if bitboard.count_ones() != 1 {
        return Err(SquareError::NotOneHot(bitboard.count_ones()));
    }

    square_to_algebraic(bitboard.trailing_zeros() as Square)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), 63);
        assert_eq!(square_to_algebraic(0).expect("0 should convert"), "a1");
        assert_eq!(square_to_algebraic(63).expect("63 should convert"), "h8");
    }

    #[test]
    fn round_trip_bitboard_conversion() {
        let e4 = algebraic_to_bitboard("e4").expect("e4 should parse");
        assert_eq!(e4, 1u64 << 28);
        assert_eq!(
            bitboard_to_algebraic(e4).expect("one-hot bitboard should convert"),
            "e4"
        );
    }

    #[test]
    fn rejects_bad_coordinates() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert_eq!(square_to_algebraic(64), Err(SquareError::OutOfBounds(64)));
        assert_eq!(bitboard_to_algebraic(0), Err(SquareError::NotOneHot(0)));
        assert_eq!(bitboard_to_algebraic(3), Err(SquareError::NotOneHot(2)));
    }
}
