//! Canonical chess-rule constants.
//!
//! This module stores the standard starting position and the fixed castling
//! geometry (king/rook home squares, transit squares, and the squares that
//! must be empty) for both colors.

use crate::game_state::chess_types::*;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Which wing a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Squares and masks describing one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingGeometry {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook.
    pub must_be_empty: Bitboard,
    /// King origin, transit and destination.
    pub must_be_safe: [Square; 3],
}

const WHITE_KINGSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_WHITE_KINGSIDE,
    king_from: 4,
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    must_be_empty: (1 << 5) | (1 << 6),
    must_be_safe: [4, 5, 6],
};

const WHITE_QUEENSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_WHITE_QUEENSIDE,
    king_from: 4,
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    must_be_empty: (1 << 1) | (1 << 2) | (1 << 3),
    must_be_safe: [4, 3, 2],
};

const BLACK_KINGSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_BLACK_KINGSIDE,
    king_from: 60,
    king_to: 62,
    rook_from: 63,
    rook_to: 61,
    must_be_empty: (1 << 61) | (1 << 62),
    must_be_safe: [60, 61, 62],
};

const BLACK_QUEENSIDE: CastlingGeometry = CastlingGeometry {
    right: CASTLE_BLACK_QUEENSIDE,
    king_from: 60,
    king_to: 58,
    rook_from: 56,
    rook_to: 59,
    must_be_empty: (1 << 57) | (1 << 58) | (1 << 59),
    must_be_safe: [60, 59, 58],
};

#[inline]
pub const fn castling_geometry(color: Color, side: CastleSide) -> &'static CastlingGeometry {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => &WHITE_KINGSIDE,
        (Color::White, CastleSide::QueenSide) => &WHITE_QUEENSIDE,
        (Color::Black, CastleSide::KingSide) => &BLACK_KINGSIDE,
        (Color::Black, CastleSide::QueenSide) => &BLACK_QUEENSIDE,
    }
}

/// Both castling rights of one color.
#[inline]
pub const fn rights_of(color: Color) -> CastlingRights {
    match color {
        Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
    }
}

/// Rank a pawn of `color` promotes on.
#[inline]
pub const fn promotion_rank(color: Color) -> Bitboard {
    match color {
        Color::White => RANK_8,
        Color::Black => RANK_1,
    }
}

/// Rank a pawn of `color` may double-push from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> Bitboard {
    match color {
        Color::White => RANK_2,
        Color::Black => RANK_7,
    }
}

/// Rank the en-passant target lies on when `side_to_move` may capture.
#[inline]
pub const fn en_passant_target_rank(side_to_move: Color) -> Bitboard {
    match side_to_move {
        Color::White => RANK_6,
        Color::Black => RANK_3,
    }
}

/// Square of the pawn that double-pushed across `target`.
#[inline]
pub const fn en_passant_victim(side_to_move: Color, target: Square) -> Square {
    match side_to_move {
        Color::White => target.wrapping_sub(8),
        Color::Black => target.wrapping_add(8),
    }
}
