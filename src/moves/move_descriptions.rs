//! Compact move value.
//!
//! A move carries its origin, destination, the kind of the moving piece and
//! a flag bitmask describing everything special about it. Castle flags are
//! mutually exclusive, as are promotion flags.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_name;

pub type MoveFlags = u16;

pub const FLAG_NONE: MoveFlags = 0;
pub const FLAG_CAPTURE: MoveFlags = 1 << 0;
pub const FLAG_DOUBLE_PAWN_PUSH: MoveFlags = 1 << 1;
pub const FLAG_EN_PASSANT: MoveFlags = 1 << 2;
pub const FLAG_CASTLE_KINGSIDE: MoveFlags = 1 << 3;
pub const FLAG_CASTLE_QUEENSIDE: MoveFlags = 1 << 4;
pub const FLAG_PROMOTE_QUEEN: MoveFlags = 1 << 5;
pub const FLAG_PROMOTE_ROOK: MoveFlags = 1 << 6;
pub const FLAG_PROMOTE_BISHOP: MoveFlags = 1 << 7;
pub const FLAG_PROMOTE_KNIGHT: MoveFlags = 1 << 8;

pub const FLAG_CASTLE_MASK: MoveFlags = FLAG_CASTLE_KINGSIDE | FLAG_CASTLE_QUEENSIDE;
pub const FLAG_PROMOTION_MASK: MoveFlags =
    FLAG_PROMOTE_QUEEN | FLAG_PROMOTE_ROOK | FLAG_PROMOTE_BISHOP | FLAG_PROMOTE_KNIGHT;

/// Promotion flags in generation order.
pub const PROMOTION_FLAGS: [MoveFlags; 4] = [
    FLAG_PROMOTE_QUEEN,
    FLAG_PROMOTE_ROOK,
    FLAG_PROMOTE_BISHOP,
    FLAG_PROMOTE_KNIGHT,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    pub flags: MoveFlags,
    pub piece: PieceKind,
}

impl MoveDescription {
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceKind, flags: MoveFlags) -> Self {
        Self {
            from,
            to,
            flags,
            piece,
        }
    }

    #[inline]
    pub const fn has(self, flag: MoveFlags) -> bool {
        self.flags & flag != 0
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.has(FLAG_CAPTURE)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.has(FLAG_EN_PASSANT)
    }

    #[inline]
    pub const fn is_double_push(self) -> bool {
        self.has(FLAG_DOUBLE_PAWN_PUSH)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.has(FLAG_CASTLE_MASK)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.has(FLAG_PROMOTION_MASK)
    }

    /// Kind the pawn turns into, if this is a promotion.
    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        if self.has(FLAG_PROMOTE_QUEEN) {
            Some(PieceKind::Queen)
        } else if self.has(FLAG_PROMOTE_ROOK) {
            Some(PieceKind::Rook)
        } else if self.has(FLAG_PROMOTE_BISHOP) {
            Some(PieceKind::Bishop)
        } else if self.has(FLAG_PROMOTE_KNIGHT) {
            Some(PieceKind::Knight)
        } else {
            None
        }
    }
}

/// Coordinate notation: origin, destination and an optional promotion
/// letter (`e2e4`, `e7e8q`). Display only.
impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_name(self.from))?;
        f.write_str(&square_name(self.to))?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}
