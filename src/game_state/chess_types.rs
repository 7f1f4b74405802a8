//! Primitive chess types shared by every layer of the engine.
//!
//! Squares are plain `u8` indices in rank-major order (`a1 == 0`,
//! `h1 == 7`, `a8 == 56`, `h8 == 63`) and bitboards are plain `u64` sets
//! with bit `n` standing for square `n`.

pub use crate::game_state::game_state::GameState;
use crate::errors::SquareError;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter used by FEN and coordinate notation.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

pub const ALL_COLORS: [Color; 2] = [Color::White, Color::Black];

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Board square index (`0..=63`).
pub type Square = u8;

/// Set of squares, one bit per square.
pub type Bitboard = u64;

pub const FILE_A: Bitboard = 0x0101_0101_0101_0101;
pub const FILE_B: Bitboard = 0x0202_0202_0202_0202;
pub const FILE_G: Bitboard = 0x4040_4040_4040_4040;
pub const FILE_H: Bitboard = 0x8080_8080_8080_8080;
pub const RANK_1: Bitboard = 0x0000_0000_0000_00FF;
pub const RANK_2: Bitboard = 0x0000_0000_0000_FF00;
pub const RANK_3: Bitboard = 0x0000_0000_00FF_0000;
pub const RANK_6: Bitboard = 0x0000_FF00_0000_0000;
pub const RANK_7: Bitboard = 0x00FF_0000_0000_0000;
pub const RANK_8: Bitboard = 0xFF00_0000_0000_0000;

pub const FILE_AB: Bitboard = FILE_A | FILE_B;
pub const FILE_GH: Bitboard = FILE_G | FILE_H;

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

/// One-hot bitboard for `square`. Indices past h8 give the empty set rather
/// than wrapping onto the board.
#[inline]
pub const fn square_bit(square: Square) -> Bitboard {
    match 1u64.checked_shl(square as u32) {
        Some(bit) => bit,
        None => 0,
    }
}

/// One-hot bitboard for an untrusted square index.
#[inline]
pub fn checked_square_bit(square: u8) -> Result<Bitboard, SquareError> {
    if square > 63 {
        return Err(SquareError::OutOfBounds(square));
    }
    Ok(1u64 << square)
}

/// Lowest set square of a non-empty bitboard.
#[inline]
pub const fn lowest_square(bitboard: Bitboard) -> Square {
    bitboard.trailing_zeros() as Square
}
