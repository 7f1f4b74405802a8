//! Bit-parallel ray walks for sliding pieces.
//!
//! A ray is walked one square at a time by shifting a one-hot bitboard.
//! Before every step the bitboard is masked with the direction's edge mask,
//! so a square on the leading edge shifts to zero instead of wrapping onto
//! the opposite file (h-file to a-file and vice versa).

use crate::game_state::chess_types::{Bitboard, FILE_A, FILE_H, RANK_1, RANK_8};

/// The eight compass directions, as seen from White.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

pub const ORTHOGONALS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

pub const DIAGONALS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

impl Direction {
    /// Squares that cannot take another step in this direction.
    #[inline]
    pub const fn edge(self) -> Bitboard {
        match self {
            Direction::North => RANK_8,
            Direction::South => RANK_1,
            Direction::East => FILE_H,
            Direction::West => FILE_A,
            Direction::NorthEast => RANK_8 | FILE_H,
            Direction::NorthWest => RANK_8 | FILE_A,
            Direction::SouthEast => RANK_1 | FILE_H,
            Direction::SouthWest => RANK_1 | FILE_A,
        }
    }

    /// Move every square in `bitboard` one step; edge squares vanish.
    #[inline]
    pub const fn step(self, bitboard: Bitboard) -> Bitboard {
        let b = bitboard & !self.edge();
        match self {
            Direction::North => b << 8,
            Direction::South => b >> 8,
            Direction::East => b << 1,
            Direction::West => b >> 1,
            Direction::NorthEast => b << 9,
            Direction::NorthWest => b << 7,
            Direction::SouthEast => b >> 7,
            Direction::SouthWest => b >> 9,
        }
    }
}

/// Squares reached from `origin` along `direction`, up to and including the
/// first occupied square.
#[inline]
pub fn ray_attacks(origin: Bitboard, direction: Direction, occupancy: Bitboard) -> Bitboard {
    let mut attacks = 0u64;
    let mut p = direction.step(origin);

    while p != 0 {
        attacks |= p;
        if p & occupancy != 0 {
            break;
        }
        p = direction.step(p);
    }

    attacks
}

/// First occupied square along `direction`, as a one-hot bitboard (0 if the
/// ray runs off the board).
#[inline]
pub fn first_blocker(origin: Bitboard, direction: Direction, occupancy: Bitboard) -> Bitboard {
    let mut p = direction.step(origin);

    while p != 0 {
        if p & occupancy != 0 {
            return p;
        }
        p = direction.step(p);
    }

    0
}
