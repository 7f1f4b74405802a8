use crate::errors::SquareError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rays::{first_blocker, DIAGONALS, ORTHOGONALS};
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    let kings = game_state.pieces_of(color, PieceKind::King);
    if kings == 0 {
        None
    } else {
        Some(lowest_square(kings))
    }
}

/// A side without a king is never in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any `attacker_color` piece attacks `square`.
pub fn is_square_attacked(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
) -> Result<bool, SquareError> {
    checked_square_bit(square)?;
    Ok(square_attacked(game_state, square, attacker_color))
}

/// Attack test for a square already known to be on the board.
///
/// Sliders are found by walking the eight rays outward from the target: the
/// first occupied square either holds a matching slider or blocks the ray.
pub(crate) fn square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let target = square_bit(square);

    if pawn_attacks(attacker_color, game_state.pieces_of(attacker_color, PieceKind::Pawn)) & target
        != 0
    {
        return true;
    }

    if knight_attacks(square) & game_state.pieces_of(attacker_color, PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(square) & game_state.pieces_of(attacker_color, PieceKind::King) != 0 {
        return true;
    }

    let queens = game_state.pieces_of(attacker_color, PieceKind::Queen);
    let rooks_queens = game_state.pieces_of(attacker_color, PieceKind::Rook) | queens;
    let bishops_queens = game_state.pieces_of(attacker_color, PieceKind::Bishop) | queens;
    let occupancy = game_state.occupancy_all;

    if rooks_queens != 0 {
        for direction in ORTHOGONALS {
            if first_blocker(target, direction, occupancy) & rooks_queens != 0 {
                return true;
            }
        }
    }

    if bishops_queens != 0 {
        for direction in DIAGONALS {
            if first_blocker(target, direction, occupancy) & bishops_queens != 0 {
                return true;
            }
        }
    }

    false
}

/// Every `attacker_color` piece attacking `square`, in piece-kind order.
pub fn attackers_to_square(
    game_state: &GameState,
    square: Square,
    attacker_color: Color,
) -> Result<Vec<(Square, PieceKind)>, SquareError> {
    let target_mask = checked_square_bit(square)?;
    let occupancy = game_state.occupancy_all;
    let mut attackers = Vec::<(Square, PieceKind)>::new();

    for piece in ALL_PIECE_KINDS {
        let mut pieces = game_state.pieces_of(attacker_color, piece);
        while pieces != 0 {
            let from = lowest_square(pieces);
            let attacks = match piece {
                PieceKind::Pawn => pawn_attacks(attacker_color, square_bit(from)),
                PieceKind::Knight => knight_attacks(from),
                PieceKind::Bishop => bishop_attacks(from, occupancy),
                PieceKind::Rook => rook_attacks(from, occupancy),
                PieceKind::Queen => bishop_attacks(from, occupancy) | rook_attacks(from, occupancy),
                PieceKind::King => king_attacks(from),
            };
            if attacks & target_mask != 0 {
                attackers.push((from, piece));
            }
            pieces &= pieces - 1;
        }
    }

    Ok(attackers)
}
