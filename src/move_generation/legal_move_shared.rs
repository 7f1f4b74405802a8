use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{MoveDescription, FLAG_CAPTURE, FLAG_NONE};

/// Target mask for a piece of the side to move: anything not holding a
/// friendly piece.
#[inline]
pub fn not_own(game_state: &GameState) -> Bitboard {
    !game_state.occupancy_by_color[game_state.side_to_move.index()]
}

#[inline]
pub fn enemy_occupancy(game_state: &GameState) -> Bitboard {
    game_state.occupancy_by_color[game_state.side_to_move.opposite().index()]
}

/// Push one move per square in `targets`, flagging captures of enemy pieces.
#[inline]
pub fn push_target_moves(
    from: Square,
    piece: PieceKind,
    mut targets: Bitboard,
    enemy_occ: Bitboard,
    out: &mut Vec<MoveDescription>,
) {
    while targets != 0 {
        let to = lowest_square(targets);
        let flags = if square_bit(to) & enemy_occ != 0 {
            FLAG_CAPTURE
        } else {
            FLAG_NONE
        };
        out.push(MoveDescription::new(from, to, piece, flags));
        targets &= targets - 1;
    }
}

/// Generate every move of one non-pawn piece kind using `attacks` to map an
/// origin square to its reachable squares.
#[inline]
pub fn generate_from_attacks(
    game_state: &GameState,
    piece: PieceKind,
    out: &mut Vec<MoveDescription>,
    attacks: impl Fn(Square, Bitboard) -> Bitboard,
) {
    let side = game_state.side_to_move;
    let allowed = not_own(game_state);
    let enemy_occ = enemy_occupancy(game_state);

    let mut pieces = game_state.pieces_of(side, piece);
    while pieces != 0 {
        let from = lowest_square(pieces);
        let targets = attacks(from, game_state.occupancy_all) & allowed;
        push_target_moves(from, piece, targets, enemy_occ, out);
        pieces &= pieces - 1;
    }
}
