use crate::game_state::chess_rules::{castling_geometry, CastleSide};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::square_attacked;
use crate::move_generation::legal_move_shared::generate_from_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE,
};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    generate_from_attacks(game_state, PieceKind::King, out, |from, _| king_attacks(from));

    let side = game_state.side_to_move;
    for (castle_side, flag) in [
        (CastleSide::KingSide, FLAG_CASTLE_KINGSIDE),
        (CastleSide::QueenSide, FLAG_CASTLE_QUEENSIDE),
    ] {
        if can_castle(game_state, side, castle_side) {
            let geometry = castling_geometry(side, castle_side);
            out.push(MoveDescription::new(
                geometry.king_from,
                geometry.king_to,
                PieceKind::King,
                flag,
            ));
        }
    }
}

/// Whether `color` may castle toward `side` right now.
///
/// The right flag alone is not trusted: the king and rook must actually stand
/// on their home squares, the squares between them must be empty, and the
/// king may not start on, pass through or land on an attacked square.
pub fn can_castle(game_state: &GameState, color: Color, side: CastleSide) -> bool {
    let geometry = castling_geometry(color, side);

    if !game_state.has_castling_right(geometry.right) {
        return false;
    }
    if game_state.pieces_of(color, PieceKind::King) & square_bit(geometry.king_from) == 0 {
        return false;
    }
    if game_state.pieces_of(color, PieceKind::Rook) & square_bit(geometry.rook_from) == 0 {
        return false;
    }
    if game_state.occupancy_all & geometry.must_be_empty != 0 {
        return false;
    }

    let enemy = color.opposite();
    geometry
        .must_be_safe
        .iter()
        .all(|square| !square_attacked(game_state, *square, enemy))
}
