use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_from_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::MoveDescription;

pub fn generate_knight_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    generate_from_attacks(game_state, PieceKind::Knight, out, |from, _| {
        knight_attacks(from)
    });
}
