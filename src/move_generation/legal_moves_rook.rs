use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_from_attacks;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    generate_from_attacks(game_state, PieceKind::Rook, out, rook_attacks);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_rooks_are_boxed_in() {
        let mut moves = Vec::new();
        generate_rook_moves(&GameState::new_game(), &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn rook_on_open_file_reaches_enemy_blocker() {
        let game = GameState::from_fen("3rk3/8/8/8/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_rook_moves(&game, &mut moves);
        // d2..d8 plus a1 b1 c1
        assert_eq!(moves.len(), 10);
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 1);
    }
}
