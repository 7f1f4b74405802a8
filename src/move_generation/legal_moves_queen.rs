use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_from_attacks;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::queen_moves::queen_attacks;

pub fn generate_queen_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    generate_from_attacks(game_state, PieceKind::Queen, out, queen_attacks);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn centralised_queen_on_empty_board() {
        let game = GameState::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_queen_moves(&game, &mut moves);
        // neither king stands on a queen line
        assert_eq!(moves.len(), 27);
    }
}
