use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::generate_from_attacks;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::MoveDescription;

pub fn generate_bishop_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    generate_from_attacks(game_state, PieceKind::Bishop, out, bishop_attacks);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::game_state::GameState;

    #[test]
    fn bishop_stops_at_friendly_and_captures_enemy() {
        let game = GameState::from_fen("4k3/8/5p2/8/3B4/8/1P6/4K3 w - - 0 1").expect("FEN should parse");
        let mut moves = Vec::new();
        generate_bishop_moves(&game, &mut moves);
        // NE: e5 f6x; NW: c5 b6 a7; SE: e3 f2 g1; SW: c3 (b2 friendly)
        assert_eq!(moves.len(), 9);
        assert_eq!(moves.iter().filter(|mv| mv.is_capture()).count(), 1);
    }
}
