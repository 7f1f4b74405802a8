use crate::errors::MoveGenResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// A legal move together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub move_description: MoveDescription,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

/// Stateless legal move source, shareable across perft worker threads.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
