/// Outcome class of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Checkmate,
    Stalemate,
}

/// No legal moves is checkmate when in check and stalemate otherwise.
#[inline]
pub const fn classify(in_check: bool, legal_move_count: usize) -> GameStatus {
    match (legal_move_count, in_check) {
        (0, true) => GameStatus::Checkmate,
        (0, false) => GameStatus::Stalemate,
        _ => GameStatus::Playing,
    }
}
