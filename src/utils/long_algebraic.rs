//! Coordinate move notation (`e2e4`, `e7e8q`).
//!
//! Text is resolved against the position's legal move list rather than
//! rebuilt from board inspection, so the returned move always carries the
//! same flags the generator would have produced.

use crate::errors::CoordinateMoveError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::algebraic::algebraic_to_square;

#[inline]
pub fn move_to_coordinate(move_description: MoveDescription) -> String {
    move_description.to_string()
}

/// Find the legal move matching `text` in `game_state`.
pub fn coordinate_to_legal_move(
    text: &str,
    game_state: &GameState,
) -> Result<MoveDescription, CoordinateMoveError> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(CoordinateMoveError::Malformed(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    game_state
        .legal_moves()?
        .into_iter()
        .find(|mv| mv.from == from && mv.to == to && mv.promotion_piece() == promotion)
        .ok_or_else(|| CoordinateMoveError::NotLegal(text.to_owned()))
}

fn char_to_promotion(ch: char) -> Result<PieceKind, CoordinateMoveError> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(CoordinateMoveError::PromotionChar(ch)),
    }
}
