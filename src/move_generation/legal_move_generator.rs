//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies candidate moves,
//! filters illegal self-check outcomes, and annotates checking move metadata.

use crate::errors::MoveGenResult;
use crate::game_state::chess_types::{PieceKind, ALL_PIECE_KINDS};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};
use crate::moves::move_descriptions::MoveDescription;

/// Legal moves annotated with check and checkmate.
pub struct LegalMoveGenerator;

/// Legal moves without annotations.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(game_state, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(game_state, false)
    }
}

/// Pseudo-legal moves of one piece kind for the side to move.
#[inline]
pub fn generate_piece_moves(game_state: &GameState, piece: PieceKind, out: &mut Vec<MoveDescription>) {
    match piece {
        PieceKind::Pawn => generate_pawn_moves(game_state, out),
        PieceKind::Knight => generate_knight_moves(game_state, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, out),
        PieceKind::Rook => generate_rook_moves(game_state, out),
        PieceKind::Queen => generate_queen_moves(game_state, out),
        PieceKind::King => generate_king_moves(game_state, out),
    }
}

/// Every pseudo-legal move: obeys piece movement but may leave the own king
/// in check.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<MoveDescription> {
    let mut pseudo = Vec::<MoveDescription>::with_capacity(128);
    for piece in ALL_PIECE_KINDS {
        generate_piece_moves(game_state, piece, &mut pseudo);
    }
    pseudo
}

/// Whether the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(game_state: &GameState) -> MoveGenResult<bool> {
    let mover = game_state.side_to_move;
    let mut pseudo = Vec::<MoveDescription>::with_capacity(64);

    for piece in ALL_PIECE_KINDS {
        pseudo.clear();
        generate_piece_moves(game_state, piece, &mut pseudo);
        for mv in &pseudo {
            let next = apply_move(game_state, *mv)?;
            if !is_king_in_check(&next, mover) {
                return Ok(true);
            }
        }
    }

    Ok(false)
}

fn generate_legal_moves_internal(
    game_state: &GameState,
    annotate: bool,
) -> MoveGenResult<Vec<GeneratedMove>> {
    let mover = game_state.side_to_move;
    let pseudo = generate_pseudo_legal_moves(game_state);

    let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
    for mv in pseudo {
        let next = apply_move(game_state, mv)?;

        // Illegal if own king is in check after move.
        if is_king_in_check(&next, mover) {
            continue;
        }

        let annotations = if annotate {
            classify_move_annotations(&next)?
        } else {
            MoveAnnotations::default()
        };

        legal.push(GeneratedMove {
            move_description: mv,
            game_after_move: next,
            annotations,
        });
    }

    Ok(legal)
}

fn classify_move_annotations(next: &GameState) -> MoveGenResult<MoveAnnotations> {
    if !is_king_in_check(next, next.side_to_move) {
        return Ok(MoveAnnotations::default());
    }

    Ok(MoveAnnotations {
        gives_check: true,
        is_checkmate: !has_legal_move(next)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_generator_matches_legal_move_count_on_startpos() {
        let game = GameState::new_game();
        let annotated = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("annotated move generation should succeed");
        let fast = FastLegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("fast move generation should succeed");
        assert_eq!(annotated.len(), fast.len());
        assert_eq!(fast.len(), 20);
        assert_eq!(generate_pseudo_legal_moves(&game).len(), 20);
    }

    #[test]
    fn pinned_piece_moves_are_filtered() {
        // e2 knight is pinned by the e8 rook
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let legal = FastLegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        assert!(legal.iter().all(|generated| generated.move_description.piece == PieceKind::King));
        assert!(generate_pseudo_legal_moves(&game).len() > legal.len());
    }

    #[test]
    fn annotations_flag_check_and_mate() {
        // back-rank mate available with Ra8
        let game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let legal = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("annotated move generation should succeed");

        let mate: Vec<_> = legal.iter().filter(|generated| generated.annotations.is_checkmate).collect();
        assert_eq!(mate.len(), 1);
        assert_eq!(mate[0].move_description.to, 56);
        assert!(mate[0].annotations.gives_check);
        assert!(legal
            .iter()
            .filter(|generated| !generated.annotations.gives_check)
            .all(|generated| !generated.annotations.is_checkmate));
    }

    #[test]
    fn has_legal_move_agrees_with_full_generation() {
        let stalemate = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert_eq!(has_legal_move(&stalemate), Ok(false));

        let game = GameState::new_game();
        assert_eq!(has_legal_move(&game), Ok(true));
    }
}
