use crate::errors::MoveApplyError;
use crate::game_state::chess_rules::{castling_geometry, en_passant_victim, rights_of, CastleSide};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{MoveDescription, FLAG_CASTLE_KINGSIDE, FLAG_CASTLE_QUEENSIDE};

/// Successor position after `mv`.
///
/// The move must have come from this position's generator. A move that
/// contradicts the board (no mover on the origin, an occupied destination it
/// does not capture on, a declared capture with no victim, a castle without
/// its rook) trips a debug assertion and is
/// reported as an error in release builds; `game_state` is never modified.
pub fn apply_move(game_state: &GameState, mv: MoveDescription) -> Result<GameState, MoveApplyError> {
    let from_mask = checked_square_bit(mv.from)?;
    let to_mask = checked_square_bit(mv.to)?;

    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();

    if game_state.pieces_of(moving_color, mv.piece) & from_mask == 0 {
        return Err(contract_violation(MoveApplyError::MissingMover {
            from: mv.from,
            piece: mv.piece,
        }));
    }

    // Only a regular capture may land on an occupied square, and only on an
    // enemy piece.
    let own_occ = game_state.occupancy_by_color[moving_color.index()];
    let blocked = if mv.is_capture() && !mv.is_en_passant() {
        own_occ
    } else {
        game_state.occupancy_all
    };
    if blocked & to_mask != 0 {
        return Err(contract_violation(MoveApplyError::OccupiedDestination { to: mv.to }));
    }

    let mut next = game_state.clone();

    next.pieces[moving_color.index()][mv.piece.index()] &= !from_mask;

    if mv.is_en_passant() {
        let victim = en_passant_victim(moving_color, mv.to);
        let victim_mask = checked_square_bit(victim)?;
        if next.pieces_of(enemy_color, PieceKind::Pawn) & victim_mask == 0 {
            return Err(contract_violation(MoveApplyError::NoEnPassantVictim {
                square: victim,
            }));
        }
        next.pieces[enemy_color.index()][PieceKind::Pawn.index()] &= !victim_mask;
    } else if mv.is_capture() {
        if game_state.occupancy_by_color[enemy_color.index()] & to_mask == 0 {
            return Err(contract_violation(MoveApplyError::NothingToCapture { to: mv.to }));
        }
        for piece in ALL_PIECE_KINDS {
            next.pieces[enemy_color.index()][piece.index()] &= !to_mask;
        }
    }

    let placed = mv.promotion_piece().unwrap_or(mv.piece);
    next.pieces[moving_color.index()][placed.index()] |= to_mask;

    if let Some(side) = castle_side(mv) {
        let geometry = castling_geometry(moving_color, side);
        if game_state.occupancy_all & geometry.must_be_empty != 0 {
            return Err(contract_violation(MoveApplyError::OccupiedDestination {
                to: geometry.rook_to,
            }));
        }
        let rook_from = square_bit(geometry.rook_from);
        if next.pieces_of(moving_color, PieceKind::Rook) & rook_from == 0 {
            return Err(contract_violation(MoveApplyError::MissingCastlingRook {
                square: geometry.rook_from,
            }));
        }
        next.pieces[moving_color.index()][PieceKind::Rook.index()] &= !rook_from;
        next.pieces[moving_color.index()][PieceKind::Rook.index()] |= square_bit(geometry.rook_to);
        next.castling_rights &= !rights_of(moving_color);
    }

    update_castling_rights(&mut next, moving_color, mv);

    // the skipped square sits behind the pushed pawn from the mover's side
    next.en_passant_square = if mv.is_double_push() {
        Some(en_passant_victim(moving_color, mv.to))
    } else {
        None
    };

    if mv.piece == PieceKind::Pawn || mv.is_capture() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    next.side_to_move = enemy_color;
    next.recalc_occupancy();

    Ok(next)
}

#[inline]
fn castle_side(mv: MoveDescription) -> Option<CastleSide> {
    if mv.has(FLAG_CASTLE_KINGSIDE) {
        Some(CastleSide::KingSide)
    } else if mv.has(FLAG_CASTLE_QUEENSIDE) {
        Some(CastleSide::QueenSide)
    } else {
        None
    }
}

#[inline]
fn contract_violation(error: MoveApplyError) -> MoveApplyError {
    debug_assert!(false, "move contradicts the board: {error}");
    error
}

/// King moves drop both rights; leaving a rook home square drops that
/// wing's right. Captures landing on a rook home square leave the victim's
/// rights alone, castling eligibility re-checks the rook itself.
fn update_castling_rights(game_state: &mut GameState, moving_color: Color, mv: MoveDescription) {
    if mv.piece == PieceKind::King {
        game_state.castling_rights &= !rights_of(moving_color);
    }

    for side in [CastleSide::KingSide, CastleSide::QueenSide] {
        let geometry = castling_geometry(moving_color, side);
        if mv.from == geometry.rook_from {
            game_state.castling_rights &= !geometry.right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::move_descriptions::{
        FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_NONE, FLAG_PROMOTE_KNIGHT,
    };
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn state(fen: &str) -> GameState {
        GameState::from_fen(fen).expect("FEN should parse")
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let game = GameState::new_game();
        let mv = MoveDescription::new(sq("e2"), sq("e4"), PieceKind::Pawn, FLAG_DOUBLE_PAWN_PUSH);
        let next = apply_move(&game, mv).expect("double push should apply");

        assert_eq!(next.en_passant_square, Some(sq("e3")));
        assert_eq!(next.side_to_move, Color::Black);
        assert_eq!(next.halfmove_clock, 0);
        assert_eq!(next.fullmove_number, 1);
        assert!(next.validate().is_ok());
        // input snapshot untouched
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn quiet_move_clears_en_passant_and_ticks_clocks() {
        let game = state("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 3 2");
        let mv = MoveDescription::new(sq("g8"), sq("f6"), PieceKind::Knight, FLAG_NONE);
        let next = apply_move(&game, mv).expect("knight move should apply");

        assert_eq!(next.en_passant_square, None);
        assert_eq!(next.halfmove_clock, 4);
        assert_eq!(next.fullmove_number, 3);
    }

    #[test]
    fn en_passant_removes_adjacent_pawn() {
        let game = state("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2");
        let mv = MoveDescription::new(
            sq("e5"),
            sq("d6"),
            PieceKind::Pawn,
            FLAG_CAPTURE | FLAG_EN_PASSANT,
        );
        let next = apply_move(&game, mv).expect("en passant should apply");

        assert_eq!(next.pieces_of(Color::Black, PieceKind::Pawn), 0);
        assert_eq!(next.piece_at(sq("d6")), Ok(Some((Color::White, PieceKind::Pawn))));
        assert_eq!(next.occupancy_all.count_ones(), 3);
    }

    #[test]
    fn capture_promotion_replaces_victim_with_new_piece() {
        let game = state("4kr2/4P3/8/8/8/8/8/4K3 w - - 0 1");
        let mv = MoveDescription::new(
            sq("e7"),
            sq("f8"),
            PieceKind::Pawn,
            FLAG_CAPTURE | FLAG_PROMOTE_KNIGHT,
        );
        let next = apply_move(&game, mv).expect("promotion should apply");

        assert_eq!(next.piece_at(sq("f8")), Ok(Some((Color::White, PieceKind::Knight))));
        assert_eq!(next.pieces_of(Color::White, PieceKind::Pawn), 0);
        assert_eq!(next.pieces_of(Color::Black, PieceKind::Rook), 0);
        assert!(next.validate().is_ok());
    }

    #[test]
    fn castling_moves_rook_and_drops_both_rights() {
        let game = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = MoveDescription::new(sq("e1"), sq("g1"), PieceKind::King, FLAG_CASTLE_KINGSIDE);
        let next = apply_move(&game, mv).expect("castle should apply");

        assert_eq!(next.piece_at(sq("f1")), Ok(Some((Color::White, PieceKind::Rook))));
        assert_eq!(next.piece_at(sq("h1")), Ok(None));
        assert_eq!(next.castling_rights, CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);

        let black = apply_move(
            &next,
            MoveDescription::new(sq("e8"), sq("c8"), PieceKind::King, FLAG_CASTLE_QUEENSIDE),
        )
        .expect("black castle should apply");
        assert_eq!(black.piece_at(sq("d8")), Ok(Some((Color::Black, PieceKind::Rook))));
        assert_eq!(black.castling_rights, 0);
    }

    #[test]
    fn rook_leaving_home_drops_one_right() {
        let game = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = MoveDescription::new(sq("a1"), sq("a5"), PieceKind::Rook, FLAG_NONE);
        let next = apply_move(&game, mv).expect("rook move should apply");
        assert_eq!(next.castling_rights, CASTLE_ALL & !CASTLE_WHITE_QUEENSIDE);
    }

    #[test]
    fn capturing_a_home_rook_keeps_its_rights() {
        let game = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = MoveDescription::new(sq("h1"), sq("h8"), PieceKind::Rook, FLAG_CAPTURE);
        let next = apply_move(&game, mv).expect("rook capture should apply");
        assert_eq!(next.castling_rights, CASTLE_ALL & !CASTLE_WHITE_KINGSIDE);
        assert_eq!(next.piece_at(sq("h8")), Ok(Some((Color::White, PieceKind::Rook))));
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn missing_mover_panics_in_debug_builds() {
        let game = GameState::new_game();
        let mv = MoveDescription::new(sq("e4"), sq("e5"), PieceKind::Pawn, FLAG_NONE);
        let _ = apply_move(&game, mv);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn quiet_move_onto_a_piece_panics_in_debug_builds() {
        let game = GameState::new_game();
        let mv = MoveDescription::new(sq("g1"), sq("e2"), PieceKind::Knight, FLAG_NONE);
        let _ = apply_move(&game, mv);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn contract_violations_are_errors_in_release_builds() {
        let game = GameState::new_game();
        let missing = MoveDescription::new(sq("e4"), sq("e5"), PieceKind::Pawn, FLAG_NONE);
        assert_eq!(
            apply_move(&game, missing),
            Err(MoveApplyError::MissingMover { from: sq("e4"), piece: PieceKind::Pawn })
        );

        let empty_capture = MoveDescription::new(sq("g1"), sq("f3"), PieceKind::Knight, FLAG_CAPTURE);
        assert_eq!(
            apply_move(&game, empty_capture),
            Err(MoveApplyError::NothingToCapture { to: sq("f3") })
        );
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn occupied_destination_is_an_error_in_release_builds() {
        let game = GameState::new_game();
        let cases = [
            // own pawn on e2
            MoveDescription::new(sq("g1"), sq("e2"), PieceKind::Knight, FLAG_NONE),
            MoveDescription::new(sq("g1"), sq("e2"), PieceKind::Knight, FLAG_CAPTURE),
            // enemy pawn on e7 without a capture flag
            MoveDescription::new(sq("e2"), sq("e7"), PieceKind::Pawn, FLAG_NONE),
        ];
        for mv in cases {
            assert_eq!(
                apply_move(&game, mv),
                Err(MoveApplyError::OccupiedDestination { to: mv.to }),
                "{mv}"
            );
        }

        // f1 bishop sits on the rook's landing square
        let blocked_castle = state("4k3/8/8/8/8/8/8/4KB1R w K - 0 1");
        let mv = MoveDescription::new(sq("e1"), sq("g1"), PieceKind::King, FLAG_CASTLE_KINGSIDE);
        assert_eq!(
            apply_move(&blocked_castle, mv),
            Err(MoveApplyError::OccupiedDestination { to: sq("f1") })
        );

        let en_passant_onto_piece = state("4k3/8/4n3/3Pp3/8/8/8/4K3 w - - 0 1");
        let mv = MoveDescription::new(sq("d5"), sq("e6"), PieceKind::Pawn, FLAG_CAPTURE | FLAG_EN_PASSANT);
        assert_eq!(
            apply_move(&en_passant_onto_piece, mv),
            Err(MoveApplyError::OccupiedDestination { to: sq("e6") })
        );
    }

    #[test]
    fn generated_moves_never_overlap_pieces() {
        let game = state("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        for mv in crate::move_generation::legal_move_generator::generate_pseudo_legal_moves(&game) {
            let next = apply_move(&game, mv).expect("generated move should apply");
            assert!(next.validate().is_ok(), "{mv}");
        }
    }

    #[test]
    fn out_of_range_square_is_rejected_before_shifting() {
        let game = GameState::new_game();
        let mv = MoveDescription::new(64, 0, PieceKind::Pawn, FLAG_NONE);
        assert!(matches!(apply_move(&game, mv), Err(MoveApplyError::Square(_))));
    }
}
