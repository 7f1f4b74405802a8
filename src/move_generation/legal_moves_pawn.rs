use crate::game_state::chess_rules::{pawn_start_rank, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::{
    MoveDescription, MoveFlags, FLAG_CAPTURE, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT, FLAG_NONE,
    PROMOTION_FLAGS,
};
use crate::moves::pawn_moves::{pawn_attacks, pawn_pushes};

pub fn generate_pawn_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];
    let empty = !game_state.occupancy_all;
    let ep_target = game_state.en_passant_bitboard();
    let last_rank = promotion_rank(side);

    let mut pawns = game_state.pieces_of(side, PieceKind::Pawn);
    while pawns != 0 {
        let from = lowest_square(pawns);
        let from_mask = square_bit(from);

        let one_step = pawn_pushes(side, from_mask) & empty;
        if one_step != 0 {
            push_pawn_move(from, lowest_square(one_step), FLAG_NONE, last_rank, out);

            if from_mask & pawn_start_rank(side) != 0 {
                let two_step = pawn_pushes(side, one_step) & empty;
                if two_step != 0 {
                    out.push(MoveDescription::new(
                        from,
                        lowest_square(two_step),
                        PieceKind::Pawn,
                        FLAG_DOUBLE_PAWN_PUSH,
                    ));
                }
            }
        }

        let attacks = pawn_attacks(side, from_mask);

        let mut captures = attacks & enemy_occ;
        while captures != 0 {
            push_pawn_move(from, lowest_square(captures), FLAG_CAPTURE, last_rank, out);
            captures &= captures - 1;
        }

        if attacks & ep_target != 0 {
            out.push(MoveDescription::new(
                from,
                lowest_square(ep_target),
                PieceKind::Pawn,
                FLAG_CAPTURE | FLAG_EN_PASSANT,
            ));
        }

        pawns &= pawns - 1;
    }
}

/// A move onto the last rank fans out into the four promotions.
#[inline]
fn push_pawn_move(
    from: Square,
    to: Square,
    flags: MoveFlags,
    last_rank: Bitboard,
    out: &mut Vec<MoveDescription>,
) {
    if square_bit(to) & last_rank != 0 {
        for promo in PROMOTION_FLAGS {
            out.push(MoveDescription::new(from, to, PieceKind::Pawn, flags | promo));
        }
    } else {
        out.push(MoveDescription::new(from, to, PieceKind::Pawn, flags));
    }
}
