//! FEN-to-GameState parser.
//!
//! Builds a fully-populated board from a Forsyth-Edwards Notation string,
//! including piece bitboards, rights, clocks, and occupancies. Parsing always
//! works on a fresh board, so a rejected string leaves nothing behind.

use tracing::warn;

use crate::errors::FenError;
use crate::game_state::chess_rules::{en_passant_target_rank, en_passant_victim, promotion_rank};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, FenError> {
    parse_fen_fields(fen).inspect_err(|error| warn!(%error, fen, "rejected FEN"))
}

fn parse_fen_fields(fen: &str) -> Result<GameState, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let [board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        parts[..]
    else {
        return Err(FenError::FieldCount(parts.len()));
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square =
        parse_en_passant_square(en_passant_part, game_state.side_to_move)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| FenError::HalfmoveClock(halfmove_part.to_owned()))?;
    game_state.fullmove_number = match fullmove_part.parse::<u16>() {
        Ok(number) if number >= 1 => number,
        _ => return Err(FenError::FullmoveNumber(fullmove_part.to_owned())),
    };

    game_state.recalc_occupancy();
    check_material(&game_state)?;
    check_en_passant(&game_state)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::EmptyRun(ch));
                }
                file += empty_count as usize;
                continue;
            }

            let (color, piece) = piece_from_fen_char(ch).ok_or(FenError::PieceChar(ch))?;

            if file >= 8 {
                return Err(FenError::RankWidth { rank: board_rank + 1 });
            }

            let sq = board_rank * 8 + file;
            game_state.pieces[color.index()][piece.index()] |= 1u64 << sq;
            file += 1;
        }

        if file != 8 {
            return Err(FenError::RankWidth { rank: board_rank + 1 });
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenError::CastlingChar(ch)),
        }
    }

    Ok(rights)
}

/// The target sits behind a pawn that just double-pushed, so it is on rank 6
/// when White is to move and on rank 3 when Black is.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| FenError::EnPassant(en_passant_part.to_owned()))?;
    if square_bit(square) & en_passant_target_rank(side_to_move) == 0 {
        return Err(FenError::EnPassant(en_passant_part.to_owned()));
    }

    Ok(Some(square))
}

fn check_material(game_state: &GameState) -> Result<(), FenError> {
    for color in ALL_COLORS {
        let count = game_state.pieces_of(color, PieceKind::King).count_ones();
        if count != 1 {
            return Err(FenError::KingCount { color, count });
        }
    }

    let back_ranks = promotion_rank(Color::White) | promotion_rank(Color::Black);
    let pawns = (game_state.pieces_of(Color::White, PieceKind::Pawn)
        | game_state.pieces_of(Color::Black, PieceKind::Pawn))
        & back_ranks;
    if pawns != 0 {
        return Err(FenError::PawnOnBackRank(lowest_square(pawns)));
    }

    Ok(())
}

/// A target is only meaningful right after a double push: the pushed enemy
/// pawn stands in front of it and the square it skipped is empty.
fn check_en_passant(game_state: &GameState) -> Result<(), FenError> {
    let Some(target) = game_state.en_passant_square else {
        return Ok(());
    };

    let side = game_state.side_to_move;
    let victim = square_bit(en_passant_victim(side, target));
    if game_state.pieces_of(side.opposite(), PieceKind::Pawn) & victim == 0 {
        return Err(FenError::EnPassantWithoutPawn(target));
    }
    if game_state.occupancy_all & square_bit(target) != 0 {
        return Err(FenError::EnPassantOccupied(target));
    }

    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}
