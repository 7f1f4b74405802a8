//! Core board state representation.
//!
//! `GameState` is the central model for the engine. It stores piece
//! bitboards, occupancy caches, side to move, castling rights, the
//! en-passant target and the move clocks. It is treated as a value: every
//! transition produces a complete, self-consistent successor.

use crate::errors::{FenError, GameStateError, MoveApplyError, MoveGenResult, SquareError};
use crate::game_state::chess_rules::{en_passant_target_rank, en_passant_victim};
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{classify, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, FastLegalMoveGenerator};
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [color][piece_kind]
    pub pieces: [[Bitboard; 6]; 2],

    // Occupancy caches, always the union of `pieces`.
    pub occupancy_by_color: [Bitboard; 2],
    pub occupancy_all: Bitboard,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameState {
    /// Board with no pieces, White to move and no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        let mut game_state = Self::default();

        let white = Color::White.index();
        game_state.pieces[white][PieceKind::Pawn.index()] = 0x0000_0000_0000_FF00;
        game_state.pieces[white][PieceKind::Knight.index()] = 0x0000_0000_0000_0042;
        game_state.pieces[white][PieceKind::Bishop.index()] = 0x0000_0000_0000_0024;
        game_state.pieces[white][PieceKind::Rook.index()] = 0x0000_0000_0000_0081;
        game_state.pieces[white][PieceKind::Queen.index()] = 0x0000_0000_0000_0008;
        game_state.pieces[white][PieceKind::King.index()] = 0x0000_0000_0000_0010;

        let black = Color::Black.index();
        game_state.pieces[black][PieceKind::Pawn.index()] = 0x00FF_0000_0000_0000;
        game_state.pieces[black][PieceKind::Knight.index()] = 0x4200_0000_0000_0000;
        game_state.pieces[black][PieceKind::Bishop.index()] = 0x2400_0000_0000_0000;
        game_state.pieces[black][PieceKind::Rook.index()] = 0x8100_0000_0000_0000;
        game_state.pieces[black][PieceKind::Queen.index()] = 0x0800_0000_0000_0000;
        game_state.pieces[black][PieceKind::King.index()] = 0x1000_0000_0000_0000;

        game_state.castling_rights = CASTLE_ALL;
        game_state.recalc_occupancy();
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Rebuild the occupancy caches from the piece bitboards.
    pub fn recalc_occupancy(&mut self) {
        for color in ALL_COLORS {
            self.occupancy_by_color[color.index()] = self.pieces[color.index()]
                .iter()
                .copied()
                .fold(0u64, |acc, bb| acc | bb);
        }
        self.occupancy_all = self.occupancy_by_color[Color::White.index()]
            | self.occupancy_by_color[Color::Black.index()];
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, piece: PieceKind) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    /// Kind of the `color` piece standing on `square`, if any.
    pub fn piece_on(&self, square: Square, color: Color) -> Result<Option<PieceKind>, SquareError> {
        let mask = checked_square_bit(square)?;
        Ok(self.kind_on_mask(mask, color))
    }

    /// Owner and kind of whatever stands on `square`.
    pub fn piece_at(&self, square: Square) -> Result<Option<(Color, PieceKind)>, SquareError> {
        let mask = checked_square_bit(square)?;
        Ok(self.occupant(mask))
    }

    /// Owner and kind of the piece on a one-hot `mask`.
    #[inline]
    pub(crate) fn occupant(&self, mask: Bitboard) -> Option<(Color, PieceKind)> {
        ALL_COLORS
            .into_iter()
            .find_map(|color| self.kind_on_mask(mask, color).map(|piece| (color, piece)))
    }

    #[inline]
    fn kind_on_mask(&self, mask: Bitboard, color: Color) -> Option<PieceKind> {
        ALL_PIECE_KINDS
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()] & mask != 0)
    }

    /// En-passant target as a zero-or-one-bit bitboard.
    #[inline]
    pub fn en_passant_bitboard(&self) -> Bitboard {
        self.en_passant_square.map_or(0, square_bit)
    }

    #[inline]
    pub fn has_castling_right(&self, right: CastlingRights) -> bool {
        self.castling_rights & right != 0
    }

    /// Check the structural invariants of the board.
    pub fn validate(&self) -> Result<(), GameStateError> {
        let mut seen = 0u64;
        for color in ALL_COLORS {
            for piece in ALL_PIECE_KINDS {
                let bb = self.pieces_of(color, piece);
                let overlap = seen & bb;
                if overlap != 0 {
                    return Err(GameStateError::OverlappingPieces(lowest_square(overlap)));
                }
                seen |= bb;
            }
        }

        let mut expected = self.clone();
        expected.recalc_occupancy();
        if expected.occupancy_by_color != self.occupancy_by_color
            || expected.occupancy_all != self.occupancy_all
        {
            return Err(GameStateError::StaleOccupancy);
        }

        for color in ALL_COLORS {
            let count = self.pieces_of(color, PieceKind::King).count_ones();
            if count != 1 {
                return Err(GameStateError::KingCount { color, count });
            }
        }

        if let Some(square) = self.en_passant_square {
            let side = self.side_to_move;
            if square_bit(square) & en_passant_target_rank(side) == 0 {
                return Err(GameStateError::EnPassantRank(square));
            }
            let victim = square_bit(en_passant_victim(side, square));
            if self.pieces_of(side.opposite(), PieceKind::Pawn) & victim == 0 {
                return Err(GameStateError::EnPassantWithoutPawn(square));
            }
            if self.occupancy_all & square_bit(square) != 0 {
                return Err(GameStateError::EnPassantOccupied(square));
            }
        }

        Ok(())
    }

    /// Replace `self` with the position after `mv`. On error `self` is left
    /// untouched.
    pub fn make_move(&mut self, mv: MoveDescription) -> Result<(), MoveApplyError> {
        *self = apply_move(self, mv)?;
        Ok(())
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> MoveGenResult<Vec<MoveDescription>> {
        Ok(FastLegalMoveGenerator
            .generate_legal_moves(self)?
            .into_iter()
            .map(|generated| generated.move_description)
            .collect())
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Playing, checkmate or stalemate for the side to move.
    pub fn status(&self) -> MoveGenResult<GameStatus> {
        let in_check = self.is_in_check(self.side_to_move);
        let any_legal = has_legal_move(self)?;
        Ok(classify(in_check, usize::from(any_legal)))
    }
}
