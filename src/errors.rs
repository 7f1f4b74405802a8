//! Error types shared across the rule engine.
//!
//! Recoverable failures (malformed text input) and contract violations
//! (moves the generator should never have produced) are kept in separate
//! enums so callers can tell a user error from an engine bug.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Out-of-range square indices and malformed coordinate text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("square index out of bounds: {0} (must be 0-63)")]
    OutOfBounds(u8),
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),
    #[error("bitboard must contain exactly one set bit, got {0}")]
    NotOneHot(u32),
}

/// Reasons a FEN string is rejected. The board under construction is
/// discarded whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have 6 fields, found {0}")]
    FieldCount(usize),
    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not sum to 8 files")]
    RankWidth { rank: usize },
    #[error("invalid empty-square count '{0}'")]
    EmptyRun(char),
    #[error("invalid piece character '{0}' in board layout")]
    PieceChar(char),
    #[error("invalid side-to-move field: {0:?}")]
    SideToMove(String),
    #[error("invalid castling rights character: '{0}'")]
    CastlingChar(char),
    #[error("invalid en-passant square: {0:?}")]
    EnPassant(String),
    #[error("invalid halfmove clock: {0:?}")]
    HalfmoveClock(String),
    #[error("invalid fullmove number: {0:?}")]
    FullmoveNumber(String),
    #[error("{color:?} must have exactly one king, found {count}")]
    KingCount { color: Color, count: u32 },
    #[error("pawn on back rank square {0}")]
    PawnOnBackRank(Square),
    #[error("en-passant target {0} has no double-pushed pawn in front of it")]
    EnPassantWithoutPawn(Square),
    #[error("en-passant target {0} is occupied")]
    EnPassantOccupied(Square),
}

/// A move that contradicts the board it is applied to. These are generator
/// bugs, never user errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveApplyError {
    #[error("no {piece:?} of the side to move on origin square {from}")]
    MissingMover { from: Square, piece: PieceKind },
    #[error("capture declared on square {to} but no enemy piece is there")]
    NothingToCapture { to: Square },
    #[error("en-passant capture declared but no enemy pawn on square {square}")]
    NoEnPassantVictim { square: Square },
    #[error("castling declared but no rook on square {square}")]
    MissingCastlingRook { square: Square },
    #[error("destination square {to} is occupied and the move does not capture there")]
    OccupiedDestination { to: Square },
    #[error(transparent)]
    Square(#[from] SquareError),
}

/// Failures surfaced while producing legal moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveGenerationError {
    #[error("invalid game state: {0}")]
    InvalidState(String),
    #[error("apply_move failed: {0}")]
    Apply(#[from] MoveApplyError),
}

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

/// Coordinate move text that cannot be matched to a legal move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateMoveError {
    #[error("malformed coordinate move: {0:?}")]
    Malformed(String),
    #[error("invalid promotion piece character: '{0}'")]
    PromotionChar(char),
    #[error(transparent)]
    Square(#[from] SquareError),
    #[error("{0} is not a legal move in this position")]
    NotLegal(String),
    #[error(transparent)]
    MoveGeneration(#[from] MoveGenerationError),
}

/// Board invariant violations reported by `GameState::validate`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameStateError {
    #[error("square {0} is set in more than one piece bitboard")]
    OverlappingPieces(Square),
    #[error("cached occupancy does not match the union of piece bitboards")]
    StaleOccupancy,
    #[error("{color:?} must have exactly one king, found {count}")]
    KingCount { color: Color, count: u32 },
    #[error("en-passant square {0} is not on the rank the side to move captures onto")]
    EnPassantRank(Square),
    #[error("en-passant target {0} has no double-pushed pawn in front of it")]
    EnPassantWithoutPawn(Square),
    #[error("en-passant target {0} is occupied")]
    EnPassantOccupied(Square),
}

/// Malformed lines in a perft case file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PerftCaseError {
    #[error("line {line}: malformed depth row {text:?}")]
    DepthRow { line: usize, text: String },
    #[error("line {line}: depth row before any fen")]
    RowWithoutFen { line: usize },
}
