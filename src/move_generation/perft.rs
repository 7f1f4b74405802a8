//! Perft: exhaustive legal-move tree counting.
//!
//! Counts are taken at the leaf ply only. Each leaf contributes one node plus
//! whatever its flags say (capture, en passant, castle, promotion). Check and
//! checkmate are read off the position the leaf move produces, so the totals
//! do not depend on which generator walked the tree.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use tracing::{debug, trace};

use crate::errors::{MoveGenResult, MoveGenerationError};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, FastLegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Perft over the engine's own legal moves.
pub fn perft_legal(game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&FastLegalMoveGenerator, game_state, depth)
}

/// Leaf statistics `depth` plies below `game_state`. Depth 0 counts nothing.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    debug!(depth, fen = %game_state.get_fen(), "perft start");

    let mut total = PerftCounts::default();
    if depth > 0 {
        for mv in generator.generate_legal_moves(game_state)? {
            perft_recurse(generator, &mv, depth, 1, &mut total)?;
        }
    }

    debug!(depth, nodes = total.nodes, "perft done");
    Ok(total)
}

/// Leaf node count below each root move, keyed by coordinate notation.
pub fn perft_divide<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<BTreeMap<String, u64>> {
    let mut divide = BTreeMap::new();
    if depth == 0 {
        return Ok(divide);
    }

    for mv in generator.generate_legal_moves(game_state)? {
        let mut local = PerftCounts::default();
        perft_recurse(generator, &mv, depth, 1, &mut local)?;
        let key = mv.move_description.to_string();
        trace!(root = %key, nodes = local.nodes, "perft divide");
        divide.insert(key, local.nodes);
    }

    Ok(divide)
}

/// Same counts as [`perft`], with one worker thread per root move.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    debug!(depth, threaded = true, "perft start");
    if depth == 0 {
        return Ok(PerftCounts::default());
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| MoveGenerationError::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    debug!(depth, nodes = total.nodes, "perft done");
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    if current_depth == search_depth {
        let description = mv.move_description;
        counts.nodes += 1;
        counts.captures += u64::from(description.is_capture());
        counts.en_passant += u64::from(description.is_en_passant());
        counts.castles += u64::from(description.is_castle());
        counts.promotions += u64::from(description.is_promotion());

        let after = &mv.game_after_move;
        if is_king_in_check(after, after.side_to_move) {
            counts.checks += 1;
            counts.checkmates += u64::from(!has_legal_move(after)?);
        }
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.game_after_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}
