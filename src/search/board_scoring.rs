//! Scoring utilities for the LOA engine.
//!
//! Scores are signed integers from the perspective of the side that just
//! moved in negamax search. The sentinels are clamped well inside the
//! `i32` range so they can be negated at every recursion level without
//! overflow.

use crate::game_state::board::{Board, BOARD_SIZE};
use crate::game_state::piece::Piece;

/// Numeric representation of an evaluation score.
pub type Score = i32;

/// Sentinel for a decisive loss; dominates every heuristic value.
pub const MIN_SCORE: Score = -1_000_000;
/// Sentinel for a decisive win; dominates every heuristic value.
pub const MAX_SCORE: Score = 1_000_000;

/// Coarse static evaluation: the largest connected-component count
/// observed over the owners of all occupied squares. If the side on move
/// is already fully contiguous the position is a completed win by the
/// opponent, reported as `MIN_SCORE`.
///
/// Connectivity is the only scoring signal below the search horizon; there
/// is no material or mobility term.
pub fn evaluate(board: &Board) -> Score {
    if board.connected_components(board.turn()) == 1 {
        return MIN_SCORE;
    }
    let mut best = 0;
    for r in 1..=BOARD_SIZE {
        for c in 1..=BOARD_SIZE {
            let side = board.get(c, r);
            if side != Piece::Empty {
                let groups = board.connected_components(side) as Score;
                if groups > best {
                    best = groups;
                }
            }
        }
    }
    best
}
