//! Depth-limited negamax move selection for the automated player.
//!
//! The search mutates the caller's board through apply/undo in strict
//! stack discipline: every exit path (normal return, cutoff break, and the
//! immediate-win shortcut) restores the board before returning. Pruning is
//! single-bound: the negated current best is threaded down as the child's
//! cutoff, which prunes less than a two-sided alpha-beta window but visits
//! a superset of its nodes. Two deduplication sets are owned here: a
//! per-search set shared across the whole tree of one `select_move` call,
//! and a cross-call set of recent root choices that discourages repeating
//! them.

use std::collections::HashSet;

use crate::game_state::board::Board;
use crate::game_state::loa_move::Move;
use crate::search::board_scoring::{evaluate, Score, MAX_SCORE, MIN_SCORE};

/// Once the cross-call set outgrows this many remembered choices it is
/// cleared wholesale.
const RECENT_CHOICES_CAP: usize = 16;

/// Search state for one automated player. Nothing persists across
/// `select_move` calls except the cross-call deduplication set.
pub struct MachineSearch {
    max_depth: usize,
    seen_this_search: HashSet<Move>,
    recent_choices: HashSet<Move>,
}

impl MachineSearch {
    pub fn new(max_depth: usize) -> Self {
        MachineSearch {
            max_depth,
            seen_this_search: HashSet::new(),
            recent_choices: HashSet::new(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Pick a move for the side on move, searching `max_depth` plies plus
    /// the leaf lookahead ply. Returns `None` only when the side on move
    /// has no legal move, which cannot happen in legal play before the
    /// game is over. The board is returned exactly as it was passed in.
    pub fn select_move(&mut self, board: &mut Board) -> Option<Move> {
        self.seen_this_search.clear();
        let (_score, chosen) = self.find_best_move(board, self.max_depth, MAX_SCORE);
        if let Some(mv) = chosen {
            if self.recent_choices.len() > RECENT_CHOICES_CAP {
                self.recent_choices.clear();
            }
            self.recent_choices.insert(mv);
        }
        chosen
    }

    /// Negamax with a single cutoff bound. Returns the best score found
    /// and the move achieving it, from the perspective of the side on
    /// move at this node.
    fn find_best_move(
        &mut self,
        board: &mut Board,
        depth: usize,
        cutoff: Score,
    ) -> (Score, Option<Move>) {
        if depth == 0 {
            return self.guess_best_move(board, cutoff);
        }
        let mut best = MIN_SCORE;
        let mut best_move = None;
        let candidates: Vec<Move> = board.legal_moves().collect();
        for mv in candidates {
            if !self.seen_this_search.insert(mv) {
                continue;
            }
            board.apply(mv);
            // Immediate win for the side that just moved: take it without
            // looking at the remaining siblings.
            if board.connected_components(board.turn().opposite()) == 1 {
                board.undo();
                return (MAX_SCORE, Some(mv));
            }
            let (child, _) = self.find_best_move(board, depth - 1, -best);
            let response = -child;
            board.undo();
            // A recently chosen root move is still explored but may not
            // become the answer here.
            if self.recent_choices.contains(&mv) {
                continue;
            }
            if response > best {
                best = response;
                best_move = Some(mv);
                if response >= cutoff {
                    break;
                }
            }
        }
        (best, best_move)
    }

    /// Leaf evaluation with one extra ply of lookahead: apply each legal
    /// move, score the resulting position statically, undo, and keep the
    /// maximum.
    fn guess_best_move(&mut self, board: &mut Board, cutoff: Score) -> (Score, Option<Move>) {
        let mut best = MIN_SCORE;
        let mut best_move = None;
        let candidates: Vec<Move> = board.legal_moves().collect();
        for mv in candidates {
            if !self.seen_this_search.insert(mv) {
                continue;
            }
            board.apply(mv);
            let value = evaluate(board);
            board.undo();
            if value > best {
                best = value;
                best_move = Some(mv);
                if value >= cutoff {
                    break;
                }
            }
        }
        (best, best_move)
    }
}
