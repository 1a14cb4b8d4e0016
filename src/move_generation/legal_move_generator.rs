//! Lazy enumeration of legal moves.
//!
//! Squares are scanned row 1 to 8, column 1 to 8 within each row, and for
//! each piece of the side on move the eight directions are tried in
//! successor order. The line-of-action rule fixes the travel distance, so
//! each (square, direction) pair yields at most one candidate move.

use crate::game_state::board::{Board, BOARD_SIZE};
use crate::game_state::direction::DIRECTIONS;
use crate::game_state::loa_move::Move;
use crate::move_generation::legal_move_checks::ray_count;

/// Iterator over the legal moves for the side on move. Restartable:
/// `Board::legal_moves` hands out a fresh one each call.
pub struct LegalMoves<'a> {
    board: &'a Board,
    c: i8,
    r: i8,
    dir: usize,
}

impl<'a> LegalMoves<'a> {
    pub fn new(board: &'a Board) -> Self {
        LegalMoves {
            board,
            c: 1,
            r: 1,
            dir: 0,
        }
    }
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while self.r <= BOARD_SIZE {
            if self.board.get(self.c, self.r) == self.board.turn() {
                while self.dir < DIRECTIONS.len() {
                    let dir = DIRECTIONS[self.dir];
                    self.dir += 1;
                    // The full-line piece count determines the one
                    // destination this direction can produce.
                    let dist = 1
                        + ray_count(self.board, self.c, self.r, dir)
                        + ray_count(self.board, self.c, self.r, dir.opposite());
                    let candidate = Move::create(
                        self.c,
                        self.r,
                        self.c + dist * dir.dc(),
                        self.r + dist * dir.dr(),
                        self.board,
                    );
                    if let Some(mv) = candidate {
                        if self.board.is_legal(&mv) {
                            return Some(mv);
                        }
                    }
                }
                self.dir = 0;
            }
            self.c += 1;
            if self.c > BOARD_SIZE {
                self.c = 1;
                self.r += 1;
            }
        }
        None
    }
}
