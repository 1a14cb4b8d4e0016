//! The geometric half of move legality.
//!
//! The line-of-action rule: a piece travels exactly as many squares as
//! there are pieces (of either color) anywhere on the full line through
//! its origin. Blocking: an opposing piece anywhere on the scanned span
//! from the origin up to (but excluding) the destination blocks the move,
//! and so does a friendly piece on the destination itself.

use crate::game_state::board::Board;
use crate::game_state::direction::Direction;
use crate::game_state::loa_move::Move;
use crate::game_state::piece::Piece;

/// Number of occupied squares strictly beyond (c, r) along `dir`, out to
/// the board edge.
pub fn ray_count(board: &Board, c: i8, r: i8, dir: Direction) -> i8 {
    let mut count = 0;
    let mut c = c + dir.dc();
    let mut r = r + dir.dr();
    while Board::in_bounds(c) && Board::in_bounds(r) {
        if board.get(c, r) != Piece::Empty {
            count += 1;
        }
        c += dir.dc();
        r += dir.dr();
    }
    count
}

/// The direction from the move's origin toward its destination, or `None`
/// for a degenerate move whose endpoints coincide.
pub fn line_direction(mv: &Move) -> Option<Direction> {
    let dc = (mv.col1 - mv.col0).signum();
    let dr = (mv.row1 - mv.row0).signum();
    match (dc, dr) {
        (0, 1) => Some(Direction::N),
        (0, -1) => Some(Direction::S),
        (1, 0) => Some(Direction::E),
        (-1, 0) => Some(Direction::W),
        (1, 1) => Some(Direction::NE),
        (-1, 1) => Some(Direction::NW),
        (1, -1) => Some(Direction::SE),
        (-1, -1) => Some(Direction::SW),
        _ => None,
    }
}

/// Number of pieces on the entire line of action indicated by `mv`: both
/// rays from the origin, with the origin itself counted once.
pub fn piece_count_along(board: &Board, mv: &Move) -> i8 {
    let dir = match line_direction(mv) {
        Some(dir) => dir,
        // Degenerate move; only the origin square is on its "line".
        None => return 1,
    };
    1 + ray_count(board, mv.col0, mv.row0, dir)
        + ray_count(board, mv.col0, mv.row0, dir.opposite())
}

/// True iff `mv` is blocked for the side on move: the destination holds a
/// friendly piece, or an opposing piece sits on the span scanned from the
/// origin (inclusive) toward the destination (exclusive).
pub fn blocked(board: &Board, mv: &Move) -> bool {
    let mover = board.turn();
    if board.get(mv.col1, mv.row1) == mover {
        return true;
    }
    let dir = match line_direction(mv) {
        Some(dir) => dir,
        None => return false,
    };
    let mut c = mv.col0;
    let mut r = mv.row0;
    for _ in 0..mv.length() {
        if !Board::in_bounds(c) || !Board::in_bounds(r) {
            break;
        }
        if board.get(c, r) == mover.opposite() {
            return true;
        }
        c += dir.dc();
        r += dir.dr();
    }
    false
}
