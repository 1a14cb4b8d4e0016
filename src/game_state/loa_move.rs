//! Immutable move values.
//!
//! A `Move` captures both endpoints and the pieces sitting on them at
//! construction time, which is exactly the information needed to apply the
//! move and to undo it again. Equality and hashing cover the four
//! coordinates only, so moves deduplicate across positions where the
//! occupancy differs.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;

/// A straight-line relocation from (col0, row0) to (col1, row1), with the
/// piece that moves and the piece (possibly `Empty`) it lands on.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub col0: i8,
    pub row0: i8,
    pub col1: i8,
    pub row1: i8,
    pub moved: Piece,
    pub captured: Piece,
}

impl Move {
    /// Build a move from two squares on `board`, reading the moved and
    /// captured pieces from the current position. Returns `None` if either
    /// square is off the board or the squares do not share a row, column,
    /// or diagonal.
    pub fn create(col0: i8, row0: i8, col1: i8, row1: i8, board: &Board) -> Option<Move> {
        if !Board::in_bounds(col0)
            || !Board::in_bounds(row0)
            || !Board::in_bounds(col1)
            || !Board::in_bounds(row1)
        {
            return None;
        }
        let aligned = col0 == col1
            || row0 == row1
            || col0 + row0 == col1 + row1
            || col0 - row0 == col1 - row1;
        if !aligned {
            return None;
        }
        Some(Move {
            col0,
            row0,
            col1,
            row1,
            moved: board.get(col0, row0),
            captured: board.get(col1, row1),
        })
    }

    /// Travel distance of the move: the Chebyshev distance between the
    /// endpoints, which equals the step count along any of the four line
    /// families.
    pub fn length(&self) -> i8 {
        let dc = (self.col1 - self.col0).abs();
        let dr = (self.row1 - self.row0).abs();
        dc.max(dr)
    }
}

// Two moves are the same move iff their endpoints match; the pieces seen at
// construction time do not participate.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.col0 == other.col0
            && self.row0 == other.row0
            && self.col1 == other.col1
            && self.row1 == other.row1
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.col0, self.row0, self.col1, self.row1).hash(state);
    }
}

impl fmt::Display for Move {
    /// Standard printed notation, e.g. `c2-c4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{}{}",
            char::from(b'a' + (self.col0 - 1) as u8),
            self.row0,
            char::from(b'a' + (self.col1 - 1) as u8),
            self.row1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::game_state::board::Board;
    use crate::game_state::piece::Piece;

    #[test]
    fn create_rejects_off_board_squares() {
        let board = Board::new();
        assert!(Move::create(100, 10, 10, 10, &board).is_none());
        assert!(Move::create(0, 1, 1, 1, &board).is_none());
        assert!(Move::create(1, 1, 1, 9, &board).is_none());
    }

    #[test]
    fn create_rejects_non_collinear_endpoints() {
        let board = Board::new();
        // A knight-shaped displacement shares no line family.
        assert!(Move::create(2, 1, 3, 3, &board).is_none());
        assert!(Move::create(4, 4, 6, 5, &board).is_none());
    }

    #[test]
    fn create_records_moved_and_captured_pieces() {
        let mut board = Board::new();
        board.set(4, 4, Piece::Light);
        let mv = Move::create(4, 1, 4, 4, &board).expect("d1-d4 should construct");
        assert_eq!(mv.moved, Piece::Dark);
        assert_eq!(mv.captured, Piece::Light);
        assert_eq!(mv.length(), 3);
    }

    #[test]
    fn equality_ignores_occupancy() {
        let opening = Board::new();
        let mut edited = Board::new();
        edited.set(6, 6, Piece::Light);
        let a = Move::create(6, 8, 6, 6, &opening).expect("f8-f6 should construct");
        let b = Move::create(6, 8, 6, 6, &edited).expect("f8-f6 should construct");
        assert_eq!(a, b);
        assert_ne!(a.captured, b.captured);
    }

    #[test]
    fn display_uses_printed_notation() {
        let board = Board::new();
        let mv = Move::create(3, 2, 3, 4, &board).expect("c2-c4 should construct");
        assert_eq!(mv.to_string(), "c2-c4");
    }
}
