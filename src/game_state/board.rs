//! Board state for a game of Lines of Action.
//!
//! `Board` is the central model for the engine. It owns the 8x8 grid, the
//! side on move, and the history stack used by make/unmake style search.
//! Legality rules live in `move_generation::legal_move_checks`; this module
//! wires them into the public `is_legal` entry point.

use std::fmt;

use crate::game_state::direction::DIRECTIONS;
use crate::game_state::loa_move::Move;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::{blocked, piece_count_along};
use crate::move_generation::legal_move_generator::LegalMoves;

/// Size of the board along either axis.
pub const BOARD_SIZE: i8 = 8;

use Piece::{Dark as D, Empty as E, Light as L};

/// The standard initial configuration, written bottom row first so that
/// `INITIAL_PIECES[row - 1][col - 1]` is the piece at (col, row).
pub const INITIAL_PIECES: [[Piece; 8]; 8] = [
    [E, D, D, D, D, D, D, E],
    [L, E, E, E, E, E, E, L],
    [L, E, E, E, E, E, E, L],
    [L, E, E, E, E, E, E, L],
    [L, E, E, E, E, E, E, L],
    [L, E, E, E, E, E, E, L],
    [L, E, E, E, E, E, E, L],
    [E, D, D, D, D, D, D, E],
];

/// Game state: grid contents, side on move, and the applied-move history.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Piece; 8]; 8],
    turn: Piece,
    moves: Vec<Move>,
}

impl Board {
    /// A new board in the standard initial position, dark to move.
    pub fn new() -> Self {
        Board::from_pieces(INITIAL_PIECES, Piece::Dark)
    }

    /// A board whose contents are taken from `contents`, indexed so that
    /// `get(col, row) == contents[row - 1][col - 1]`, with `turn` on move.
    pub fn from_pieces(contents: [[Piece; 8]; 8], turn: Piece) -> Self {
        Board {
            grid: contents,
            turn,
            moves: Vec::new(),
        }
    }

    /// An entirely empty board with `turn` on move.
    pub fn empty(turn: Piece) -> Self {
        Board::from_pieces([[Piece::Empty; 8]; 8], turn)
    }

    /// Reset to the standard initial position and clear the history.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// True iff `i` is a valid column or row number (1..=8).
    pub fn in_bounds(i: i8) -> bool {
        (1..=BOARD_SIZE).contains(&i)
    }

    /// The piece at column `c`, row `r`, where 1 <= c, r <= 8 and column 1
    /// corresponds to column `a` in printed notation.
    pub fn get(&self, c: i8, r: i8) -> Piece {
        self.grid[(r - 1) as usize][(c - 1) as usize]
    }

    /// Place `v` at column `c`, row `r`. Direct placement bypasses move
    /// legality; it exists for position setup.
    pub fn set(&mut self, c: i8, r: i8, v: Piece) {
        self.grid[(r - 1) as usize][(c - 1) as usize] = v;
    }

    /// Make `side` the next side to move.
    pub fn set_turn(&mut self, side: Piece) {
        self.turn = side;
    }

    /// The side next to move.
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Number of moves applied and not yet undone.
    pub fn moves_made(&self) -> usize {
        self.moves.len()
    }

    /// True iff `mv` is legal for the side currently on move: a side is on
    /// move, the travel distance equals the piece count along the full line
    /// of action, and nothing blocks the move.
    pub fn is_legal(&self, mv: &Move) -> bool {
        if self.turn == Piece::Empty {
            return false;
        }
        if piece_count_along(self, mv) != mv.length() {
            return false;
        }
        !blocked(self, mv)
    }

    /// Apply `mv`, assuming `is_legal(mv)`. Capture is implicit overwrite
    /// of the destination. Flips the turn and pushes onto the history.
    pub fn apply(&mut self, mv: Move) {
        debug_assert!(self.is_legal(&mv), "apply requires a legal move");
        self.set(mv.col1, mv.row1, mv.moved);
        self.set(mv.col0, mv.row0, Piece::Empty);
        self.moves.push(mv);
        self.turn = self.turn.opposite();
    }

    /// Retract the most recent move, restoring grid and turn exactly.
    /// Requires `moves_made() > 0`.
    pub fn undo(&mut self) {
        debug_assert!(!self.moves.is_empty(), "undo requires an applied move");
        if let Some(mv) = self.moves.pop() {
            self.set(mv.col1, mv.row1, mv.captured);
            self.set(mv.col0, mv.row0, mv.moved);
            self.turn = self.turn.opposite();
        }
    }

    /// A lazy, restartable sequence of all moves currently legal for the
    /// side on move.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        LegalMoves::new(self)
    }

    /// Number of 8-connected groups formed by `side`'s pieces. A side with
    /// no pieces has zero groups.
    pub fn connected_components(&self, side: Piece) -> usize {
        let mut visited = [[false; 8]; 8];
        let mut groups = 0;
        for r in 1..=BOARD_SIZE {
            for c in 1..=BOARD_SIZE {
                if visited[(r - 1) as usize][(c - 1) as usize] || self.get(c, r) != side {
                    continue;
                }
                groups += 1;
                // Worklist flood fill; no recursion.
                let mut stack = vec![(c, r)];
                visited[(r - 1) as usize][(c - 1) as usize] = true;
                while let Some((fc, fr)) = stack.pop() {
                    for dir in DIRECTIONS {
                        let nc = fc + dir.dc();
                        let nr = fr + dir.dr();
                        if Board::in_bounds(nc)
                            && Board::in_bounds(nr)
                            && !visited[(nr - 1) as usize][(nc - 1) as usize]
                            && self.get(nc, nr) == side
                        {
                            visited[(nr - 1) as usize][(nc - 1) as usize] = true;
                            stack.push((nc, nr));
                        }
                    }
                }
            }
        }
        groups
    }

    /// True iff either side's surviving pieces form exactly one connected
    /// group. A side reduced to a single piece counts as connected.
    pub fn game_over(&self) -> bool {
        self.connected_components(Piece::Dark) == 1
            || self.connected_components(Piece::Light) == 1
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    /// Rendered top row first, in the frame the console layer prints.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for r in (1..=BOARD_SIZE).rev() {
            write!(f, "    ")?;
            for c in 1..=BOARD_SIZE {
                write!(f, "{} ", self.get(c, r).abbrev())?;
            }
            writeln!(f)?;
        }
        write!(f, "Next move: {}", self.turn.full_name())?;
        write!(f, "\n===")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::loa_move::Move;
    use crate::game_state::piece::Piece;

    fn grids_equal(a: &Board, b: &Board) -> bool {
        for r in 1..=8 {
            for c in 1..=8 {
                if a.get(c, r) != b.get(c, r) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn opening_position_layout() {
        let b = Board::new();
        assert_eq!(b.get(2, 8), Piece::Dark);
        assert_eq!(b.get(8, 2), Piece::Light);
        assert_eq!(b.get(1, 1), Piece::Empty);
        assert_eq!(b.get(1, 8), Piece::Empty);
        assert_eq!(b.turn(), Piece::Dark);
        assert_eq!(b.moves_made(), 0);
    }

    #[test]
    fn set_and_get() {
        let mut b = Board::new();
        b.set(3, 4, Piece::Dark);
        assert_eq!(b.get(3, 4), Piece::Dark);
        b.set(6, 6, Piece::Light);
        assert_eq!(b.get(6, 6), Piece::Light);
        b.set_turn(Piece::Light);
        assert_eq!(b.turn(), Piece::Light);
        b.clear();
        assert_eq!(b.get(3, 4), Piece::Empty);
        assert_eq!(b.turn(), Piece::Dark);
        assert_eq!(b.moves_made(), 0);
    }

    #[test]
    fn pieces_in_a_column_run_are_one_group() {
        let mut b = Board::new();
        for r in 2..=7 {
            b.set(3, r, Piece::Dark);
        }
        assert_eq!(b.connected_components(Piece::Dark), 1);

        let mut b2 = Board::new();
        for c in 2..=7 {
            b2.set(c, 2, Piece::Light);
        }
        assert_eq!(b2.connected_components(Piece::Light), 1);
    }

    #[test]
    fn component_counts_for_split_and_absent_sides() {
        let b = Board::new();
        // Opening: dark has two rows of six, light two columns of six.
        assert_eq!(b.connected_components(Piece::Dark), 2);
        assert_eq!(b.connected_components(Piece::Light), 2);
        assert!(!b.game_over());

        let empty = Board::empty(Piece::Dark);
        assert_eq!(empty.connected_components(Piece::Dark), 0);
        assert!(!empty.game_over());

        let mut lone = Board::empty(Piece::Dark);
        lone.set(4, 4, Piece::Dark);
        // A single surviving piece is trivially connected.
        assert_eq!(lone.connected_components(Piece::Dark), 1);
        assert!(lone.game_over());
    }

    #[test]
    fn game_over_when_one_side_occupies_a_connected_line() {
        let mut b = Board::empty(Piece::Light);
        for c in 2..=7 {
            b.set(c, 5, Piece::Dark);
        }
        b.set(1, 1, Piece::Light);
        b.set(8, 8, Piece::Light);
        assert_eq!(b.connected_components(Piece::Dark), 1);
        assert!(b.game_over());
    }

    #[test]
    fn apply_then_undo_restores_grid_and_turn() {
        let mut b = Board::new();
        let before = b.clone();
        let mv = Move::create(6, 8, 6, 6, &b).expect("f8-f6 should construct");
        assert!(b.is_legal(&mv));
        b.apply(mv);
        assert_eq!(b.get(6, 6), Piece::Dark);
        assert_eq!(b.get(6, 8), Piece::Empty);
        assert_eq!(b.turn(), Piece::Light);
        assert_eq!(b.moves_made(), 1);
        b.undo();
        assert_eq!(b.get(6, 6), Piece::Empty);
        assert_eq!(b.get(6, 8), Piece::Dark);
        assert_eq!(b.turn(), Piece::Dark);
        assert_eq!(b.moves_made(), 0);
        assert!(grids_equal(&b, &before));
    }

    #[test]
    fn every_opening_move_round_trips() {
        let mut b = Board::new();
        let before = b.clone();
        let all: Vec<Move> = b.legal_moves().collect();
        for mv in all {
            let turn_before = b.turn();
            b.apply(mv);
            assert_eq!(b.turn(), turn_before.opposite());
            b.undo();
            assert_eq!(b.turn(), turn_before);
            assert!(grids_equal(&b, &before));
        }
    }

    #[test]
    fn capture_replaces_and_undo_restores() {
        let mut b = Board::new();
        b.set(4, 4, Piece::Light);
        let mv = Move::create(4, 1, 4, 4, &b).expect("d1-d4 should construct");
        b.apply(mv);
        assert_eq!(b.get(4, 4), Piece::Dark);
        assert_eq!(b.get(4, 1), Piece::Empty);
        b.undo();
        assert_eq!(b.get(4, 4), Piece::Light);
        assert_eq!(b.get(4, 1), Piece::Dark);
    }

    #[test]
    fn diagonal_capture_from_the_opening() {
        let mut b = Board::new();
        let mv = Move::create(3, 1, 1, 3, &b).expect("c1-a3 should construct");
        b.apply(mv);
        assert_eq!(b.get(1, 3), Piece::Dark);
    }

    #[test]
    fn capture_after_two_replies() {
        let mut b = Board::new();
        let mv = Move::create(4, 8, 4, 6, &b).expect("d8-d6 should construct");
        b.apply(mv);
        let reply = Move::create(1, 6, 4, 6, &b).expect("a6-d6 should construct");
        b.apply(reply);
        assert_eq!(b.get(4, 6), Piece::Light);
    }

    #[test]
    fn moves_over_friendly_pieces() {
        // A piece may pass over friendly pieces, never over opposing ones.
        let mut b = Board::new();
        b.set(6, 7, Piece::Dark);
        let mv = Move::create(7, 8, 4, 5, &b).expect("g8-d5 should construct");
        b.apply(mv);
        assert_eq!(b.get(4, 5), Piece::Dark);

        let mut b2 = Board::new();
        b2.set(3, 6, Piece::Dark);
        let mv2 = Move::create(5, 8, 2, 5, &b2).expect("e8-b5 should construct");
        b2.apply(mv2);
        assert_eq!(b2.get(2, 5), Piece::Dark);
    }

    #[test]
    fn render_opening_board() {
        let b = Board::new();
        let text = b.to_string();
        assert!(text.starts_with("===\n    - d d d d d d - \n"));
        assert!(text.contains("l - - - - - - l"));
        assert!(text.ends_with("Next move: dark\n==="));
    }
}
