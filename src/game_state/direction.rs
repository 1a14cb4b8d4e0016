//! The eight compass directions a line of action can run along.
//!
//! Rows grow northward (row 1 is the bottom of the board), so `N` has a
//! positive row delta. The successor order is the fixed order in which
//! move generation tries rays from a square.

/// One of the eight compass directions, with unit column/row deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

/// All directions in successor order. Move generation iterates this array
/// so ray enumeration from a square is deterministic.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::N,
    Direction::S,
    Direction::E,
    Direction::W,
    Direction::NE,
    Direction::NW,
    Direction::SE,
    Direction::SW,
];

impl Direction {
    /// Column delta of one step in this direction.
    pub fn dc(self) -> i8 {
        match self {
            Direction::N | Direction::S => 0,
            Direction::E | Direction::NE | Direction::SE => 1,
            Direction::W | Direction::NW | Direction::SW => -1,
        }
    }

    /// Row delta of one step in this direction.
    pub fn dr(self) -> i8 {
        match self {
            Direction::E | Direction::W => 0,
            Direction::N | Direction::NE | Direction::NW => 1,
            Direction::S | Direction::SE | Direction::SW => -1,
        }
    }

    /// The direction pointing the opposite way along the same line.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::N,
            Direction::E => Direction::W,
            Direction::W => Direction::E,
            Direction::NE => Direction::SW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::NW,
            Direction::SW => Direction::NE,
        }
    }

    /// The next direction in successor order, wrapping from `SW` back
    /// to `N`.
    pub fn succ(self) -> Direction {
        match self {
            Direction::N => Direction::S,
            Direction::S => Direction::E,
            Direction::E => Direction::W,
            Direction::W => Direction::NE,
            Direction::NE => Direction::NW,
            Direction::NW => Direction::SE,
            Direction::SE => Direction::SW,
            Direction::SW => Direction::N,
        }
    }
}
