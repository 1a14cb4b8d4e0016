//! The three-valued contents of a board square.

/// Contents of one square: empty, or a piece of the dark or light side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Empty,
    Dark,
    Light,
}

impl Piece {
    /// The opposing side. `Empty` is its own opposite; valid code paths
    /// only ask for the opposite of a side that is on move.
    pub fn opposite(self) -> Piece {
        match self {
            Piece::Dark => Piece::Light,
            Piece::Light => Piece::Dark,
            Piece::Empty => Piece::Empty,
        }
    }

    /// One-character abbreviation used when rendering a board.
    pub fn abbrev(self) -> &'static str {
        match self {
            Piece::Empty => "-",
            Piece::Dark => "d",
            Piece::Light => "l",
        }
    }

    /// Full textual name used in prompts and rendered boards.
    pub fn full_name(self) -> &'static str {
        match self {
            Piece::Empty => "empty",
            Piece::Dark => "dark",
            Piece::Light => "light",
        }
    }
}
