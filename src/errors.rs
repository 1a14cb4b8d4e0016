use std::error::Error;
use std::fmt;

/// Represents the error types that can occur in the LOA engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the board.
    OutOfBounds,
    /// The provided square designator is not of the form `cr` with
    /// a column letter a-h and a row digit 1-8.
    InvalidSquareDesignator,
    /// The provided move notation is not of the form `cr-cr`.
    InvalidMoveNotation,
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Errors::OutOfBounds => write!(f, "square is outside the board"),
            Errors::InvalidSquareDesignator => write!(f, "bad square designator"),
            Errors::InvalidMoveNotation => write!(f, "bad move notation"),
        }
    }
}

impl Error for Errors {}
