//! Conversions between printed square/move notation and board coordinates.
//!
//! A square designator is a column letter a-h followed by a row digit 1-8
//! (e.g. `c2`); a move is two designators joined by a dash (e.g. `c2-c4`).
//! Malformed input yields an error or no move, never a panic, so the
//! console layer can echo a diagnostic and keep reading.

use crate::errors::Errors;
use crate::game_state::board::Board;
use crate::game_state::loa_move::Move;

/// Parse a square designator such as `c2` into (column, row), both 1-8.
pub fn parse_square(sq: &str) -> Result<(i8, i8), Errors> {
    let bytes = sq.as_bytes();
    if bytes.len() != 2 {
        return Err(Errors::InvalidSquareDesignator);
    }
    let col = bytes[0];
    let row = bytes[1];
    if !(b'a'..=b'h').contains(&col) || !(b'1'..=b'8').contains(&row) {
        return Err(Errors::InvalidSquareDesignator);
    }
    Ok(((col - b'a' + 1) as i8, (row - b'0') as i8))
}

/// Format (column, row) as a square designator such as `c2`.
pub fn square_to_string(c: i8, r: i8) -> Result<String, Errors> {
    if !Board::in_bounds(c) || !Board::in_bounds(r) {
        return Err(Errors::OutOfBounds);
    }
    Ok(format!("{}{}", char::from(b'a' + (c - 1) as u8), r))
}

/// Parse move notation such as `c2-c4` against `board`, producing the
/// move's occupancy snapshot from the current position. Returns `None`
/// for malformed notation, off-board squares, or non-collinear endpoints.
pub fn parse_move(board: &Board, text: &str) -> Option<Move> {
    let text = text.trim();
    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b'-' {
        return None;
    }
    let (c0, r0) = parse_square(&text[0..2]).ok()?;
    let (c1, r1) = parse_square(&text[3..5]).ok()?;
    Move::create(c0, r0, c1, r1, board)
}
