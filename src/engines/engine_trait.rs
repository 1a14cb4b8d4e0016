//! Engine abstraction layer used by the console subsystem.
//!
//! Defines common input parameters and output payloads so different player
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::board::Board;
use crate::game_state::loa_move::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Override of the engine's configured search depth.
    pub depth: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Choose a move for the side on move. Implementations may apply and
    /// undo moves on `board` while thinking, but must hand it back in the
    /// state it arrived in.
    fn choose_move(&mut self, board: &mut Board, params: &GoParams)
        -> Result<EngineOutput, String>;
}
