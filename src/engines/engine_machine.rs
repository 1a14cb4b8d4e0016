//! The automated player: depth-limited negamax behind the engine trait.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::board::Board;
use crate::search::machine_search::MachineSearch;

/// Default search depth, matching the strength the engine ships with.
pub const DEFAULT_DEPTH: usize = 4;

pub struct MachineEngine {
    search: MachineSearch,
}

impl MachineEngine {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: usize) -> Self {
        MachineEngine {
            search: MachineSearch::new(depth),
        }
    }
}

impl Default for MachineEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MachineEngine {
    fn name(&self) -> &str {
        "PlumLOA Machine"
    }

    fn new_game(&mut self) {
        // Recent-choice memory belongs to one game; start over.
        self.search = MachineSearch::new(self.search.max_depth());
    }

    fn choose_move(
        &mut self,
        board: &mut Board,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        if let Some(depth) = params.depth {
            if depth != self.search.max_depth() {
                self.search = MachineSearch::new(depth);
            }
        }

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string machine_engine depth {}",
            self.search.max_depth()
        ));

        out.best_move = self.search.select_move(board);
        if let Some(mv) = &out.best_move {
            out.info_lines
                .push(format!("info string machine_engine move {mv}"));
        }
        Ok(out)
    }
}
