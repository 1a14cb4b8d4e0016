//! Crate root module declarations for the Plum LOA engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, and utility helpers) so tests, benches, and external
//! front ends can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod direction;
    pub mod loa_move;
    pub mod piece;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
}

pub mod search {
    pub mod board_scoring;
    pub mod machine_search;
}

pub mod engines {
    pub mod engine_machine;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
}

pub mod errors;
