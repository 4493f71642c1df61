//! Crate root module declarations for the checkers engine.
//!
//! Exposes the board model, precomputed move tables, move generation,
//! search, engines and utility helpers under stable module paths so the
//! binary, benchmarks and external adapters can import them.

pub mod errors;

pub mod game_state {
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod position;
    pub mod square_geometry;
}

pub mod moves {
    pub mod move_descriptions;
    pub mod move_tables;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod repetition;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod position_text;
    pub mod render_game_state;
}
