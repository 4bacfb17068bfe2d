//! Crate root module declarations for the Board Recall memory trainer.
//!
//! This file exposes all top-level subsystems (board representation, FEN
//! notation handling, puzzle sourcing, training sessions, and utility
//! helpers) so binaries, tests, and external tooling can import stable
//! module paths.

pub mod board {
    pub mod piece;
    pub mod position;
    pub mod square;
}

pub mod notation {
    pub mod fen;
}

pub mod puzzle {
    pub mod dataset;
}

pub mod trainer {
    pub mod session;
}

pub mod utils {
    pub mod render_board;
}

pub mod errors;
