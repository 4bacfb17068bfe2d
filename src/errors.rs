//! Errors used throughout the memory trainer.
//!
//! `RecallError` is the single error type returned by board manipulation,
//! notation parsing, puzzle loading, and session logic. Parsing and input
//! variants are recoverable and suitable for presenting to end users;
//! dataset variants surface at the puzzle-source boundary.

use thiserror::Error;

use crate::trainer::session::Phase;

/// Unified error type for the memory trainer.
#[derive(Error, Debug)]
pub enum RecallError {
    /// A square index outside `0..=63` was supplied.
    #[error("Square index out of bounds: {0}")]
    SquareOutOfBounds(u8),

    /// An algebraic coordinate string (for example `e4`) failed to parse.
    #[error("Invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    /// A character that is not one of `PNBRQKpnbrqk` was used as a piece.
    #[error("Invalid piece character: {0:?}")]
    InvalidPieceChar(char),

    /// A placement field did not contain exactly 8 rank groups.
    #[error("Placement field must contain 8 ranks, got {0}")]
    WrongRankCount(usize),

    /// A rank group's letters and digit runs did not sum to 8 files.
    #[error("Rank group {0:?} does not describe exactly 8 files")]
    BadRankWidth(String),

    /// An empty-square run outside `1..=8` appeared in a rank group.
    #[error("Invalid empty-square run {0:?} in placement field")]
    InvalidEmptyRun(char),

    /// The puzzle dataset file could not be opened or read.
    #[error("Could not read puzzle dataset {path}: {source}")]
    DatasetUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The puzzle dataset yielded no usable positions.
    #[error("No puzzle positions loaded from {0}")]
    EmptyDataset(String),

    /// A session operation was attempted in the wrong phase.
    #[error("Operation not allowed while the session is in the {0:?} phase")]
    WrongPhase(Phase),
}
