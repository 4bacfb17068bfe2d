//! Memorize/reconstruct/review state for one puzzle attempt.
//!
//! A session owns two boards: the hidden target and the player's
//! reconstruction. The phase gate keeps mutation confined to the
//! reconstruction window, mirroring the trainer's turn-paced flow.

use chrono::{DateTime, Local, TimeDelta};

use crate::board::piece::Piece;
use crate::board::position::Position;
use crate::board::square::Square;
use crate::errors::RecallError;

/// Where a session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The target is visible; the attempt board may not be touched.
    Memorize,
    /// The target is hidden; the player edits the attempt board.
    Reconstruct,
    /// Scoring is done; both boards are read-only.
    Review,
}

/// One attempt at reconstructing a target position from memory.
#[derive(Debug, Clone)]
pub struct TrainingSession {
    target: Position,
    attempt: Position,
    phase: Phase,
    started_at: DateTime<Local>,
    finished_at: Option<DateTime<Local>>,
}

impl TrainingSession {
    /// Start a session in the memorize phase with an empty attempt board.
    pub fn new(target: Position) -> Self {
        Self {
            target,
            attempt: Position::new_empty(),
            phase: Phase::Memorize,
            started_at: Local::now(),
            finished_at: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn target(&self) -> &Position {
        &self.target
    }

    #[inline]
    pub fn attempt(&self) -> &Position {
        &self.attempt
    }

    fn require_phase(&self, expected: Phase) -> Result<(), RecallError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RecallError::WrongPhase(self.phase))
        }
    }

    /// Hide the target and open the attempt board for editing.
    pub fn begin_reconstruction(&mut self) -> Result<(), RecallError> {
        self.require_phase(Phase::Memorize)?;
        self.phase = Phase::Reconstruct;
        Ok(())
    }

    /// Put a piece on the attempt board, replacing any prior occupant.
    pub fn place(&mut self, square: Square, piece: Piece) -> Result<(), RecallError> {
        self.require_phase(Phase::Reconstruct)?;
        self.attempt.set_piece_at(square, Some(piece));
        Ok(())
    }

    /// Erase one square of the attempt board.
    pub fn erase(&mut self, square: Square) -> Result<(), RecallError> {
        self.require_phase(Phase::Reconstruct)?;
        self.attempt.set_piece_at(square, None);
        Ok(())
    }

    /// Wipe the whole attempt board.
    pub fn clear_attempt(&mut self) -> Result<(), RecallError> {
        self.require_phase(Phase::Reconstruct)?;
        self.attempt.clear();
        Ok(())
    }

    /// Close the reconstruction window and score the attempt.
    pub fn finish(&mut self) -> Result<ScoreReport, RecallError> {
        self.require_phase(Phase::Reconstruct)?;
        self.phase = Phase::Review;
        self.finished_at = Some(Local::now());
        Ok(self.score())
    }

    /// Score the attempt against the target. Neither board is mutated, so
    /// this can also be polled mid-reconstruction for live feedback.
    pub fn score(&self) -> ScoreReport {
        let end = self.finished_at.unwrap_or_else(Local::now);

        ScoreReport {
            matching: self.attempt.matching_squares(&self.target),
            exact: self.attempt == self.target,
            elapsed: end - self.started_at,
        }
    }
}

/// Graded feedback for one attempt.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    /// Squares on which attempt and target agree, `0..=64`.
    pub matching: u32,
    /// Whole-board exact match.
    pub exact: bool,
    /// Time from session start to scoring.
    pub elapsed: TimeDelta,
}

impl ScoreReport {
    pub fn is_perfect(&self) -> bool {
        self.exact
    }

    /// One-line summary for terminal output.
    pub fn report(&self) -> String {
        let verdict = if self.exact { "perfect recall" } else { "keep training" };
        format!(
            "{}/64 squares correct in {}s - {}",
            self.matching,
            self.elapsed.num_seconds(),
            verdict
        )
    }
}
