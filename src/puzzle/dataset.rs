//! CSV-backed puzzle source.
//!
//! Datasets are comma-separated with one header row and the FEN in the
//! second column (the layout used by the lichess puzzle export). Only
//! the first `limit` data rows are read; rows whose FEN fails strict
//! validation are skipped with a warning rather than aborting the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};
use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::board::position::Position;
use crate::errors::RecallError;
use crate::notation::fen::parse_placement;

/// One loaded puzzle: the raw FEN row and its parsed placement.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub fen: String,
    pub position: Position,
}

/// A non-empty collection of puzzles loaded from one dataset file.
#[derive(Debug, Clone)]
pub struct PuzzleSet {
    puzzles: Vec<Puzzle>,
}

impl PuzzleSet {
    /// Row cap used when the caller does not specify one.
    pub const DEFAULT_LIMIT: usize = 100;

    /// Load up to `limit` puzzles from a CSV file.
    ///
    /// The first line is treated as a header and skipped. An unreadable
    /// file, or a file that yields zero usable positions, is an error;
    /// individually malformed rows are only logged.
    pub fn load_csv(path: &Path, limit: usize) -> Result<Self, RecallError> {
        let unreadable = |source: std::io::Error| RecallError::DatasetUnreadable {
            path: path.display().to_string(),
            source,
        };

        let file = File::open(path).map_err(unreadable)?;
        let reader = BufReader::new(file);

        let mut puzzles: Vec<Puzzle> = Vec::new();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line.map_err(unreadable)?;

            // Header row.
            if line_number == 0 {
                continue;
            }
            if puzzles.len() >= limit {
                break;
            }

            let mut columns = line.split(',');
            let _id = columns.next();
            let Some(fen) = columns.next() else {
                warn!("dataset row {} has no FEN column, skipping", line_number + 1);
                continue;
            };

            match parse_placement(fen) {
                Ok(position) => puzzles.push(Puzzle {
                    fen: fen.to_owned(),
                    position,
                }),
                Err(err) => warn!("skipping dataset row {}: {err}", line_number + 1),
            }
        }

        if puzzles.is_empty() {
            return Err(RecallError::EmptyDataset(path.display().to_string()));
        }

        debug!("loaded {} puzzle positions from {}", puzzles.len(), path.display());

        Ok(Self { puzzles })
    }

    /// Pick one puzzle uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Puzzle {
        self.puzzles
            .choose(rng)
            .expect("a loaded puzzle set should never be empty")
    }

    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::PuzzleSet;
    use crate::errors::RecallError;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_temp_dataset(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("board_recall_{name}_{}.csv", std::process::id()));
        let mut file = std::fs::File::create(&path).expect("temp dataset should be writable");
        file.write_all(contents.as_bytes())
            .expect("temp dataset should accept writes");
        path
    }

    const SAMPLE: &str = "\
PuzzleId,FEN,Moves
00001,rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1,e2e4
00002,8/8/8/4k3/8/8/8/4K3 w - - 0 1,e1e2
00003,not-a-placement w - - 0 1,e1e2
00004,8/8/8/8/3q4/8/8/K6k b - - 0 1,d4a4
";

    #[test]
    fn loads_rows_after_the_header_and_skips_bad_fens() {
        let path = write_temp_dataset("sample", SAMPLE);
        let set = PuzzleSet::load_csv(&path, PuzzleSet::DEFAULT_LIMIT).expect("sample should load");

        // Row 3 is malformed and dropped.
        assert_eq!(set.len(), 3);
        assert!(set.get(0).expect("row 0 should exist").fen.starts_with("rnbqkbnr/"));
        assert_eq!(set.get(1).expect("row 1 should exist").position.piece_count(), 2);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn limit_caps_the_number_of_rows_read() {
        let path = write_temp_dataset("limit", SAMPLE);
        let set = PuzzleSet::load_csv(&path, 1).expect("limited load should work");

        assert_eq!(set.len(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("board_recall_does_not_exist.csv");
        let err = PuzzleSet::load_csv(&path, 10).expect_err("missing file should fail");
        assert!(matches!(err, RecallError::DatasetUnreadable { .. }));
    }

    #[test]
    fn dataset_with_no_usable_rows_is_an_error() {
        let path = write_temp_dataset("empty", "PuzzleId,FEN,Moves\n");
        let err = PuzzleSet::load_csv(&path, 10).expect_err("header-only file should fail");
        assert!(matches!(err, RecallError::EmptyDataset(_)));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn choose_returns_loaded_puzzles() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let path = write_temp_dataset("choose", SAMPLE);
        let set = PuzzleSet::load_csv(&path, PuzzleSet::DEFAULT_LIMIT).expect("sample should load");

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            let puzzle = set.choose(&mut rng);
            assert!(set.iter().any(|candidate| candidate.fen == puzzle.fen));
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn choose_works_with_an_entropy_seeded_rng() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let path = write_temp_dataset("entropy", SAMPLE);
        let set = PuzzleSet::load_csv(&path, PuzzleSet::DEFAULT_LIMIT).expect("sample should load");

        // The unseeded-run construction used by the trainer binary.
        let mut rng = StdRng::from_rng(&mut rand::rng());
        let puzzle = set.choose(&mut rng);
        assert!(set.iter().any(|candidate| candidate.fen == puzzle.fen));

        std::fs::remove_file(&path).ok();
    }
}
