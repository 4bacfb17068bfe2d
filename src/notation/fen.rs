//! FEN placement-field validation and generation.
//!
//! The permissive scanner used for square-by-square ingestion lives on
//! [`Position::populate_from_fen`]; this module adds the strict parser
//! the puzzle source runs before trusting a dataset row, and the inverse
//! writer used for diagnostics and persistence.

use crate::board::piece::Piece;
use crate::board::position::Position;
use crate::board::square::Square;
use crate::errors::RecallError;

/// Placement field of the standard chess starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parse a placement field, rejecting malformed input.
///
/// Accepts a bare placement field or a full FEN string; trailing
/// space-separated fields (side to move, castling, clocks) are ignored.
/// Requires exactly 8 rank groups whose letters and digit runs each sum
/// to exactly 8 files.
pub fn parse_placement(notation: &str) -> Result<Position, RecallError> {
    let placement = notation.split_ascii_whitespace().next().unwrap_or("");

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(RecallError::WrongRankCount(ranks.len()));
    }

    let mut position = Position::new_empty();

    for (row, rank_group) in ranks.iter().enumerate() {
        let mut file: usize = 0;

        for ch in rank_group.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(RecallError::InvalidEmptyRun(ch));
                }
                file += run as usize;
                continue;
            }

            let piece = Piece::try_from_fen_char(ch)?;

            if file >= 8 {
                return Err(RecallError::BadRankWidth((*rank_group).to_owned()));
            }

            let square = Square::new((row * 8 + file) as u8)?;
            position.set_piece_at(square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(RecallError::BadRankWidth((*rank_group).to_owned()));
        }
    }

    Ok(position)
}

/// Write a position back out as a placement field.
pub fn write_placement(position: &Position) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        if row > 0 {
            out.push('/');
        }

        let mut empty_run = 0u32;

        for file in 0..8u8 {
            let square = Square::new(row * 8 + file).expect("row and file should be in bounds");

            match position.piece_at(square) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run as u8));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run as u8));
        }
    }

    out
}
