//! Twelve-layer bitboard occupancy for a single chess position.
//!
//! `Position` is the central model for the trainer. It stores one `u64`
//! layer per (team, kind) pair and nothing else: no side to move, no
//! castling rights, no clocks. Two instances are kept per puzzle, the
//! hidden target and the player's reconstruction, and the comparison
//! operations never mutate either side.

use crate::board::piece::Piece;
use crate::board::square::Square;

/// Piece occupancy for all 64 squares, one bit layer per piece.
///
/// Invariant: at most one layer has a given square's bit set. Every
/// mutation clears the square across all twelve layers before setting a
/// new bit, so the layers can never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Position {
    layers: [u64; 12],
}

impl Position {
    /// An empty board, all layers zero.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Build a position from a FEN placement field using the permissive
    /// scanner. See [`Position::populate_from_fen`] for the rules.
    pub fn from_fen(notation: &str) -> Self {
        let mut position = Self::new_empty();
        position.populate_from_fen(notation);
        position
    }

    /// Replace the whole board from a FEN placement field.
    ///
    /// All layers are cleared first; this is never an additive merge.
    /// The scan is permissive, matching the trainer's trusted puzzle
    /// source: `/` is skipped, a digit advances the cursor by its value,
    /// a piece letter sets that layer's bit and advances by one, a space
    /// stops the scan (trailing FEN fields are ignored), and any other
    /// character is ignored without advancing. Writes past square 63 are
    /// dropped, so overlong input cannot corrupt the layers. For a
    /// validating alternative use [`crate::notation::fen::parse_placement`].
    pub fn populate_from_fen(&mut self, notation: &str) {
        self.clear();

        let mut cursor: usize = 0;

        for ch in notation.chars() {
            if ch == ' ' {
                break;
            }
            if ch == '/' {
                continue;
            }
            if let Some(run) = ch.to_digit(10) {
                cursor += run as usize;
                continue;
            }
            if let Some(piece) = Piece::from_fen_char(ch) {
                if cursor < Square::COUNT {
                    self.layers[piece.layer_index()] |= 1u64 << cursor;
                }
                cursor += 1;
            }
        }
    }

    /// Reset to an empty board.
    #[inline]
    pub fn clear(&mut self) {
        self.layers = [0; 12];
    }

    /// Occupant of one square, or `None` if it is empty.
    ///
    /// Layers are probed in the fixed [`Piece::ALL`] order; the no-overlap
    /// invariant guarantees at most one layer matches.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square.mask();

        for piece in Piece::ALL {
            if self.layers[piece.layer_index()] & mask != 0 {
                return Some(piece);
            }
        }

        None
    }

    /// Place, replace, or erase the occupant of one square.
    ///
    /// The square is cleared across all twelve layers first; `None`
    /// leaves it empty.
    pub fn set_piece_at(&mut self, square: Square, occupant: Option<Piece>) {
        let mask = square.mask();

        for layer in &mut self.layers {
            *layer &= !mask;
        }

        if let Some(piece) = occupant {
            self.layers[piece.layer_index()] |= mask;
        }
    }

    /// Count the squares on which both positions agree, including squares
    /// that are empty on both sides. Always in `0..=64`. Exact equality
    /// is the derived `==`, which compares all twelve layers bitwise.
    pub fn matching_squares(&self, other: &Position) -> u32 {
        Square::all()
            .filter(|&square| self.piece_at(square) == other.piece_at(square))
            .count() as u32
    }

    /// Raw bit layer for one piece. Exposed for diagnostics and for tests
    /// that verify the no-overlap invariant by construction.
    #[inline]
    pub fn layer(&self, piece: Piece) -> u64 {
        self.layers[piece.layer_index()]
    }

    /// Union of all twelve layers.
    pub fn occupied(&self) -> u64 {
        self.layers.iter().copied().fold(0u64, |acc, layer| acc | layer)
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }
}
