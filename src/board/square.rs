//! Checked board square indices and algebraic coordinate conversions.
//!
//! Squares are numbered in FEN scan order: `0 == a8`, `7 == h8`,
//! `56 == a1`, `63 == h1`. `file = index % 8` maps files a through h and
//! `row = index / 8` walks ranks 8 down to 1, so the index order matches
//! a left-to-right read of a placement field.

use crate::errors::RecallError;

/// One of the 64 board squares. The index is validated at construction,
/// so every `Square` in circulation is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    /// Build a square from a raw index in `0..=63`.
    #[inline]
    pub fn new(index: u8) -> Result<Self, RecallError> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(RecallError::SquareOutOfBounds(index))
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// One-hot bitboard mask for this square.
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }

    /// File index, `0 == a` through `7 == h`.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Row in scan order, `0 == rank 8` through `7 == rank 1`.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Chess rank, `1..=8`.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.row()
    }

    /// Build a square from a file index (`0 == a`) and chess rank (`1..=8`).
    pub fn from_file_rank(file: u8, rank: u8) -> Result<Self, RecallError> {
        if file > 7 || !(1..=8).contains(&rank) {
            return Err(RecallError::SquareOutOfBounds(file.max(rank)));
        }
        Square::new((8 - rank) * 8 + file)
    }

    /// Iterate all 64 squares in scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    /// Convert an algebraic coordinate (for example `e4`) to a square.
    pub fn from_algebraic(coordinate: &str) -> Result<Self, RecallError> {
        let bytes = coordinate.as_bytes();
        if bytes.len() != 2 {
            return Err(RecallError::InvalidAlgebraicSquare(coordinate.to_owned()));
        }

        let file = bytes[0];
        let rank = bytes[1];

        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(RecallError::InvalidAlgebraicSquare(coordinate.to_owned()));
        }

        Square::from_file_rank(file - b'a', rank - b'0')
    }

    /// Convert this square to an algebraic coordinate (for example `e4`).
    pub fn to_algebraic(self) -> String {
        let file_char = char::from(b'a' + self.file());
        let rank_char = char::from(b'0' + self.rank());
        format!("{file_char}{rank_char}")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn scan_order_corners() {
        assert_eq!(Square::from_algebraic("a8").expect("a8 should parse").index(), 0);
        assert_eq!(Square::from_algebraic("h8").expect("h8 should parse").index(), 7);
        assert_eq!(Square::from_algebraic("a1").expect("a1 should parse").index(), 56);
        assert_eq!(Square::from_algebraic("h1").expect("h1 should parse").index(), 63);
        assert_eq!(Square::from_algebraic("e1").expect("e1 should parse").index(), 60);
    }

    #[test]
    fn round_trip_algebraic() {
        for square in Square::all() {
            let coordinate = square.to_algebraic();
            let parsed = Square::from_algebraic(&coordinate).expect("coordinate should parse");
            assert_eq!(parsed, square);
        }
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        assert!(Square::new(63).is_ok());
        assert!(Square::new(64).is_err());
        assert!(Square::new(255).is_err());
    }

    #[test]
    fn malformed_coordinates_are_rejected() {
        for bad in ["", "e", "e44", "i4", "e9", "E4", "44"] {
            assert!(Square::from_algebraic(bad).is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn file_and_rank_math() {
        let d5 = Square::from_algebraic("d5").expect("d5 should parse");
        assert_eq!(d5.file(), 3);
        assert_eq!(d5.rank(), 5);
        assert_eq!(d5.row(), 3);
        assert_eq!(d5.index(), 27);
        assert_eq!(d5.mask(), 1u64 << 27);
    }
}
