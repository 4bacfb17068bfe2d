//! Piece identity and FEN-letter mapping.
//!
//! A square's occupancy is modeled as `Option<Piece>`: twelve concrete
//! (team, kind) pairs plus `None` for an empty square. The FEN letter
//! mapping is total over those thirteen states, with uppercase letters
//! for the light side and lowercase for the dark side.

use crate::errors::RecallError;

/// Team (color) of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceTeam {
    Light,
    Dark,
}

impl PieceTeam {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceTeam::Light => 0,
            PieceTeam::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceTeam::Light => PieceTeam::Dark,
            PieceTeam::Dark => PieceTeam::Light,
        }
    }
}

/// Piece kind (team is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase FEN letter for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// One concrete piece: a (team, kind) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub team: PieceTeam,
    pub kind: PieceKind,
}

impl Piece {
    /// All twelve pieces in layer order. This order also fixes the layer
    /// probe order used by occupancy queries.
    pub const ALL: [Piece; 12] = [
        Piece { team: PieceTeam::Light, kind: PieceKind::Pawn },
        Piece { team: PieceTeam::Light, kind: PieceKind::Knight },
        Piece { team: PieceTeam::Light, kind: PieceKind::Bishop },
        Piece { team: PieceTeam::Light, kind: PieceKind::Rook },
        Piece { team: PieceTeam::Light, kind: PieceKind::Queen },
        Piece { team: PieceTeam::Light, kind: PieceKind::King },
        Piece { team: PieceTeam::Dark, kind: PieceKind::Pawn },
        Piece { team: PieceTeam::Dark, kind: PieceKind::Knight },
        Piece { team: PieceTeam::Dark, kind: PieceKind::Bishop },
        Piece { team: PieceTeam::Dark, kind: PieceKind::Rook },
        Piece { team: PieceTeam::Dark, kind: PieceKind::Queen },
        Piece { team: PieceTeam::Dark, kind: PieceKind::King },
    ];

    pub const fn new(team: PieceTeam, kind: PieceKind) -> Self {
        Piece { team, kind }
    }

    /// Index of this piece's bit layer, `0..=11`.
    #[inline]
    pub const fn layer_index(self) -> usize {
        self.team.index() * 6 + self.kind.index()
    }

    /// Map a FEN letter to a piece. Uppercase is light, lowercase is dark.
    /// Returns `None` for anything outside `PNBRQKpnbrqk`.
    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let team = if ch.is_ascii_uppercase() {
            PieceTeam::Light
        } else if ch.is_ascii_lowercase() {
            PieceTeam::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Piece { team, kind })
    }

    /// Like [`Piece::from_fen_char`] but with an error for unknown letters.
    pub fn try_from_fen_char(ch: char) -> Result<Piece, RecallError> {
        Piece::from_fen_char(ch).ok_or(RecallError::InvalidPieceChar(ch))
    }

    /// FEN letter for this piece.
    pub fn to_fen_char(self) -> char {
        match self.team {
            PieceTeam::Light => self.kind.letter().to_ascii_uppercase(),
            PieceTeam::Dark => self.kind.letter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Piece, PieceKind, PieceTeam};

    #[test]
    fn fen_letters_round_trip() {
        for piece in Piece::ALL {
            let letter = piece.to_fen_char();
            let parsed = Piece::from_fen_char(letter).expect("letter should map back");
            assert_eq!(parsed, piece);
        }
    }

    #[test]
    fn case_selects_team() {
        let light_knight = Piece::from_fen_char('N').expect("N should parse");
        assert_eq!(light_knight.team, PieceTeam::Light);
        assert_eq!(light_knight.kind, PieceKind::Knight);

        let dark_knight = Piece::from_fen_char('n').expect("n should parse");
        assert_eq!(dark_knight.team, PieceTeam::Dark);
        assert_eq!(dark_knight.kind, PieceKind::Knight);
    }

    #[test]
    fn unknown_letters_are_rejected() {
        for bad in ['x', 'Z', '1', '/', ' ', '-'] {
            assert!(Piece::from_fen_char(bad).is_none(), "{bad:?} should not map");
            assert!(Piece::try_from_fen_char(bad).is_err());
        }
    }

    #[test]
    fn layer_indices_are_distinct_and_dense() {
        let mut seen = [false; 12];
        for piece in Piece::ALL {
            let index = piece.layer_index();
            assert!(!seen[index], "layer index {index} assigned twice");
            seen[index] = true;
        }
        assert!(seen.iter().all(|&used| used));
    }
}
