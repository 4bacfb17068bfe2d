//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view from the bitboard layers for the
//! trainer binary, tests, and diagnostics in text environments.

use crate::board::piece::{Piece, PieceKind, PieceTeam};
use crate::board::position::Position;
use crate::board::square::Square;

/// Render the board to a Unicode string for terminal output.
///
/// Rows are printed rank 8 down to rank 1, matching the scan order of
/// the position's square indices.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_char = char::from(b'8' - row);
        out.push(rank_char);
        out.push(' ');

        for file in 0..8u8 {
            let square = Square::new(row * 8 + file).expect("row and file should be in bounds");
            match position.piece_at(square) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_char);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.team, piece.kind) {
        (PieceTeam::Light, PieceKind::Pawn) => '♙',
        (PieceTeam::Light, PieceKind::Knight) => '♘',
        (PieceTeam::Light, PieceKind::Bishop) => '♗',
        (PieceTeam::Light, PieceKind::Rook) => '♖',
        (PieceTeam::Light, PieceKind::Queen) => '♕',
        (PieceTeam::Light, PieceKind::King) => '♔',
        (PieceTeam::Dark, PieceKind::Pawn) => '♟',
        (PieceTeam::Dark, PieceKind::Knight) => '♞',
        (PieceTeam::Dark, PieceKind::Bishop) => '♝',
        (PieceTeam::Dark, PieceKind::Rook) => '♜',
        (PieceTeam::Dark, PieceKind::Queen) => '♛',
        (PieceTeam::Dark, PieceKind::King) => '♚',
    }
}
