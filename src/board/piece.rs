use std::fmt;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// The six kinds of chess piece. Color is carried separately so the same
/// kind can be looked up for either side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Piece {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

pub const ALL_PIECES: [Piece; 6] = [
    Piece::King,
    Piece::Queen,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
    Piece::Pawn,
];

/// Pieces a pawn may be replaced with; the first entry is the default.
pub const PROMOTION_CHOICES: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Knight, Piece::Bishop];

impl Piece {
    /// Bishops, rooks and queens move along lines that other pieces can block.
    pub fn is_sliding(&self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }

    pub fn is_promotion_choice(&self) -> bool {
        PROMOTION_CHOICES.contains(self)
    }

    pub fn to_fen_char(&self, color: Color) -> char {
        let c = match self {
            Piece::King => 'k',
            Piece::Queen => 'q',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            Piece::Rook => 'r',
            Piece::Pawn => 'p',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'k' => Piece::King,
            'q' => Piece::Queen,
            'b' => Piece::Bishop,
            'n' => Piece::Knight,
            'r' => Piece::Rook,
            'p' => Piece::Pawn,
            _ => return None,
        };
        Some((piece, color))
    }

    pub fn to_unicode_piece_char(&self, color: Color) -> char {
        match (self, color) {
            (Piece::King, Color::White) => '♔',
            (Piece::Queen, Color::White) => '♕',
            (Piece::Rook, Color::White) => '♖',
            (Piece::Bishop, Color::White) => '♗',
            (Piece::Knight, Color::White) => '♘',
            (Piece::Pawn, Color::White) => '♙',
            (Piece::King, Color::Black) => '♚',
            (Piece::Queen, Color::Black) => '♛',
            (Piece::Rook, Color::Black) => '♜',
            (Piece::Bishop, Color::Black) => '♝',
            (Piece::Knight, Color::Black) => '♞',
            (Piece::Pawn, Color::Black) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Piece::King => "king",
            Piece::Queen => "queen",
            Piece::Bishop => "bishop",
            Piece::Knight => "knight",
            Piece::Rook => "rook",
            Piece::Pawn => "pawn",
        };
        write!(f, "{}", name)
    }
}
