use crate::game::display::GameDisplay;

use super::Board;
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut ui = GameDisplay::new();
        ui.draw_board(self, None);
        write!(f, "{}", ui.buffer())
    }
}

/// Builds a `Board` from an 8x8 picture. The first line is row 0 (black's
/// back rank), uppercase letters are white, `.` is an empty square. The
/// board is white to move.
#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color) = $crate::board::piece::Piece::from_fen_char(c)
                    .expect("Invalid character in chess position");
                let square = $crate::board::square::Square::new((i / 8) as i32, (i % 8) as i32)
                    .expect("index is always on the board");
                board.put(square, piece, color).expect("squares are visited once");
            }
        }
        board
    }};
}
