use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::GameStatus;
use crate::game::engine::MoveReport;
use std::fmt::Write;
use termion::{clear, cursor};

const FILES: &str = "    a   b   c   d   e   f   g   h\n";
const TOP: &str = "  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n";
const MIDDLE: &str = "  ├───┼───┼───┼───┼───┼───┼───┼───┤\n";
const BOTTOM: &str = "  └───┴───┴───┴───┴───┴───┴───┴───┘\n";

/// Everything the game shows besides the board itself.
pub struct GameInfo<'a> {
    pub status: GameStatus,
    pub in_check: bool,
    pub last_move: Option<&'a MoveReport>,
}

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        let _ = write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All);
    }

    /// Draws the board with row 0 (rank 8) on top. The selected square, if
    /// any, is bracketed.
    pub fn draw_board(&mut self, board: &Board, selected: Option<Square>) {
        self.buffer.push_str(FILES);
        self.buffer.push_str(TOP);

        for row in 0..8 {
            let rank = 8 - row;
            let _ = write!(self.buffer, "{} │", rank);
            for col in 0..8 {
                let Some(square) = Square::new(row, col) else {
                    continue;
                };
                let piece_char = match board.get(square) {
                    Some((piece, color)) => piece.to_unicode_piece_char(color),
                    None if square.parity() == 0 => ' ',
                    None => '·',
                };
                if selected == Some(square) {
                    let _ = write!(self.buffer, "[{}]│", piece_char);
                } else {
                    let _ = write!(self.buffer, " {} │", piece_char);
                }
            }
            let _ = writeln!(self.buffer, " {}", rank);
            self.buffer.push_str(if row < 7 { MIDDLE } else { BOTTOM });
        }

        self.buffer.push_str(FILES);
    }

    pub fn draw_info(&mut self, board: &Board, info: &GameInfo) {
        let _ = writeln!(self.buffer, "\nTurn: {}", board.turn());

        if let Some(report) = info.last_move {
            let _ = write!(
                self.buffer,
                "Last move: {} {} {}{}",
                report.color, report.piece, report.from, report.to
            );
            if let Some((piece, _)) = report.captured {
                let _ = write!(self.buffer, ", takes {}", piece);
            }
            if let Some(piece) = report.promotion {
                let _ = write!(self.buffer, ", promotes to {}", piece);
            }
            self.buffer.push('\n');
        }

        match info.status {
            GameStatus::Draw(reason) => {
                let _ = writeln!(self.buffer, "{} ({})", info.status, reason);
            }
            GameStatus::Won { .. } => {
                let _ = writeln!(self.buffer, "{}", info.status);
            }
            GameStatus::Running if info.in_check => self.buffer.push_str("Check!\n"),
            GameStatus::Running => {}
        }
    }

    /// Clears the terminal and prints the board followed by the game info.
    pub fn render_game_state(&mut self, board: &Board, selected: Option<Square>, info: &GameInfo) {
        self.clear();
        self.draw_board(board, selected);
        self.draw_info(board, info);
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
