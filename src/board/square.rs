use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 8;

static ALGEBRAIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_RE regex should be valid")
});

/// A (row, column) coordinate. Row 0 is black's back rank (rank 8) and
/// row 7 is white's back rank (rank 1); column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` for coordinates outside the board.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> i32 {
        self.row as i32
    }

    pub fn col(self) -> i32 {
        self.col as i32
    }

    /// The square `(dr, dc)` away from this one, if it is still on the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::new(self.row() + dr, self.col() + dc)
    }

    /// Light and dark squares alternate on `(row + col) % 2`.
    pub fn parity(self) -> u8 {
        (self.row + self.col) % 2
    }

    /// All 64 squares, row by row starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let caps = ALGEBRAIC_RE.captures(algebraic)?;
        let file = caps[1].to_ascii_lowercase().chars().next()?;
        let rank = caps[2].chars().next()?.to_digit(10)? as i32;
        Self::new(BOARD_SIZE as i32 - rank, file as i32 - 'a' as i32)
    }

    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE as u8 - self.row;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s.trim()).ok_or_else(|| BoardError::InvalidSquare {
            input: s.to_string(),
        })
    }
}
