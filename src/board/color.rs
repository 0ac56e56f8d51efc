use std::fmt;
use std::str::FromStr;

use super::square::BOARD_SIZE;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn is_white(&self) -> bool {
        matches!(self, Color::White)
    }

    pub fn from_is_white(is_white: bool) -> Self {
        if is_white {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Row delta of a pawn advance. White moves towards row 0.
    pub fn forward(&self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row the pawns of this color start on.
    pub fn pawn_row(&self) -> i32 {
        match self {
            Color::White => BOARD_SIZE as i32 - 2,
            Color::Black => 1,
        }
    }

    /// Row the pieces of this color start on.
    pub fn back_row(&self) -> i32 {
        match self {
            Color::White => BOARD_SIZE as i32 - 1,
            Color::Black => 0,
        }
    }

    /// Row on which a pawn of this color promotes.
    pub fn promotion_row(&self) -> i32 {
        self.opposite().back_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err("invalid color; options are: black, white"),
        }
    }
}
