//! Parsing of the lines a player types during a game.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::square::Square;

static SQUARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])$").expect("SQUARE_RE regex should be valid"));
static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("end of input")]
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInput {
    /// Select a square, or move the selected piece to it.
    Click(Square),
    /// Both clicks of a move at once, e.g. "e2e4".
    Coordinate { from: Square, to: Square },
    NewGame,
    OfferDraw,
    Save,
    Load,
    Help,
    Quit,
}

impl FromStr for UserInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();
        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };

        match trimmed.as_str() {
            "new" => return Ok(UserInput::NewGame),
            "draw" => return Ok(UserInput::OfferDraw),
            "save" => return Ok(UserInput::Save),
            "load" => return Ok(UserInput::Load),
            "help" | "?" => return Ok(UserInput::Help),
            "quit" | "q" | "exit" => return Ok(UserInput::Quit),
            _ => {}
        }

        if let Some(caps) = SQUARE_RE.captures(&trimmed) {
            let square = Square::from_algebraic(&caps[1]).ok_or_else(invalid)?;
            return Ok(UserInput::Click(square));
        }

        if let Some(caps) = COORD_RE.captures(&trimmed) {
            let from = Square::from_algebraic(&caps[1]).ok_or_else(invalid)?;
            let to = Square::from_algebraic(&caps[2]).ok_or_else(invalid)?;
            return Ok(UserInput::Coordinate { from, to });
        }

        Err(invalid())
    }
}

pub const HELP_TEXT: &str = "Type the square of the piece you want to move to select it (e.g. `e2`).\n\
After selecting a piece, type the square you want to move it to (e.g. `e4`),\n\
or type both at once (`e2e4`). Selecting the same square again clears the selection.\n\
If the move is valid, the piece moves and your turn is over.\n\
Other commands: new, draw, save, load, help, quit.";
