pub mod fen;
pub mod input;
pub mod snapshot;

use std::io::{self, BufRead, Write};

pub use input::{InputError, UserInput, HELP_TEXT};

/// Reads one line from stdin. Returns `EndOfInput` once stdin is closed.
pub fn read_line() -> Result<String, InputError> {
    let mut input = String::new();
    io::stdout().flush().map_err(|e| InputError::IOError {
        error: format!("Failed to flush stdout: {}", e),
    })?;
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) => Err(InputError::EndOfInput),
        Ok(_n) => Ok(input.trim().to_string()),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

/// Reads and parses one line of game input.
pub fn parse_user_input() -> Result<UserInput, InputError> {
    read_line()?.parse()
}
