use std::collections::VecDeque;

use crate::input_handler::{InputError, UserInput};

pub trait InputSource {
    fn next_input(&mut self) -> Result<UserInput, InputError>;
}

/// Reads one command per line from stdin.
pub struct HumanInput;

impl InputSource for HumanInput {
    fn next_input(&mut self) -> Result<UserInput, InputError> {
        crate::input_handler::parse_user_input()
    }
}

/// Feeds a fixed list of lines, then reports the end of input.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self) -> Result<UserInput, InputError> {
        match self.lines.pop_front() {
            Some(line) => line.parse(),
            None => Err(InputError::EndOfInput),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::Square;

    #[test]
    fn test_scripted_input() {
        let mut input = ScriptedInput::new(["e2", "nonsense", "quit"]);
        assert_eq!(
            input.next_input().unwrap(),
            UserInput::Click(Square::from_algebraic("e2").unwrap())
        );
        assert!(matches!(
            input.next_input(),
            Err(InputError::InvalidInput { .. })
        ));
        assert_eq!(input.next_input().unwrap(), UserInput::Quit);
        assert!(matches!(input.next_input(), Err(InputError::EndOfInput)));
    }
}
