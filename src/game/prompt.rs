//! Questions the game asks the players outside of regular move input.

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::input_handler::read_line;

pub trait Prompt {
    /// Asks which piece a pawn of `color` becomes. `None` means no answer;
    /// the caller falls back to a queen.
    fn choose_promotion(&mut self, color: Color) -> Option<Piece>;
    fn confirm(&mut self, question: &str) -> bool;
    fn message(&mut self, text: &str);
}

/// Asks on stdout and reads the answers from stdin.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn choose_promotion(&mut self, color: Color) -> Option<Piece> {
        println!(
            "Promote the {} pawn to (q)ueen, (r)ook, k(n)ight or (b)ishop [q]:",
            color
        );
        read_line().ok().and_then(|answer| parse_promotion_choice(&answer))
    }

    fn confirm(&mut self, question: &str) -> bool {
        println!("{} [y/N]", question);
        matches!(read_line(), Ok(answer) if is_yes(&answer))
    }

    fn message(&mut self, text: &str) {
        println!("{}", text);
    }
}

pub fn parse_promotion_choice(answer: &str) -> Option<Piece> {
    match answer.trim().to_lowercase().as_str() {
        "q" | "queen" => Some(Piece::Queen),
        "r" | "rook" => Some(Piece::Rook),
        "n" | "knight" => Some(Piece::Knight),
        "b" | "bishop" => Some(Piece::Bishop),
        _ => None,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Replays canned answers. Once the answers run out, promotions are left to
/// the default and every question is answered "no".
#[cfg(test)]
#[derive(Default)]
pub struct ScriptedPrompt {
    promotions: std::collections::VecDeque<Option<Piece>>,
    confirmations: std::collections::VecDeque<bool>,
    pub messages: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn with_promotions(promotions: Vec<Option<Piece>>) -> Self {
        Self {
            promotions: promotions.into(),
            ..Self::default()
        }
    }

    pub fn with_confirmations(confirmations: Vec<bool>) -> Self {
        Self {
            confirmations: confirmations.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn choose_promotion(&mut self, _color: Color) -> Option<Piece> {
        self.promotions.pop_front().flatten()
    }

    fn confirm(&mut self, _question: &str) -> bool {
        self.confirmations.pop_front().unwrap_or(false)
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
