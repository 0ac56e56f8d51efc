//! Analyze command - report the status and legal moves of a position.

use chess_rules::board::Board;
use chess_rules::evaluate::game_status;
use chess_rules::move_generation::{attackers, is_in_check, legal_moves};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct AnalyzeArgs {
    #[structopt(long = "fen")]
    pub starting_position: Board,
}

impl Command for AnalyzeArgs {
    fn execute(self) {
        let mut board = self.starting_position;
        let turn = board.turn();

        println!("{}", board);
        println!("Turn: {}", turn);
        match is_in_check(&board, turn) {
            Ok(in_check) => println!("In check: {}", in_check),
            Err(err) => eprintln!("{}", err),
        }
        if let Some(king) = board.king_square(turn) {
            let checkers = attackers(&board, king, turn.opposite());
            if !checkers.is_empty() {
                let squares: Vec<String> = checkers.iter().map(|s| s.to_string()).collect();
                println!("Checked by: {}", squares.join(" "));
            }
        }
        println!("Status: {}", game_status(&mut board));

        let moves = legal_moves(&mut board, turn);
        if moves.is_empty() {
            println!("There are no legal moves in the given position.");
            return;
        }
        let notation: Vec<String> = moves
            .iter()
            .map(|(from, to)| format!("{}{}", from, to))
            .collect();
        println!("Legal moves ({}): {}", moves.len(), notation.join(" "));
    }
}
