//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{analyze::AnalyzeArgs, pvp::PvpArgs};

#[derive(StructOpt)]
#[structopt(
    name = "chess",
    about = "A two-player chess game that enforces the rules of play ♛"
)]
pub enum Chess {
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The initial position can be specified using FEN notation with `--fen` (default: starting position). Games are saved to and loaded from `--save-file` (default: chess_save.json)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "analyze",
        about = "Print the status of a position given in FEN notation with `--fen` (required): whose turn it is, whether they are in check, the game status and every legal move."
    )]
    Analyze(AnalyzeArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Pvp(cmd),
            Analyze(cmd),
        }
    }
}
