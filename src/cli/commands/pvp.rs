//! PvP command - play a game against another human.

use std::path::PathBuf;

use chess_rules::board::Board;
use chess_rules::game::engine::DEFAULT_SAVE_FILE;
use chess_rules::game::input_source::HumanInput;
use chess_rules::game::prompt::StdinPrompt;
use chess_rules::game::renderer::SimpleRenderer;
use chess_rules::input_handler::fen::STARTING_POSITION_FEN;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: Board,
    #[structopt(long = "save-file", default_value = DEFAULT_SAVE_FILE, parse(from_os_str))]
    pub save_file: PathBuf,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(self.starting_position, self.save_file);
        run_game_loop(HumanInput, SimpleRenderer, StdinPrompt, config);
    }
}
