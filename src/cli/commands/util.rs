//! Shared utilities for CLI commands.

use std::path::PathBuf;

use chess_rules::board::Board;
use chess_rules::game::engine::EngineConfig;
use chess_rules::game::input_source::InputSource;
use chess_rules::game::prompt::Prompt;
use chess_rules::game::r#loop::GameLoop;
use chess_rules::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R, P>(input_source: I, renderer: R, prompt: P, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
    P: Prompt,
{
    let mut game = GameLoop::new(input_source, renderer, prompt, config);
    game.run();
}

pub(crate) fn create_config(starting_position: Board, save_file: PathBuf) -> EngineConfig {
    EngineConfig {
        starting_position,
        save_file,
    }
}
