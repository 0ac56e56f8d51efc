use log::warn;

use crate::game::display::GameDisplay;
use crate::game::engine::{ClickOutcome, Engine, EngineConfig, EngineError};
use crate::game::input_source::InputSource;
use crate::game::prompt::Prompt;
use crate::game::renderer::GameRenderer;
use crate::input_handler::input::HELP_TEXT;
use crate::input_handler::snapshot::SnapshotError;
use crate::input_handler::{InputError, UserInput};

/// Drives a game between two players sharing one input source.
pub struct GameLoop<I: InputSource, R: GameRenderer, P: Prompt> {
    engine: Engine,
    ui: GameDisplay,
    input: I,
    renderer: R,
    prompt: P,
    notices: Vec<String>,
}

impl<I: InputSource, R: GameRenderer, P: Prompt> GameLoop<I, R, P> {
    pub fn new(input: I, renderer: R, prompt: P, config: EngineConfig) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input,
            renderer,
            prompt,
            notices: Vec::new(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Runs until a player quits, declines another game, or the input ends.
    pub fn run(&mut self) {
        loop {
            self.render();

            if self.engine.status().is_over() {
                if self.play_again() {
                    continue;
                }
                break;
            }

            let input = match self.input.next_input() {
                Ok(input) => input,
                Err(InputError::EndOfInput) => break,
                Err(InputError::InvalidInput { input }) => {
                    self.notice(format!("Invalid input: {:?}", input));
                    continue;
                }
                Err(error) => {
                    warn!("{}", error);
                    break;
                }
            };

            if !self.handle(input) {
                break;
            }
        }
    }

    fn render(&mut self) {
        self.ui = GameDisplay::new();
        self.renderer.render(&mut self.ui, &self.engine);
        for notice in self.notices.drain(..) {
            self.prompt.message(&notice);
        }
    }

    fn notice(&mut self, text: impl Into<String>) {
        self.notices.push(text.into());
    }

    /// Returns false when the player wants to leave.
    fn handle(&mut self, input: UserInput) -> bool {
        match input {
            UserInput::Click(square) => {
                self.engine.click(square, &mut self.prompt);
            }
            UserInput::Coordinate { from, to } => {
                self.engine.clear_selection();
                if let ClickOutcome::Selected(_) = self.engine.click(from, &mut self.prompt) {
                    self.engine.click(to, &mut self.prompt);
                }
            }
            UserInput::NewGame => {
                if self
                    .prompt
                    .confirm("Do you really want to start a new game? The current game will be lost.")
                {
                    self.engine.new_game();
                    self.notice("New game started");
                }
            }
            UserInput::OfferDraw => {
                if self.prompt.confirm("Does player white agree to a draw?")
                    && self.prompt.confirm("Does player black agree to a draw?")
                {
                    self.engine.agree_draw();
                }
            }
            UserInput::Save => self.save(),
            UserInput::Load => self.load(),
            UserInput::Help => self.notice(HELP_TEXT),
            UserInput::Quit => {
                return !self.prompt.confirm("Do you really want to exit the game?");
            }
        }
        true
    }

    fn save(&mut self) {
        if self.engine.save_file_exists()
            && !self
                .prompt
                .confirm("A saved game already exists. Do you want to overwrite it?")
        {
            return;
        }
        match self.engine.save_game() {
            Ok(()) => self.notice("Game saved"),
            Err(error) => {
                warn!("saving failed: {}", error);
                self.notice(format!("The game could not be saved: {}", error));
            }
        }
    }

    fn load(&mut self) {
        if !self.engine.save_file_exists() {
            self.notice("No saved game found");
            return;
        }
        if !self
            .prompt
            .confirm("Do you really want to load the saved game? The current game will be lost.")
        {
            return;
        }
        match self.engine.load_game() {
            Ok(()) => self.notice("Saved game loaded"),
            Err(EngineError::SnapshotError {
                error: SnapshotError::NotFound { .. },
            }) => self.notice("No saved game found"),
            Err(error) => {
                warn!("loading failed: {}", error);
                self.notice(format!("The saved game could not be loaded: {}", error));
            }
        }
    }

    fn play_again(&mut self) -> bool {
        let status = self.engine.status().to_string();
        self.prompt.message(&status);
        if self.prompt.confirm("Do you want to play again?") {
            self.engine.new_game();
            true
        } else {
            false
        }
    }
}
