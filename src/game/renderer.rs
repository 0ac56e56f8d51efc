use crate::game::display::{GameDisplay, GameInfo};
use crate::game::engine::Engine;

/// Called after every state change so the front-end can redraw.
pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine);
}

pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, engine: &Engine) {
        let info = GameInfo {
            status: engine.status(),
            in_check: engine.in_check(),
            last_move: engine.last_move(),
        };
        ui.render_game_state(engine.board(), engine.selected(), &info);
        if !engine.status().is_over() {
            match engine.selected() {
                Some(square) => println!("{} selected, enter the target square:", square),
                None => println!("Enter a square or a command (`help` for help):"),
            }
        }
    }
}
