use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::{self, DrawReason, GameStatus};
use crate::input_handler::snapshot::{self, SnapshotError};
use crate::move_generation::{self, Probe};

use super::prompt::Prompt;

pub const DEFAULT_SAVE_FILE: &str = "chess_save.json";

/// Core engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub starting_position: Board,
    pub save_file: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::starting_position(),
            save_file: PathBuf::from(DEFAULT_SAVE_FILE),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move: {from}{to}")]
    InvalidMove { from: Square, to: Square },
    #[error("The game is over")]
    GameOver,
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
    #[error("{error}")]
    SnapshotError { error: SnapshotError },
}

impl From<BoardError> for EngineError {
    fn from(error: BoardError) -> Self {
        EngineError::BoardError { error }
    }
}

impl From<SnapshotError> for EngineError {
    fn from(error: SnapshotError) -> Self {
        EngineError::SnapshotError { error }
    }
}

/// What an executed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<(Piece, Color)>,
    pub promotion: Option<Piece>,
    pub status: GameStatus,
}

/// Result of clicking a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Off the board, an empty square or an opponent's piece with nothing
    /// selected, or the game is over.
    Ignored,
    Selected(Square),
    /// The selected square was clicked again.
    SelectionCleared,
    /// The selected piece cannot move to the clicked square. The selection
    /// is dropped.
    Rejected { from: Square, to: Square },
    Moved(MoveReport),
}

/// A two-player game: the position, the pending selection and the status.
pub struct Engine {
    config: EngineConfig,
    board: Board,
    selected: Option<Square>,
    status: GameStatus,
    move_history: Vec<MoveReport>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = Self {
            board: config.starting_position.clone(),
            config,
            selected: None,
            status: GameStatus::Running,
            move_history: Vec::new(),
        };
        engine.evaluate_position();
        engine
    }

    /// Classifies a freshly installed position. A position that is already
    /// decided, or has a side without a king, never reaches move input.
    fn evaluate_position(&mut self) {
        self.status = evaluate::game_status(&mut self.board);
        if self.status.is_over() {
            info!("game over: {}", self.status);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn move_history(&self) -> &[MoveReport] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<&MoveReport> {
        self.move_history.last()
    }

    pub fn save_file(&self) -> &Path {
        &self.config.save_file
    }

    /// Whether the side to move is in check. A side without a king is
    /// reported as not in check; the status already says the game is drawn.
    pub fn in_check(&self) -> bool {
        move_generation::is_in_check(&self.board, self.board.turn()).unwrap_or(false)
    }

    pub fn legal_moves(&mut self) -> Vec<(Square, Square)> {
        let turn = self.board.turn();
        move_generation::legal_moves(&mut self.board, turn)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Click on raw board coordinates. Coordinates off the board are ignored.
    pub fn click_at(&mut self, row: i32, col: i32, prompt: &mut dyn Prompt) -> ClickOutcome {
        match Square::new(row, col) {
            Some(square) => self.click(square, prompt),
            None => ClickOutcome::Ignored,
        }
    }

    /// The first click selects one of the mover's pieces; the second click
    /// moves it, or clears the selection if it hits the same square.
    pub fn click(&mut self, square: Square, prompt: &mut dyn Prompt) -> ClickOutcome {
        if self.status.is_over() {
            return ClickOutcome::Ignored;
        }

        match self.selected.take() {
            None => match self.board.get(square) {
                Some((_, color)) if color == self.board.turn() => {
                    self.selected = Some(square);
                    ClickOutcome::Selected(square)
                }
                _ => ClickOutcome::Ignored,
            },
            Some(from) if from == square => ClickOutcome::SelectionCleared,
            Some(from) => match self.make_move(from, square, prompt) {
                Ok(report) => ClickOutcome::Moved(report),
                Err(error) => {
                    debug!("{}", error);
                    ClickOutcome::Rejected { from, to: square }
                }
            },
        }
    }

    /// Moves the piece on `from` to `to` if it belongs to the side to move
    /// and the move is legal.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        prompt: &mut dyn Prompt,
    ) -> Result<MoveReport, EngineError> {
        if self.status.is_over() {
            return Err(EngineError::GameOver);
        }
        let owned_by_mover = matches!(self.board.get(from), Some((_, color)) if color == self.board.turn());
        if !owned_by_mover || !move_generation::is_legal_move(&mut self.board, from, to, Probe::Outer)
        {
            return Err(EngineError::InvalidMove { from, to });
        }
        self.execute(from, to, prompt)
    }

    /// Applies an already validated move: capture, relocation, promotion,
    /// turn change, then status evaluation for the side now to move.
    fn execute(
        &mut self,
        from: Square,
        to: Square,
        prompt: &mut dyn Prompt,
    ) -> Result<MoveReport, EngineError> {
        let (piece, color) = self
            .board
            .get(from)
            .ok_or(BoardError::FromSquareIsEmptyMoveApplicationError { square: from })?;

        let captured = self.board.apply_move(from, to)?;
        if let Some((captured_piece, captured_color)) = captured {
            debug!("{} {} captured {} {} on {}", color, piece, captured_color, captured_piece, to);
        }

        let promotion = if piece == Piece::Pawn && to.row() == color.promotion_row() {
            let choice = self.promotion_choice(prompt, color);
            self.board.promote(to, choice)?;
            debug!("{} pawn on {} promoted to {}", color, to, choice);
            Some(choice)
        } else {
            None
        };

        self.board.toggle_turn();
        self.status = evaluate::game_status(&mut self.board);
        debug!("{} {} {}{}: {:?}", color, piece, from, to, self.status);
        if self.status.is_over() {
            info!("game over: {}", self.status);
        }

        let report = MoveReport {
            from,
            to,
            piece,
            color,
            captured,
            promotion,
            status: self.status,
        };
        self.move_history.push(report);
        Ok(report)
    }

    fn promotion_choice(&self, prompt: &mut dyn Prompt, color: Color) -> Piece {
        match prompt.choose_promotion(color) {
            Some(piece) if piece.is_promotion_choice() => piece,
            Some(piece) => {
                warn!("a pawn cannot be promoted to a {}, using a queen", piece);
                Piece::Queen
            }
            None => Piece::Queen,
        }
    }

    /// Starts over from the configured starting position.
    pub fn new_game(&mut self) {
        self.board = self.config.starting_position.clone();
        self.selected = None;
        self.move_history.clear();
        info!("new game");
        self.evaluate_position();
    }

    /// Both players agreed to a draw. Has no effect on a finished game.
    pub fn agree_draw(&mut self) {
        if !self.status.is_over() {
            self.selected = None;
            self.status = GameStatus::Draw(DrawReason::Agreement);
            info!("game drawn by agreement");
        }
    }

    pub fn save_file_exists(&self) -> bool {
        self.config.save_file.exists()
    }

    pub fn save_game(&self) -> Result<(), EngineError> {
        self.save_to(&self.config.save_file)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), EngineError> {
        snapshot::save(&self.board, path)?;
        info!("game saved to {}", path.display());
        Ok(())
    }

    pub fn load_game(&mut self) -> Result<(), EngineError> {
        let path = self.config.save_file.clone();
        self.load_from(&path)
    }

    /// Replaces the position with the one saved at `path`. On failure the
    /// current game is left as it was.
    pub fn load_from(&mut self, path: &Path) -> Result<(), EngineError> {
        let board = snapshot::load(path)?;
        self.board = board;
        self.selected = None;
        self.move_history.clear();
        info!("game loaded from {}", path.display());
        self.evaluate_position();
        Ok(())
    }
}
