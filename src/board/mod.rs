pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;

use color::Color;
use error::BoardError;
use piece::Piece;
use square::{Square, BOARD_SIZE};

use crate::chess_position;

/// Index of a piece in the board's arena. Grid cells and roster entries both
/// refer to a piece through its id, so they always agree on what it is.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PieceId(usize);

/// A live piece together with the square it stands on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub color: Color,
    pub square: Square,
}

/// Represents the state of a chess board: an 8x8 grid of optional pieces,
/// one roster of live pieces per side, and the side to move.
///
/// Pieces live in an arena; a captured piece leaves an empty slot behind so
/// ids held by the rosters never shift.
#[derive(Clone, Debug)]
pub struct Board {
    grid: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],
    arena: Vec<Option<PlacedPiece>>,
    white: Vec<PieceId>,
    black: Vec<PieceId>,
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
            arena: Vec::with_capacity(32),
            white: Vec::with_capacity(16),
            black: Vec::with_capacity(16),
            turn: Color::White,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    fn cell(&self, square: Square) -> Option<PieceId> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    fn set_cell(&mut self, square: Square, id: Option<PieceId>) {
        self.grid[square.row() as usize][square.col() as usize] = id;
    }

    fn roster_mut(&mut self, color: Color) -> &mut Vec<PieceId> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn placed_mut(&mut self, id: PieceId) -> Option<&mut PlacedPiece> {
        self.arena.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn placed(&self, id: PieceId) -> Option<&PlacedPiece> {
        self.arena.get(id.0).and_then(Option::as_ref)
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.cell(square).is_some()
    }

    pub fn get(&self, square: Square) -> Option<(Piece, Color)> {
        let placed = self.placed(self.cell(square)?)?;
        Some((placed.piece, placed.color))
    }

    /// Places a new piece. Each side has at most one king.
    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<PieceId, BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }
        if piece == Piece::King && self.pieces(color).any(|placed| placed.piece == Piece::King) {
            return Err(BoardError::SecondKingBoardPutError { color, square });
        }

        let id = PieceId(self.arena.len());
        self.arena.push(Some(PlacedPiece {
            piece,
            color,
            square,
        }));
        self.set_cell(square, Some(id));
        self.roster_mut(color).push(id);
        Ok(id)
    }

    pub fn remove(&mut self, square: Square) -> Option<(Piece, Color)> {
        let id = self.cell(square)?;
        let placed = self.arena.get_mut(id.0)?.take()?;
        self.set_cell(square, None);
        self.roster_mut(placed.color).retain(|&other| other != id);
        Some((placed.piece, placed.color))
    }

    /// Live pieces of one side, in roster order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &PlacedPiece> + '_ {
        let roster = match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        };
        roster.iter().filter_map(move |&id| self.placed(id))
    }

    /// Live pieces of both sides.
    pub fn all_pieces(&self) -> impl Iterator<Item = &PlacedPiece> + '_ {
        self.pieces(Color::White).chain(self.pieces(Color::Black))
    }

    /// Squares of one side's roster, sorted.
    pub fn roster_squares(&self, color: Color) -> Vec<Square> {
        let mut squares: Vec<Square> = self.pieces(color).map(|p| p.square).collect();
        squares.sort();
        squares
    }

    /// Squares currently holding a piece of `color`, read from the grid.
    pub fn occupied_squares(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| matches!(self.get(square), Some((_, c)) if c == color))
    }

    /// The square of `color`'s king, or `None` if that side has no king on
    /// the grid.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let roster = match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        };
        roster.iter().find_map(|&id| {
            let placed = self.placed(id)?;
            (placed.piece == Piece::King && self.cell(placed.square) == Some(id))
                .then(|| placed.square)
        })
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn toggle_turn(&mut self) -> Color {
        self.turn = self.turn.opposite();
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) -> Color {
        self.turn = turn;
        turn
    }

    /// Moves the piece on `from` to `to`, capturing whatever stands there.
    /// Does not check legality and does not change the turn.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<Option<(Piece, Color)>, BoardError> {
        let id = self
            .cell(from)
            .ok_or(BoardError::FromSquareIsEmptyMoveApplicationError { square: from })?;
        let color = self
            .placed(id)
            .map(|p| p.color)
            .ok_or(BoardError::FromSquareIsEmptyMoveApplicationError { square: from })?;
        if matches!(self.get(to), Some((_, c)) if c == color) {
            return Err(BoardError::SameSideCaptureError { square: to });
        }

        let captured = self.remove(to);
        self.set_cell(from, None);
        self.set_cell(to, Some(id));
        if let Some(placed) = self.placed_mut(id) {
            placed.square = to;
        }
        Ok(captured)
    }

    /// Replaces the pawn on `square` with `piece` of the same color. The
    /// piece keeps its id, so its roster slot is unchanged.
    pub fn promote(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if !piece.is_promotion_choice() {
            return Err(BoardError::InvalidPromotionChoiceError { piece });
        }
        let id = self
            .cell(square)
            .ok_or(BoardError::PromotionNonPawnError { square })?;
        match self.placed_mut(id) {
            Some(placed) if placed.piece == Piece::Pawn => {
                placed.piece = piece;
                Ok(())
            }
            _ => Err(BoardError::PromotionNonPawnError { square }),
        }
    }

    /// Runs `probe` against the position reached by moving the piece on
    /// `from` to `to`, then puts every cell back exactly as it was.
    ///
    /// A piece standing on `to` is evicted from the grid only; it stays in
    /// its roster for the duration. `probe` gets a shared borrow, so the
    /// intermediate position cannot be mutated or leak past this call.
    pub(crate) fn with_provisional_move<R>(
        &mut self,
        from: Square,
        to: Square,
        probe: impl FnOnce(&Board) -> R,
    ) -> R {
        let mover = self.cell(from);
        let evicted = self.cell(to);

        self.set_cell(from, None);
        self.set_cell(to, mover);
        if let Some(placed) = mover.and_then(|id| self.placed_mut(id)) {
            placed.square = to;
        }

        let verdict = probe(self);

        if let Some(placed) = mover.and_then(|id| self.placed_mut(id)) {
            placed.square = from;
        }
        self.set_cell(to, evicted);
        self.set_cell(from, mover);

        verdict
    }

    /// Every grid cell points at a live piece standing on that cell, every
    /// roster entry is on the grid, and no side has two kings.
    pub fn is_consistent(&self) -> bool {
        let grid_ok = Square::all().all(|square| match self.cell(square) {
            Some(id) => matches!(self.placed(id), Some(p) if p.square == square),
            None => true,
        });
        let rosters_ok = Color::ALL.iter().all(|&color| {
            let roster = match color {
                Color::White => &self.white,
                Color::Black => &self.black,
            };
            let kings = roster
                .iter()
                .filter(|&&id| matches!(self.placed(id), Some(p) if p.piece == Piece::King))
                .count();
            kings <= 1
                && roster.iter().all(|&id| match self.placed(id) {
                    Some(p) => p.color == color && self.cell(p.square) == Some(id),
                    None => false,
                })
        });
        let occupied = Square::all().filter(|&s| self.is_occupied(s)).count();
        grid_ok && rosters_ok && occupied == self.white.len() + self.black.len()
    }
}

/// Two boards are equal when they hold the same pieces on the same squares,
/// with the same rosters and the same side to move. Arena layout is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn
            && Square::all().all(|square| self.get(square) == other.get(square))
            && Color::ALL
                .iter()
                .all(|&color| self.roster_squares(color) == other.roster_squares(color))
    }
}
