use std::fmt;

use log::error;

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::Board;
use crate::move_generation::{has_legal_move, is_in_check};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    /// The side to move is not in check and has no legal move.
    Stalemate,
    /// Not enough material left for either side to mate.
    DeadPosition,
    /// Both players agreed to a draw.
    Agreement,
    /// A king disappeared from the board. Only reachable from a corrupted
    /// position, never through play.
    MissingKing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won { winner: Color },
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Running => write!(f, "running"),
            GameStatus::Won { winner } => write!(f, "Player {} wins the game", winner),
            GameStatus::Draw(_) => write!(f, "The game has ended with a draw"),
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::DeadPosition => "insufficient material",
            DrawReason::Agreement => "agreement",
            DrawReason::MissingKing => "missing king",
        };
        write!(f, "{}", reason)
    }
}

/// Classifies the position for the side to move.
pub fn game_status(board: &mut Board) -> GameStatus {
    let to_move = board.turn();

    let in_check = match is_in_check(board, to_move) {
        Ok(in_check) => in_check,
        Err(error) => {
            error!("cannot evaluate position, declaring a draw: {}", error);
            return GameStatus::Draw(DrawReason::MissingKing);
        }
    };
    if board.king_square(to_move.opposite()).is_none() {
        error!(
            "cannot evaluate position, declaring a draw: there is no {} king on the board",
            to_move.opposite()
        );
        return GameStatus::Draw(DrawReason::MissingKing);
    }

    let can_move = has_legal_move(board, to_move);
    if in_check && !can_move {
        return GameStatus::Won {
            winner: to_move.opposite(),
        };
    }
    if is_dead_position(board) {
        return GameStatus::Draw(DrawReason::DeadPosition);
    }
    if !can_move {
        return GameStatus::Draw(DrawReason::Stalemate);
    }

    GameStatus::Running
}

/// Whether neither side has the material to mate: no queens, rooks or
/// pawns, and at most one minor piece in total, or exactly two bishops and
/// no knights with the bishops on squares of different colors.
pub fn is_dead_position(board: &Board) -> bool {
    let mut knights = 0;
    let mut bishop_parities = Vec::with_capacity(2);

    for placed in board.all_pieces() {
        match placed.piece {
            Piece::Queen | Piece::Rook | Piece::Pawn => return false,
            Piece::Knight => knights += 1,
            Piece::Bishop => bishop_parities.push(placed.square.parity()),
            Piece::King => {}
        }
    }

    match (knights, bishop_parities.as_slice()) {
        (k, b) if k + b.len() <= 1 => true,
        (0, [first, second]) => first != second,
        _ => false,
    }
}
