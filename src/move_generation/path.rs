use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;

use super::geometry::delta;

/// The four lines a sliding piece can travel along.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Vertical,
    Horizontal,
    /// Top-left to bottom-right, row and column change with the same sign.
    Diagonal,
    /// Top-right to bottom-left, row and column change with opposite signs.
    AntiDiagonal,
}

/// The line joining `from` and `to`, or `None` if they are not on a shared
/// line (or are the same square).
pub fn line_between(from: Square, to: Square) -> Option<Line> {
    let (dr, dc) = delta(from, to);
    match (dr, dc) {
        (0, 0) => None,
        (_, 0) => Some(Line::Vertical),
        (0, _) => Some(Line::Horizontal),
        _ if dr == dc => Some(Line::Diagonal),
        _ if dr == -dc => Some(Line::AntiDiagonal),
        _ => None,
    }
}

/// Squares strictly between `from` and `to` along their shared line.
/// Empty when the squares are adjacent or not on a line.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (dr, dc) = delta(from, to);
    let steps = if line_between(from, to).is_some() {
        dr.abs().max(dc.abs())
    } else {
        0
    };
    let (step_r, step_c) = (dr.signum(), dc.signum());
    (1..steps).filter_map(move |i| from.offset(step_r * i, step_c * i))
}

/// Whether any square strictly between `from` and `to` is occupied. Only
/// meaningful for bishops, rooks and queens.
pub fn is_path_blocked(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).any(|square| board.is_occupied(square))
}

/// Whether `to` holds a piece of `color`.
pub fn is_same_side(board: &Board, color: Color, to: Square) -> bool {
    matches!(board.get(to), Some((_, occupant)) if occupant == color)
}
