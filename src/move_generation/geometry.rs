//! Raw movement shapes. These predicates say whether a piece kind could
//! ever travel from one square to another; they know nothing about blockers,
//! captures of friendly pieces, or check. Pawns are the exception: their
//! shape depends on what stands on the destination, so they read the board.

use crate::board::color::Color;
use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::board::Board;

/// `(Δrow, Δcol)` travelled from `from` to `to`.
pub fn delta(from: Square, to: Square) -> (i32, i32) {
    (to.row() - from.row(), to.col() - from.col())
}

pub fn king_shape(dr: i32, dc: i32) -> bool {
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
}

pub fn knight_shape(dr: i32, dc: i32) -> bool {
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

pub fn bishop_shape(dr: i32, dc: i32) -> bool {
    dr != 0 && dr.abs() == dc.abs()
}

pub fn rook_shape(dr: i32, dc: i32) -> bool {
    (dr == 0) != (dc == 0)
}

pub fn queen_shape(dr: i32, dc: i32) -> bool {
    bishop_shape(dr, dc) || rook_shape(dr, dc)
}

/// Pawns only move forward: one step onto an empty square, two steps from
/// their starting row when both squares ahead are empty, or one step
/// diagonally onto an enemy piece.
pub fn pawn_reachable(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    let forward = color.forward();

    match (dr, dc.abs()) {
        (dr, 0) if dr == forward => !board.is_occupied(to),
        (dr, 0) if dr == 2 * forward => {
            from.row() == color.pawn_row()
                && !board.is_occupied(to)
                && from
                    .offset(forward, 0)
                    .map_or(false, |step| !board.is_occupied(step))
        }
        (dr, 1) if dr == forward => {
            matches!(board.get(to), Some((_, occupant)) if occupant != color)
        }
        _ => false,
    }
}

/// Whether `piece` of `color` standing on `from` has the shape to reach `to`.
/// A piece never reaches its own square.
pub fn is_reachable(board: &Board, piece: Piece, color: Color, from: Square, to: Square) -> bool {
    let (dr, dc) = delta(from, to);
    match piece {
        Piece::King => king_shape(dr, dc),
        Piece::Knight => knight_shape(dr, dc),
        Piece::Bishop => bishop_shape(dr, dc),
        Piece::Rook => rook_shape(dr, dc),
        Piece::Queen => queen_shape(dr, dc),
        Piece::Pawn => pawn_reachable(board, color, from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;

    fn sq(algebraic: &str) -> Square {
        Square::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn test_king_shape() {
        assert!(king_shape(1, 1));
        assert!(king_shape(0, -1));
        assert!(!king_shape(0, 0));
        assert!(!king_shape(2, 0));
    }

    #[test]
    fn test_knight_shape() {
        assert!(knight_shape(2, 1));
        assert!(knight_shape(-1, -2));
        assert!(!knight_shape(2, 2));
        assert!(!knight_shape(0, 3));
    }

    #[test]
    fn test_sliding_shapes() {
        assert!(bishop_shape(3, -3));
        assert!(!bishop_shape(0, 0));
        assert!(!bishop_shape(1, 2));
        assert!(rook_shape(0, 5));
        assert!(rook_shape(-7, 0));
        assert!(!rook_shape(0, 0));
        assert!(!rook_shape(1, 1));
        assert!(queen_shape(4, 4));
        assert!(queen_shape(0, 2));
        assert!(!queen_shape(1, 2));
    }

    #[test]
    fn test_pawn_single_and_double_step() {
        let board = Board::starting_position();
        assert!(pawn_reachable(&board, Color::White, sq("e2"), sq("e3")));
        assert!(pawn_reachable(&board, Color::White, sq("e2"), sq("e4")));
        assert!(!pawn_reachable(&board, Color::White, sq("e2"), sq("e5")));
        assert!(!pawn_reachable(&board, Color::White, sq("e2"), sq("e1")));
        assert!(pawn_reachable(&board, Color::Black, sq("d7"), sq("d5")));
        assert!(!pawn_reachable(&board, Color::Black, sq("d7"), sq("d8")));
    }

    #[test]
    fn test_pawn_double_step_needs_both_squares_empty() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ....n...
            ...n....
            ...PP...
            ....K...
        };
        // blocked on the destination
        assert!(!pawn_reachable(&board, Color::White, sq("e2"), sq("e4")));
        assert!(pawn_reachable(&board, Color::White, sq("e2"), sq("e3")));
        // blocked on the intervening square
        assert!(!pawn_reachable(&board, Color::White, sq("d2"), sq("d4")));
        assert!(!pawn_reachable(&board, Color::White, sq("d2"), sq("d3")));
    }

    #[test]
    fn test_pawn_double_step_only_from_starting_row() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ....P...
            ........
            ....K...
        };
        assert!(!pawn_reachable(&board, Color::White, sq("e3"), sq("e5")));
        assert!(pawn_reachable(&board, Color::White, sq("e3"), sq("e4")));
    }

    #[test]
    fn test_pawn_captures_diagonally_only_onto_enemies() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ...pP...
            ...P.p..
            ........
            ....K...
        };
        // no diagonal move onto empty squares
        assert!(!pawn_reachable(&board, Color::White, sq("e4"), sq("d5")));
        assert!(!pawn_reachable(&board, Color::White, sq("e4"), sq("f5")));
        assert!(!pawn_reachable(&board, Color::Black, sq("d4"), sq("e3")));
        // no straight capture
        assert!(!pawn_reachable(&board, Color::White, sq("d3"), sq("d4")));
        assert!(!pawn_reachable(&board, Color::Black, sq("d4"), sq("d3")));
        // no capture of a friendly piece
        assert!(!pawn_reachable(&board, Color::White, sq("d3"), sq("e4")));
        // no sideways move
        assert!(!pawn_reachable(&board, Color::Black, sq("d4"), sq("e4")));
        assert!(pawn_reachable(&board, Color::White, sq("e4"), sq("e5")));
    }

    #[test]
    fn test_pawn_diagonal_capture() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ...p....
            ....P...
            ........
            ........
            ....K...
        };
        assert!(pawn_reachable(&board, Color::White, sq("e4"), sq("d5")));
        assert!(pawn_reachable(&board, Color::Black, sq("d5"), sq("e4")));
        assert!(!pawn_reachable(&board, Color::Black, sq("d5"), sq("c4")));
    }

    #[test]
    fn test_is_reachable_dispatch() {
        let board = Board::starting_position();
        assert!(is_reachable(&board, Piece::Knight, Color::White, sq("g1"), sq("f3")));
        assert!(!is_reachable(&board, Piece::Knight, Color::White, sq("g1"), sq("g3")));
        assert!(!is_reachable(&board, Piece::Queen, Color::White, sq("d1"), sq("d1")));
        assert!(is_reachable(&board, Piece::Pawn, Color::White, sq("a2"), sq("a4")));
    }
}
