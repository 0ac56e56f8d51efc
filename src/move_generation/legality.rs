use log::trace;
use smallvec::SmallVec;

use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;

use super::check::is_in_check;
use super::geometry::is_reachable;
use super::path::{is_path_blocked, is_same_side};

/// Destinations of a single piece. A queen in the open reaches 27 squares.
pub type Destinations = SmallVec<[Square; 32]>;

/// How thoroughly a move is vetted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    /// A move a player actually wants to make: it must not leave the mover's
    /// own king attacked.
    Outer,
    /// A move considered while computing attacks. The mover's king safety is
    /// irrelevant here, and checking it would recurse forever.
    Inner,
}

/// Shape, friendly-destination and obstruction rules for the piece on
/// `from`. This is legality without the self-check filter.
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    let (piece, color) = match board.get(from) {
        Some(occupant) => occupant,
        None => return false,
    };

    is_reachable(board, piece, color, from, to)
        && !is_same_side(board, color, to)
        && !(piece.is_sliding() && is_path_blocked(board, from, to))
}

/// Whether moving the piece on `from` to `to` leaves that piece's own king
/// attacked. A side without a king can never prove its king is safe, so the
/// answer is then `true`.
pub fn would_cause_own_check(board: &mut Board, from: Square, to: Square) -> bool {
    let color = match board.get(from) {
        Some((_, color)) => color,
        None => return false,
    };

    board.with_provisional_move(from, to, |position| {
        is_in_check(position, color).unwrap_or_else(|error| {
            trace!("self-check probe {}{}: {}", from, to, error);
            true
        })
    })
}

pub fn is_legal_move(board: &mut Board, from: Square, to: Square, probe: Probe) -> bool {
    is_pseudo_legal(board, from, to)
        && (probe == Probe::Inner || !would_cause_own_check(board, from, to))
}

/// Every square the piece on `from` may legally move to.
pub fn legal_destinations(board: &mut Board, from: Square) -> Destinations {
    Square::all()
        .filter(|&to| is_legal_move(board, from, to, Probe::Outer))
        .collect()
}

fn roster_squares(board: &Board, color: Color) -> SmallVec<[Square; 16]> {
    board.pieces(color).map(|placed| placed.square).collect()
}

/// Whether any piece of `color` has at least one legal move.
pub fn has_legal_move(board: &mut Board, color: Color) -> bool {
    roster_squares(board, color).into_iter().any(|from| {
        Square::all().any(|to| is_legal_move(board, from, to, Probe::Outer))
    })
}

/// All legal `(from, to)` pairs for `color`, in roster order.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<(Square, Square)> {
    roster_squares(board, color)
        .into_iter()
        .flat_map(|from| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| (from, to))
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::Piece;
    use crate::chess_position;

    fn sq(algebraic: &str) -> Square {
        Square::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let mut board = Board::starting_position();
        assert_eq!(legal_moves(&mut board, Color::White).len(), 20);
        assert_eq!(legal_moves(&mut board, Color::Black).len(), 20);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn test_pinned_piece_is_only_illegal_for_outer_probes() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ....r...
            ........
            ........
            ....B...
            ....K...
        };
        let (from, to) = (sq("e2"), sq("d3"));
        assert!(is_legal_move(&mut board, from, to, Probe::Inner));
        assert!(!is_legal_move(&mut board, from, to, Probe::Outer));
        assert!(would_cause_own_check(&mut board, from, to));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_rook_blocked_by_friendly_piece() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ....K...
            R..N....
        };
        let rook = Square::new(7, 0).unwrap();
        let target = Square::new(7, 7).unwrap();
        assert!(!is_legal_move(&mut board, rook, target, Probe::Outer));
        assert!(!is_legal_move(&mut board, rook, sq("d1"), Probe::Outer));
        assert!(is_legal_move(&mut board, rook, sq("c1"), Probe::Outer));

        board.remove(Square::new(7, 3).unwrap());
        assert!(is_legal_move(&mut board, rook, target, Probe::Outer));
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            r...K...
        };
        // the rook covers the whole first rank
        assert!(!is_legal_move(&mut board, sq("e1"), sq("d1"), Probe::Outer));
        assert!(!is_legal_move(&mut board, sq("e1"), sq("f1"), Probe::Outer));
        assert!(is_legal_move(&mut board, sq("e1"), sq("e2"), Probe::Outer));
        let destinations = legal_destinations(&mut board, sq("e1"));
        assert_eq!(destinations.len(), 3);
    }

    #[test]
    fn test_capturing_the_checker_is_legal() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ...q....
            ....K...
        };
        // the queen is unprotected, so the king may take it
        assert!(is_legal_move(&mut board, sq("e1"), sq("d2"), Probe::Outer));
        // but may not stay on a square the queen still covers
        assert!(!is_legal_move(&mut board, sq("e1"), sq("e2"), Probe::Outer));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_capture_of_protected_piece_is_illegal_for_king() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ...q....
            ..b.K...
        };
        assert!(!is_legal_move(&mut board, sq("e1"), sq("d2"), Probe::Outer));
        assert_eq!(board.get(sq("d2")), Some((Piece::Queen, Color::Black)));
    }

    #[test]
    fn test_missing_king_makes_every_move_illegal() {
        let mut board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            R.......
        };
        assert!(is_legal_move(&mut board, sq("a1"), sq("a5"), Probe::Inner));
        assert!(!is_legal_move(&mut board, sq("a1"), sq("a5"), Probe::Outer));
        assert!(!has_legal_move(&mut board, Color::White));
    }

    #[test]
    fn test_empty_from_square() {
        let mut board = Board::starting_position();
        assert!(!is_legal_move(&mut board, sq("e4"), sq("e5"), Probe::Outer));
        assert!(legal_destinations(&mut board, sq("e4")).is_empty());
    }
}
