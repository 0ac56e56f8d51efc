use thiserror::Error;

use crate::board::color::Color;
use crate::board::square::Square;
use crate::board::Board;

use super::legality::is_pseudo_legal;

#[derive(Error, Debug, PartialEq)]
pub enum RulesError {
    #[error("there is no {color} king on the board")]
    MissingKing { color: Color },
}

/// Whether any piece of `by` could move onto `square`, ignoring whether that
/// move would expose its own king. Attackers are read from the grid, so a
/// piece provisionally evicted by a self-check probe does not attack.
pub fn is_attacked(board: &Board, square: Square, by: Color) -> bool {
    board
        .occupied_squares(by)
        .any(|from| is_pseudo_legal(board, from, square))
}

/// Squares holding a piece of `by` that attacks `square`.
pub fn attackers(board: &Board, square: Square, by: Color) -> Vec<Square> {
    board
        .occupied_squares(by)
        .filter(|&from| is_pseudo_legal(board, from, square))
        .collect()
}

/// Whether `color`'s king is attacked by the other side.
pub fn is_in_check(board: &Board, color: Color) -> Result<bool, RulesError> {
    let king = board
        .king_square(color)
        .ok_or(RulesError::MissingKing { color })?;
    Ok(is_attacked(board, king, color.opposite()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;

    fn sq(algebraic: &str) -> Square {
        Square::from_algebraic(algebraic).unwrap()
    }

    #[test]
    fn test_starting_position_is_not_check() {
        let board = Board::starting_position();
        assert_eq!(is_in_check(&board, Color::White), Ok(false));
        assert_eq!(is_in_check(&board, Color::Black), Ok(false));
    }

    #[test]
    fn test_rook_check_and_block() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ....RK..
        };
        assert_eq!(is_in_check(&board, Color::Black), Ok(true));
        assert_eq!(attackers(&board, sq("e8"), Color::White), vec![sq("e1")]);

        let blocked = chess_position! {
            ....k...
            ....n...
            ........
            ........
            ........
            ........
            ........
            ....RK..
        };
        assert_eq!(is_in_check(&blocked, Color::Black), Ok(false));
    }

    #[test]
    fn test_double_check_lists_both_attackers() {
        let board = chess_position! {
            ....k...
            ........
            .....N..
            ........
            ........
            ........
            ........
            ....RK..
        };
        assert_eq!(
            attackers(&board, sq("e8"), Color::White),
            vec![sq("f6"), sq("e1")]
        );
        assert!(attackers(&board, sq("e1"), Color::Black).is_empty());
    }

    #[test]
    fn test_knight_and_pawn_checks() {
        let board = chess_position! {
            ....k...
            ........
            .....N..
            ........
            ........
            ........
            ........
            .....K..
        };
        assert_eq!(is_in_check(&board, Color::Black), Ok(true));

        let pawn_check = chess_position! {
            ....k...
            ...P....
            ........
            ........
            ........
            ........
            ........
            .....K..
        };
        assert_eq!(is_in_check(&pawn_check, Color::Black), Ok(true));

        // a pawn directly in front does not give check
        let pawn_front = chess_position! {
            ....k...
            ....P...
            ........
            ........
            ........
            ........
            ........
            .....K..
        };
        assert_eq!(is_in_check(&pawn_front, Color::Black), Ok(false));
    }

    #[test]
    fn test_is_attacked_empty_square() {
        let board = Board::starting_position();
        // pawns only take occupied squares, so only the g1 knight covers f3
        assert!(is_attacked(&board, sq("f3"), Color::White));
        assert!(!is_attacked(&board, sq("e5"), Color::White));
    }

    #[test]
    fn test_missing_king() {
        let board = chess_position! {
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            ....K...
        };
        assert_eq!(
            is_in_check(&board, Color::Black),
            Err(RulesError::MissingKing {
                color: Color::Black
            })
        );
    }
}
