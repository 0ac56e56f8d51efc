use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on a square that is already occupied: {square}")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Cannot put a second {color} king on the board: {square}")]
    SecondKingBoardPutError {
        color: super::color::Color,
        square: Square,
    },
    #[error("Cannot apply chess move, the `from` square is empty: {square}")]
    FromSquareIsEmptyMoveApplicationError { square: Square },
    #[error("Cannot apply chess move onto a piece of the same color: {square}")]
    SameSideCaptureError { square: Square },
    #[error("Promotion square did not contain a pawn: {square}")]
    PromotionNonPawnError { square: Square },
    #[error("A pawn cannot be promoted to a {piece}")]
    InvalidPromotionChoiceError { piece: super::piece::Piece },
    #[error("Not a square on the board: {input:?}")]
    InvalidSquare { input: String },
}
