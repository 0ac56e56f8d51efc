//! FEN (Forsyth–Edwards Notation) for the parts of a position this engine
//! models: piece placement and the side to move. Castling, en passant and
//! the move clocks are accepted on input and ignored.

use std::str::FromStr;

use thiserror::Error;

use crate::board::{color::Color, error::BoardError, piece::Piece, square::Square, Board};

#[derive(Error, Debug, PartialEq)]
pub enum FenParseError {
    #[error("Wrong number of fields: expected 2 to 6, got {field_count}")]
    WrongNumberOfFields { field_count: usize },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of ranks: 8 expected, {rank_count:?} given")]
    InvalidRankCount { rank_count: usize },
    #[error("Rank too long: {invalid_rank:?}")]
    InvalidRankLength { invalid_rank: String },
    #[error("Error placing piece: {board_error}")]
    ErrorPlacingPiece { board_error: BoardError },
    #[error("Rank incomplete: {incomplete_rank:?}")]
    IncompleteRank { incomplete_rank: String },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Parses a FEN string into a Board.
pub fn parse_fen(fen: &str) -> FenResult<Board> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(2..=6).contains(&fields.len()) {
        return Err(FenParseError::WrongNumberOfFields {
            field_count: fields.len(),
        });
    }

    let mut board = Board::new();
    parse_piece_placement(&mut board, fields[0])?;
    parse_active_color(&mut board, fields[1])?;

    Ok(board)
}

/// Parses the piece placement section of the FEN string. The first rank
/// listed is rank 8, which is row 0.
fn parse_piece_placement(board: &mut Board, position: &str) -> FenResult<()> {
    let ranks: Vec<&str> = position.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    for (row, rank) in ranks.iter().enumerate() {
        parse_rank(board, rank, row as i32)?;
    }

    Ok(())
}

fn parse_rank(board: &mut Board, rank: &str, row: i32) -> FenResult<()> {
    let mut col = 0;

    for c in rank.chars() {
        if col >= 8 {
            return Err(FenParseError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            });
        }

        if let Some(empty_squares) = c.to_digit(10) {
            col += empty_squares as i32;
        } else {
            let (piece, color) = Piece::from_fen_char(c).ok_or(
                FenParseError::InvalidPieceCharacter {
                    invalid_character: c,
                },
            )?;
            let square = Square::new(row, col).ok_or_else(|| FenParseError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            })?;
            board
                .put(square, piece, color)
                .map_err(|e| FenParseError::ErrorPlacingPiece { board_error: e })?;
            col += 1;
        }
    }

    if col != 8 {
        return Err(FenParseError::IncompleteRank {
            incomplete_rank: rank.to_string(),
        });
    }

    Ok(())
}

fn parse_active_color(board: &mut Board, active_color: &str) -> FenResult<()> {
    match active_color {
        "w" => board.set_turn(Color::White),
        "b" => board.set_turn(Color::Black),
        _ => {
            return Err(FenParseError::InvalidColor {
                invalid_color: active_color.to_string(),
            })
        }
    };
    Ok(())
}

/// Converts a Board to a FEN string.
pub fn to_fen(board: &Board) -> String {
    let mut fen = String::new();

    for row in 0..8 {
        let mut empty_count = 0;
        for col in 0..8 {
            let occupant = Square::new(row, col).and_then(|square| board.get(square));
            if let Some((piece, color)) = occupant {
                if empty_count > 0 {
                    fen.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                fen.push(piece.to_fen_char(color));
            } else {
                empty_count += 1;
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if row < 7 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(match board.turn() {
        Color::White => 'w',
        Color::Black => 'b',
    });
    fen.push_str(" - - 0 1");

    fen
}

impl FromStr for Board {
    type Err = FenParseError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}

impl Board {
    pub fn to_fen(&self) -> String {
        to_fen(self)
    }
}
