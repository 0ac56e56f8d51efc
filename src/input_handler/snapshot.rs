//! Saved games. A snapshot is the whole position: whose turn it is and
//! every piece with its square, written as JSON.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{color::Color, error::BoardError, piece::Piece, square::Square, Board};

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("no saved game found at {path}")]
    NotFound { path: String },
    #[error("io error: {error}")]
    IOError { error: io::Error },
    #[error("malformed saved game: {error}")]
    Json { error: serde_json::Error },
    #[error("saved piece is off the board: ({row}, {col})")]
    InvalidSquare { row: i32, col: i32 },
    #[error("error placing saved piece: {board_error}")]
    ErrorPlacingPiece { board_error: BoardError },
}

impl From<serde_json::Error> for SnapshotError {
    fn from(error: serde_json::Error) -> Self {
        SnapshotError::Json { error }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedPiece {
    pub kind: Piece,
    pub white: bool,
    pub row: i32,
    pub col: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub white_to_move: bool,
    pub pieces: Vec<SavedPiece>,
}

impl Snapshot {
    /// Captures `board`, black roster first, then white.
    pub fn capture(board: &Board) -> Self {
        let pieces = board
            .pieces(Color::Black)
            .chain(board.pieces(Color::White))
            .map(|placed| SavedPiece {
                kind: placed.piece,
                white: placed.color.is_white(),
                row: placed.square.row(),
                col: placed.square.col(),
            })
            .collect();

        Self {
            white_to_move: board.turn().is_white(),
            pieces,
        }
    }

    /// Builds a fresh board from the snapshot. Nothing is returned unless
    /// every piece could be placed.
    pub fn restore(&self) -> Result<Board, SnapshotError> {
        let mut board = Board::new();
        for saved in &self.pieces {
            let square = Square::new(saved.row, saved.col).ok_or(SnapshotError::InvalidSquare {
                row: saved.row,
                col: saved.col,
            })?;
            board
                .put(square, saved.kind, Color::from_is_white(saved.white))
                .map_err(|board_error| SnapshotError::ErrorPlacingPiece { board_error })?;
        }
        board.set_turn(Color::from_is_white(self.white_to_move));
        Ok(board)
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

pub fn save(board: &Board, path: &Path) -> Result<(), SnapshotError> {
    let json = Snapshot::capture(board).to_json()?;
    fs::write(path, json).map_err(|error| SnapshotError::IOError { error })
}

pub fn load(path: &Path) -> Result<Board, SnapshotError> {
    let json = fs::read_to_string(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => SnapshotError::NotFound {
            path: path.display().to_string(),
        },
        _ => SnapshotError::IOError { error },
    })?;
    Snapshot::from_json(&json)?.restore()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_position;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("chess_rules_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_save_and_load_reproduce_the_position() {
        let mut board = chess_position! {
            r...k..r
            ppp..ppp
            ..n.....
            ...Pp...
            ....P...
            ..N..Q..
            PP...PPP
            R...K..R
        };
        board.set_turn(Color::Black);
        let path = temp_path("roundtrip");

        save(&board, &path).unwrap();
        let loaded = load(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, board);
        assert_eq!(loaded.turn(), Color::Black);
        assert_eq!(
            loaded.roster_squares(Color::White),
            board.roster_squares(Color::White)
        );
        assert_eq!(
            loaded.roster_squares(Color::Black),
            board.roster_squares(Color::Black)
        );
        assert!(loaded.is_consistent());
    }

    #[test]
    fn test_json_shape() {
        let board = chess_position! {
            ....k...
            ........
            ........
            ........
            ........
            ........
            ........
            ...QK...
        };
        let json = Snapshot::capture(&board).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["white_to_move"], true);
        assert_eq!(value["pieces"][0]["kind"], "King");
        assert_eq!(value["pieces"][0]["white"], false);
        assert_eq!(value["pieces"][1]["kind"], "Queen");
        assert_eq!(value["pieces"][1]["row"], 7);
        assert_eq!(value["pieces"][1]["col"], 3);
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("does_not_exist");
        assert!(matches!(load(&path), Err(SnapshotError::NotFound { .. })));
    }

    #[test]
    fn test_malformed_snapshots() {
        assert!(matches!(
            Snapshot::from_json("{ not json"),
            Err(SnapshotError::Json { .. })
        ));

        let off_board = Snapshot {
            white_to_move: true,
            pieces: vec![SavedPiece {
                kind: Piece::King,
                white: true,
                row: 8,
                col: 0,
            }],
        };
        assert!(matches!(
            off_board.restore(),
            Err(SnapshotError::InvalidSquare { row: 8, col: 0 })
        ));

        let stacked = Snapshot {
            white_to_move: true,
            pieces: vec![
                SavedPiece {
                    kind: Piece::King,
                    white: true,
                    row: 7,
                    col: 4,
                },
                SavedPiece {
                    kind: Piece::Queen,
                    white: false,
                    row: 7,
                    col: 4,
                },
            ],
        };
        assert!(matches!(
            stacked.restore(),
            Err(SnapshotError::ErrorPlacingPiece { .. })
        ));
    }

    #[test]
    fn test_two_kings_of_one_side_are_rejected() {
        let king = |white, row, col| SavedPiece {
            kind: Piece::King,
            white,
            row,
            col,
        };
        let snapshot = Snapshot {
            white_to_move: true,
            pieces: vec![king(false, 0, 4), king(true, 7, 4), king(true, 7, 0)],
        };
        assert!(matches!(
            snapshot.restore(),
            Err(SnapshotError::ErrorPlacingPiece {
                board_error: BoardError::SecondKingBoardPutError {
                    color: Color::White,
                    ..
                }
            })
        ));
    }
}
