use std::path::PathBuf;

use thiserror::Error;

use crate::{player::Player, square::Square};

#[derive(Debug, Error)]
pub enum SantoriniError {
    #[error("grid must have exactly 5 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} must have exactly 5 entries, found {found}")]
    ColumnCount { row: usize, found: usize },

    #[error("invalid entry {entry:?} at row {row}, column {col}")]
    InvalidDigit { row: usize, col: usize, entry: String },

    #[error("value {value} at row {row}, column {col} is above the maximum of {max}")]
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        max: u8,
    },

    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid heuristic weights in {path:?}: {source}")]
    InvalidWeights {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid board state: {0}")]
    InvalidState(String),

    #[error("player {0:?} has no legal moves")]
    NoLegalMoves(Player),

    #[error("player {0:?} has no legal builds from {1}")]
    NoLegalBuilds(Player, Square),

    #[error("not enough empty squares to place workers")]
    NoPlacementSquares,
}

pub type SantoriniResult<T> = Result<T, SantoriniError>;
