//! Flat-file board format: five lines of five comma separated digits.
//!
//! The occupancy grid uses 0 for empty and the player's cell value for workers,
//! the structure grid holds tower heights from 0 to 4.

use std::{fs, path::Path};

use itertools::Itertools;

use crate::{
    board::{BOARD_WIDTH, BoardState, DOME_HEIGHT, NUM_SQUARES},
    error::{SantoriniError, SantoriniResult},
    player::Player,
    square::Square,
};

pub type Grid = [u8; NUM_SQUARES];

const MAX_OCCUPANCY_VALUE: u8 = 2;

pub fn parse_grid(s: &str, max_value: u8) -> SantoriniResult<Grid> {
    let rows: Vec<&str> = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if rows.len() != BOARD_WIDTH {
        return Err(SantoriniError::RowCount(rows.len()));
    }

    let mut result: Grid = [0; NUM_SQUARES];
    for (row, line) in rows.iter().enumerate() {
        let entries: Vec<&str> = line.split(',').map(str::trim).collect();
        if entries.len() != BOARD_WIDTH {
            return Err(SantoriniError::ColumnCount {
                row,
                found: entries.len(),
            });
        }

        for (col, entry) in entries.iter().enumerate() {
            let value = match entry.as_bytes() {
                [digit @ b'0'..=b'9'] => digit - b'0',
                _ => {
                    return Err(SantoriniError::InvalidDigit {
                        row,
                        col,
                        entry: entry.to_string(),
                    });
                }
            };
            if value > max_value {
                return Err(SantoriniError::ValueOutOfRange {
                    row,
                    col,
                    value,
                    max: max_value,
                });
            }
            result[Square::from_row_col(row, col) as usize] = value;
        }
    }

    Ok(result)
}

pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(NUM_SQUARES * 2);
    for row in grid.chunks(BOARD_WIDTH) {
        result += &row.iter().join(",");
        result += "\n";
    }
    result
}

pub fn parse_board(occupancy: &str, structure: &str) -> SantoriniResult<BoardState> {
    let occupancy = parse_grid(occupancy, MAX_OCCUPANCY_VALUE)?;
    let heights = parse_grid(structure, DOME_HEIGHT)?;

    let mut board = BoardState {
        heights,
        ..Default::default()
    };
    for (idx, value) in occupancy.into_iter().enumerate() {
        board.occupancy[idx] = Player::from_cell_value(value);
    }

    Ok(board)
}

/// Returns the (occupancy, structure) file contents for `board`.
pub fn board_to_grids(board: &BoardState) -> (String, String) {
    let mut occupancy: Grid = [0; NUM_SQUARES];
    for (idx, worker) in board.occupancy.iter().enumerate() {
        occupancy[idx] = worker.map_or(0, Player::cell_value);
    }

    (grid_to_string(&occupancy), grid_to_string(&board.heights))
}

fn read_file(path: &Path) -> SantoriniResult<String> {
    fs::read_to_string(path).map_err(|source| SantoriniError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> SantoriniResult<()> {
    fs::write(path, contents).map_err(|source| SantoriniError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_board(occupancy_path: &Path, structure_path: &Path) -> SantoriniResult<BoardState> {
    let occupancy = read_file(occupancy_path)?;
    let structure = read_file(structure_path)?;
    parse_board(&occupancy, &structure)
}

pub fn write_board(
    board: &BoardState,
    occupancy_path: &Path,
    structure_path: &Path,
) -> SantoriniResult<()> {
    let (occupancy, structure) = board_to_grids(board);
    write_file(occupancy_path, &occupancy)?;
    write_file(structure_path, &structure)
}
