use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::board::BOARD_WIDTH;

/// One of the 25 cells. Discriminant is `col + 5 * row`, row 0 is the top row of the grid files.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumIter)]
#[rustfmt::skip]
pub enum Square {
    A5, B5, C5, D5, E5,
    A4, B4, C4, D4, E4,
    A3, B3, C3, D3, E3,
    A2, B2, C2, D2, E2,
    A1, B1, C1, D1, E1,
}
use Square::*;

impl Square {
    pub const COUNT: usize = 25;

    #[rustfmt::skip]
    pub const ALL: [Self; Self::COUNT] = [
        A5, B5, C5, D5, E5,
        A4, B4, C4, D4, E4,
        A3, B3, C3, D3, E3,
        A2, B2, C2, D2, E2,
        A1, B1, C1, D1, E1,
    ];

    #[rustfmt::skip]
    const STR: [&str; Self::COUNT] = [
        "A5", "B5", "C5", "D5", "E5",
        "A4", "B4", "C4", "D4", "E4",
        "A3", "B3", "C3", "D3", "E3",
        "A2", "B2", "C2", "D2", "E2",
        "A1", "B1", "C1", "D1", "E1",
    ];

    pub const fn from_row_col(row: usize, col: usize) -> Square {
        Self::ALL[col + BOARD_WIDTH * row]
    }

    pub const fn row(self) -> usize {
        self as usize / BOARD_WIDTH
    }

    pub const fn col(self) -> usize {
        self as usize % BOARD_WIDTH
    }

    pub const fn is_perimeter(self) -> bool {
        let (row, col) = (self.row(), self.col());
        row == 0 || col == 0 || row == BOARD_WIDTH - 1 || col == BOARD_WIDTH - 1
    }

    /// Chebyshev distance, the number of king steps between two cells.
    pub fn distance(self, other: Square) -> usize {
        self.row()
            .abs_diff(other.row())
            .max(self.col().abs_diff(other.col()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::STR[*self as usize])
    }
}

impl FromStr for Square {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(pos) = s.parse::<usize>() {
            if pos < Self::COUNT {
                return Ok(Square::from(pos));
            }
        }

        if s.len() != 2 {
            return Err("Invalid square!");
        };

        let index = Self::STR
            .iter()
            .position(|&tgt| tgt.eq_ignore_ascii_case(s))
            .ok_or("Invalid square!")?;

        Ok(Square::from(index))
    }
}

impl From<usize> for Square {
    fn from(index: usize) -> Self {
        Self::ALL[index]
    }
}

impl From<u8> for Square {
    fn from(index: u8) -> Self {
        Self::ALL[index as usize]
    }
}

impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Square::from_str(&s).map_err(serde::de::Error::custom)
    }
}
