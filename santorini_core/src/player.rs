use std::{ops::Not, str::FromStr};

use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Default for Player {
    fn default() -> Self {
        Player::One
    }
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl Player {
    /// Value written into the occupancy grid for this player's workers.
    pub const fn cell_value(self) -> u8 {
        self as u8 + 1
    }

    pub const fn from_cell_value(value: u8) -> Option<Player> {
        match value {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

impl FromStr for Player {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Player::from_cell_value)
            .ok_or_else(|| format!("Player must be either a 1 or 2. Found: {}", s))
    }
}
