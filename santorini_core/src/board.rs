use colored::Colorize;

use crate::{
    gods::{GodName, StaticGod},
    player::Player,
    square::Square,
};

pub const BOARD_WIDTH: usize = 5;
pub const NUM_SQUARES: usize = BOARD_WIDTH * BOARD_WIDTH;
pub const WORKERS_PER_PLAYER: usize = 2;

pub const DOME_HEIGHT: u8 = 4;
/// Stepping up onto this height wins the game.
pub const WINNING_HEIGHT: u8 = 3;

pub type GodPair = [StaticGod; 2];

/*
 * Both grids are indexed by Square:
 * 0  1  2  3  4
 * 5  6  7  8  9
 * 10 11 12 13 14
 * 15 16 17 18 19
 * 20 21 22 23 24
 */
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub struct BoardState {
    pub occupancy: [Option<Player>; NUM_SQUARES],
    pub heights: [u8; NUM_SQUARES],
}

impl BoardState {
    pub fn get_height(&self, square: Square) -> u8 {
        self.heights[square as usize]
    }

    pub fn get_worker(&self, square: Square) -> Option<Player> {
        self.occupancy[square as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get_worker(square).is_some()
    }

    /// Worker squares in row-major order.
    pub fn get_positions_for_player(&self, player: Player) -> Vec<Square> {
        Square::ALL
            .into_iter()
            .filter(|&square| self.get_worker(square) == Some(player))
            .collect()
    }

    /// The player with a worker standing on the winning level, if any.
    pub fn get_winner(&self) -> Option<Player> {
        Square::ALL
            .into_iter()
            .filter(|&square| self.get_height(square) == WINNING_HEIGHT)
            .find_map(|square| self.get_worker(square))
    }

    pub fn place_worker(&mut self, square: Square, player: Player) {
        debug_assert!(!self.is_occupied(square), "{square} is occupied");
        self.occupancy[square as usize] = Some(player);
    }

    /// Moves whatever stands on `from` to `to`.
    pub fn move_worker(&mut self, from: Square, to: Square) {
        debug_assert!(self.is_occupied(from), "no worker on {from}");
        debug_assert!(from == to || !self.is_occupied(to), "{to} is occupied");
        let worker = self.occupancy[from as usize].take();
        self.occupancy[to as usize] = worker;
    }

    pub fn build(&mut self, square: Square) {
        debug_assert!(self.get_height(square) < DOME_HEIGHT, "{square} is domed");
        self.heights[square as usize] += 1;
    }

    pub(crate) fn unbuild(&mut self, square: Square) {
        debug_assert!(self.get_height(square) > 0, "{square} has nothing to remove");
        self.heights[square as usize] -= 1;
    }

    pub fn print_to_console(&self) {
        for row in 0..BOARD_WIDTH {
            let mut row_str = format!("{} ", row);
            for col in 0..BOARD_WIDTH {
                let square = Square::from_row_col(row, col);

                let char = match self.get_worker(square) {
                    Some(Player::One) => "X",
                    Some(Player::Two) => "0",
                    None => " ",
                }
                .black();

                let elem = match self.get_height(square) {
                    0 => char.on_white(),
                    1 => char.on_yellow(),
                    2 => char.on_blue(),
                    3 => char.on_green(),
                    _ => char.on_black(),
                };
                row_str = format!("{row_str}{elem}");
            }
            eprintln!("{}", row_str);
        }
        eprintln!("  01234");
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct FullGameState {
    pub board: BoardState,
    pub gods: GodPair,
}

impl std::fmt::Debug for FullGameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullGameState")
            .field("board", &self.board)
            .field("p1_god", &self.gods[0].god_name)
            .field("p2_god", &self.gods[1].god_name)
            .finish()
    }
}

impl FullGameState {
    pub fn new(board: BoardState, p1_god: GodName, p2_god: GodName) -> Self {
        FullGameState {
            board,
            gods: [p1_god.to_power(), p2_god.to_power()],
        }
    }

    pub fn new_empty_state(p1_god: GodName, p2_god: GodName) -> Self {
        Self::new(BoardState::default(), p1_god, p2_god)
    }

    pub fn get_god_for_player(&self, player: Player) -> StaticGod {
        self.gods[player as usize]
    }

    /// Worker counts a turn can start from. Placement needs the acting player to have no workers
    /// and the opponent to have none or a full set. Otherwise nobody may have more than a full set
    /// and the acting player needs at least one worker.
    pub fn validation_err(&self, player: Player, is_placement: bool) -> Result<(), String> {
        let own = self.board.get_positions_for_player(player).len();
        let other = self.board.get_positions_for_player(!player).len();

        if is_placement {
            if own != 0 {
                return Err(format!(
                    "Player {:?} already has {} workers placed",
                    player, own
                ));
            }
            if other != 0 && other != WORKERS_PER_PLAYER {
                return Err(format!(
                    "Player {:?} has {} workers, expected 0 or {}",
                    !player, other, WORKERS_PER_PLAYER
                ));
            }
            return Ok(());
        }

        if own == 0 {
            return Err(format!("Player {:?} has no workers on the board", player));
        }
        for (p, count) in [(player, own), (!player, other)] {
            if count > WORKERS_PER_PLAYER {
                return Err(format!(
                    "Player {:?} has {} workers, expected at most {}",
                    p, count, WORKERS_PER_PLAYER
                ));
            }
        }

        Ok(())
    }
}
