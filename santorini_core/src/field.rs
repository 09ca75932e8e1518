use itertools::Itertools;

use crate::{
    board::{BOARD_WIDTH, BoardState, NUM_SQUARES},
    player::Player,
    square::Square,
};

/// How strongly the opponent's workers press on each square: 2 next to a worker,
/// 1 two steps away, 0 beyond that.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct OpponentField {
    values: [u8; NUM_SQUARES],
}

fn influence_at_distance(distance: usize) -> u8 {
    match distance {
        0..=1 => 2,
        2 => 1,
        _ => 0,
    }
}

impl OpponentField {
    pub fn compute(board: &BoardState, opponent: Player) -> Self {
        let opponent_workers = board.get_positions_for_player(opponent);

        let mut values = [0; NUM_SQUARES];
        for square in Square::ALL {
            values[square as usize] = opponent_workers
                .iter()
                .map(|&worker| influence_at_distance(worker.distance(square)))
                .max()
                .unwrap_or(0);
        }

        Self { values }
    }

    pub fn get(&self, square: Square) -> u8 {
        self.values[square as usize]
    }
}

impl std::fmt::Display for OpponentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.values.chunks(BOARD_WIDTH) {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::parse_board;

    const FLAT: &str = "0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n";

    #[test]
    fn test_field_values() {
        let board = parse_board(
            "2,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,1,0\n0,0,0,0,2\n",
            FLAT,
        )
        .unwrap();

        let field = OpponentField::compute(&board, Player::Two);
        assert_eq!(
            field.to_string(),
            "2 2 1 0 0\n2 2 1 0 0\n1 1 1 1 1\n0 0 1 2 2\n0 0 1 2 2\n"
        );
    }

    #[test]
    fn test_field_without_opponent_is_zero() {
        let board = parse_board(FLAT, FLAT).unwrap();
        let field = OpponentField::compute(&board, Player::One);
        assert!(Square::ALL.iter().all(|&s| field.get(s) == 0));
    }

    proptest::proptest! {
        #[test]
        fn test_field_follows_nearest_worker(a in 0usize..25, b in 0usize..25) {
            proptest::prop_assume!(a != b);
            let (a, b) = (Square::from(a), Square::from(b));
            let mut board = BoardState::default();
            board.place_worker(a, Player::Two);
            board.place_worker(b, Player::Two);

            let field = OpponentField::compute(&board, Player::Two);
            for square in Square::ALL {
                let nearest = a.distance(square).min(b.distance(square));
                let expected = if nearest <= 1 { 2 } else if nearest <= 2 { 1 } else { 0 };
                proptest::prop_assert_eq!(field.get(square), expected);
            }
        }
    }
}
