use serde::{Deserialize, Serialize};

use crate::{
    board::BoardState,
    direction::neighbors,
    gods::StaticGod,
    player::Player,
    rules::{can_build, can_move},
    square::Square,
};

pub const MAX_MOVE_CANDIDATES: usize = 50;
pub const MAX_BUILD_CANDIDATES: usize = 9;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct WorkerMove {
    pub from: Square,
    pub to: Square,
}

impl WorkerMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for WorkerMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}>{}", self.from, self.to)
    }
}

/// Every legal move for `player`'s workers, worker by worker in neighbor order,
/// each worker's god extensions following its plain steps.
pub fn generate_moves(board: &BoardState, player: Player, god: StaticGod) -> Vec<WorkerMove> {
    let mut result = Vec::with_capacity(16);

    for worker in board.get_positions_for_player(player) {
        for to in neighbors(worker) {
            if can_move(board, worker, Some(to)) {
                result.push(WorkerMove::new(worker, to));
            }
        }

        god.extend_moves(board, worker, &mut result);
    }

    debug_assert!(
        result.len() <= MAX_MOVE_CANDIDATES,
        "{} move candidates",
        result.len()
    );
    result
}

pub fn generate_builds(board: &BoardState, standing: Square, god: StaticGod) -> Vec<Square> {
    let mut result: Vec<Square> = neighbors(standing)
        .filter(|&pos| can_build(board, Some(pos), standing, god))
        .collect();

    god.extend_builds(board, standing, &mut result);

    debug_assert!(
        result.len() <= MAX_BUILD_CANDIDATES,
        "{} build candidates",
        result.len()
    );
    result
}

/// Can any of `player`'s moves end on `target`.
pub fn can_player_reach(board: &BoardState, player: Player, god: StaticGod, target: Square) -> bool {
    generate_moves(board, player, god)
        .iter()
        .any(|action| action.to == target)
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{gods::GodName, grid::parse_board};

    #[test]
    fn test_basic_moves() {
        let board = parse_board(
            "1,0,0,0,0\n0,0,0,0,0\n0,0,1,0,0\n0,0,0,0,0\n0,0,0,0,2\n",
            "0,1,0,0,0\n2,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
        )
        .unwrap();

        let moves = generate_moves(&board, Player::One, GodName::Zeus.to_power());
        let expected_first: Vec<WorkerMove> = vec![
            WorkerMove::new(Square::A5, Square::B5),
            WorkerMove::new(Square::A5, Square::B4),
        ];
        assert_eq!(moves[..2], expected_first[..]);
        assert_eq!(moves.len(), 2 + 8);
        assert!(moves[2..].iter().all(|m| m.from == Square::C3));
    }

    #[test]
    fn test_self_is_never_a_destination() {
        let board = parse_board(
            "0,0,0,0,0\n0,1,0,0,0\n0,0,0,0,0\n0,0,0,1,0\n0,0,0,0,0\n",
            "0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
        )
        .unwrap();

        for god in GodName::iter() {
            let moves = generate_moves(&board, Player::One, god.to_power());
            assert!(moves.iter().all(|m| m.from != m.to), "{god}");
        }
    }

    #[test]
    fn test_build_candidates() {
        let board = parse_board(
            "0,0,0,0,0\n0,0,2,0,0\n0,0,1,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
            "0,0,0,0,0\n0,4,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
        )
        .unwrap();

        let builds = generate_builds(&board, Square::C3, GodName::Demeter.to_power());
        assert_eq!(
            builds,
            vec![
                Square::D4,
                Square::B3,
                Square::D3,
                Square::B2,
                Square::C2,
                Square::D2,
            ]
        );

        let builds = generate_builds(&board, Square::C3, GodName::Zeus.to_power());
        assert_eq!(builds.len(), 7);
        assert_eq!(builds.last(), Some(&Square::C3));
    }

    #[test]
    fn test_can_player_reach() {
        let board = parse_board(
            "0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n2,0,0,0,2\n",
            "0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n2,0,0,0,0\n0,3,0,0,0\n",
        )
        .unwrap();
        let zeus = GodName::Zeus.to_power();

        assert!(can_player_reach(&board, Player::Two, zeus, Square::E2));
        assert!(!can_player_reach(&board, Player::Two, zeus, Square::A2));
        assert!(!can_player_reach(&board, Player::Two, zeus, Square::B1));
        assert!(!can_player_reach(&board, Player::Two, zeus, Square::C3));
    }
}
