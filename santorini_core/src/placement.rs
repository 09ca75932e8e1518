use rand::{Rng, seq::IndexedRandom};

use crate::{
    board::{BoardState, WORKERS_PER_PLAYER},
    direction::neighbors,
    error::{SantoriniError, SantoriniResult},
    player::Player,
    rules::can_place,
    square::Square,
};

/// First free square next to `anchor`, in neighbor order.
fn free_neighbor(board: &BoardState, anchor: Square) -> Option<Square> {
    neighbors(anchor).find(|&square| can_place(board, Some(square)))
}

fn random_free_square(board: &BoardState, rng: &mut impl Rng) -> Option<Square> {
    let free: Vec<Square> = Square::ALL
        .into_iter()
        .filter(|&square| can_place(board, Some(square)))
        .collect();
    free.choose(rng).copied()
}

/// Places both of `player`'s workers. Player Two shadows Player One's workers, each new worker
/// going next to one of theirs when there is room. Everything else is placed at random.
pub fn place_workers(
    board: &mut BoardState,
    player: Player,
    rng: &mut impl Rng,
) -> SantoriniResult<[Square; WORKERS_PER_PLAYER]> {
    let anchors = match player {
        Player::One => Vec::new(),
        Player::Two => board.get_positions_for_player(Player::One),
    };
    let mut placed = [Square::A5; WORKERS_PER_PLAYER];

    for (idx, slot) in placed.iter_mut().enumerate() {
        let square = anchors
            .get(idx)
            .and_then(|&anchor| free_neighbor(board, anchor))
            .or_else(|| random_free_square(board, rng))
            .ok_or(SantoriniError::NoPlacementSquares)?;

        board.place_worker(square, player);
        *slot = square;
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::parse_board, random_utils::seeded_rng};

    const FLAT: &str = "0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n";

    #[test]
    fn test_first_placement_is_random() {
        for seed in 0..20 {
            let mut board = BoardState::default();
            let placed = place_workers(&mut board, Player::One, &mut seeded_rng(seed)).unwrap();

            assert_ne!(placed[0], placed[1]);
            assert_eq!(board.get_positions_for_player(Player::One).len(), 2);
            assert!(board.heights.iter().all(|&h| h == 0));
        }
    }

    #[test]
    fn test_same_seed_same_placement() {
        let mut a = BoardState::default();
        let mut b = BoardState::default();
        place_workers(&mut a, Player::One, &mut seeded_rng(42)).unwrap();
        place_workers(&mut b, Player::One, &mut seeded_rng(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_second_player_shadows_opponent() {
        let mut board = parse_board(
            "1,0,0,0,0\n0,0,0,0,0\n0,0,1,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
            FLAT,
        )
        .unwrap();

        let placed = place_workers(&mut board, Player::Two, &mut seeded_rng(0)).unwrap();
        assert_eq!(placed, [Square::B5, Square::B4]);
    }

    #[test]
    fn test_shadow_falls_back_to_random() {
        // Every square around A5 is taken, B5 still has room at C5
        let mut board = parse_board(
            "1,1,0,0,0\n1,1,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
            FLAT,
        )
        .unwrap();

        let placed = place_workers(&mut board, Player::Two, &mut seeded_rng(5)).unwrap();
        assert!(!matches!(
            placed[0],
            Square::A5 | Square::B5 | Square::A4 | Square::B4
        ));
        let expected = if placed[0] == Square::C5 {
            Square::C4
        } else {
            Square::C5
        };
        assert_eq!(placed[1], expected);
    }

    #[test]
    fn test_first_player_ignores_opponent() {
        let mut placements = Vec::new();
        for seed in 0..20 {
            let mut board = parse_board(
                "0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n2,0,0,0,2\n",
                FLAT,
            )
            .unwrap();
            let placed = place_workers(&mut board, Player::One, &mut seeded_rng(seed)).unwrap();
            assert!(placed.iter().all(|&s| !matches!(s, Square::A1 | Square::E1)));
            placements.push(placed);
        }

        placements.sort();
        placements.dedup();
        assert!(placements.len() > 1, "{placements:?}");
    }

    #[test]
    fn test_full_board() {
        let mut board = BoardState {
            occupancy: [Some(Player::One); 25],
            ..Default::default()
        };
        board.occupancy[Square::C3 as usize] = None;
        assert!(matches!(
            place_workers(&mut board, Player::Two, &mut seeded_rng(1)),
            Err(SantoriniError::NoPlacementSquares)
        ));
    }
}
