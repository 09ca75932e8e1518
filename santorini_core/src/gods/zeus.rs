use crate::{
    board::{BoardState, WINNING_HEIGHT},
    gods::{GodName, GodPower, god_power},
    heuristic::{HeuristicWeights, Score},
    rules::can_build,
    square::Square,
};

/// Zeus may raise the tower under its own worker, as long as that doesn't lift it onto the winning level.
fn zeus_can_build_on_self(board: &BoardState, standing: Square) -> bool {
    board.get_height(standing) + 1 < WINNING_HEIGHT
}

fn zeus_extend_builds(board: &BoardState, standing: Square, builds: &mut Vec<Square>) {
    if can_build(board, Some(standing), standing, GodName::Zeus.to_power()) {
        builds.push(standing);
    }
}

fn zeus_build_bonus(weights: &HeuristicWeights, build: Square, standing: Square) -> Score {
    if build == standing {
        weights.build_height
    } else {
        0
    }
}

pub const fn build_zeus() -> GodPower {
    god_power(GodName::Zeus).with_build_on_self(
        zeus_can_build_on_self,
        zeus_extend_builds,
        zeus_build_bonus,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::parse_board, movegen::generate_builds};

    #[test]
    fn test_zeus_builds_include_self() {
        let board = parse_board(
            "1,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
            "0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
        )
        .unwrap();

        let builds = generate_builds(&board, Square::A5, GodName::Zeus.to_power());
        assert_eq!(builds, vec![Square::B5, Square::A4, Square::B4, Square::A5]);

        let builds = generate_builds(&board, Square::A5, GodName::Demeter.to_power());
        assert_eq!(builds, vec![Square::B5, Square::A4, Square::B4]);
    }

    #[test]
    fn test_zeus_no_self_build_on_level_2() {
        let board = parse_board(
            "1,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
            "2,4,0,0,0\n4,4,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n0,0,0,0,0\n",
        )
        .unwrap();

        let builds = generate_builds(&board, Square::A5, GodName::Zeus.to_power());
        assert!(builds.is_empty());
    }

    #[test]
    fn test_zeus_bonus_only_for_self_build() {
        let weights = HeuristicWeights::default();
        let zeus = GodName::Zeus.to_power();
        assert_eq!(
            zeus.build_bonus(&weights, Square::C3, Square::C3),
            weights.build_height
        );
        assert_eq!(zeus.build_bonus(&weights, Square::C4, Square::C3), 0);
        assert_eq!(
            GodName::Demeter
                .to_power()
                .build_bonus(&weights, Square::C3, Square::C3),
            0
        );
    }
}
