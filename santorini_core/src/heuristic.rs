use std::{fs, path::Path};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    board::{BoardState, FullGameState, WINNING_HEIGHT},
    error::{SantoriniError, SantoriniResult},
    field::OpponentField,
    gods::StaticGod,
    movegen::{WorkerMove, can_player_reach, generate_builds},
    player::Player,
    simulate::{SimulatedBuild, SimulatedMove},
    square::Square,
};

pub type Score = i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Added for stepping up onto a winning tower. Must dwarf every other term.
    pub win: Score,
    /// Penalty for handing the opponent a level 3, and bonus for doming one they can reach.
    pub must_build: Score,
    pub move_up: Score,
    pub move_field: Score,
    pub build_height: Score,
    pub build_field: Score,
    /// Penalty for a move that leaves nowhere to build.
    pub no_build: Score,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            win: 1_000_000,
            must_build: 100,
            move_up: 7,
            move_field: 0,
            build_height: 5,
            build_field: 2,
            no_build: 1_000,
        }
    }
}

impl HeuristicWeights {
    pub fn from_yaml(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn load(path: &Path) -> SantoriniResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SantoriniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| SantoriniError::InvalidWeights {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Scores candidate moves and builds for one player's turn.
/// The opponent field is fixed when the evaluator is created.
#[derive(Debug)]
pub struct Evaluator {
    player: Player,
    god: StaticGod,
    opponent_god: StaticGod,
    field: OpponentField,
    weights: HeuristicWeights,
}

impl Evaluator {
    pub fn new(state: &FullGameState, player: Player, weights: HeuristicWeights) -> Self {
        Self {
            player,
            god: state.get_god_for_player(player),
            opponent_god: state.get_god_for_player(!player),
            field: OpponentField::compute(&state.board, !player),
            weights,
        }
    }

    pub fn field(&self) -> &OpponentField {
        &self.field
    }

    pub fn is_winning_move(board: &BoardState, action: WorkerMove) -> bool {
        board.get_height(action.to) == WINNING_HEIGHT
            && board.get_height(action.from) < WINNING_HEIGHT
    }

    /// Scores `action`, including the best build it leaves available.
    /// `board` is probed during scoring and handed back unchanged.
    pub fn score_move(&self, board: &mut BoardState, action: WorkerMove) -> Score {
        let from_height = board.get_height(action.from) as Score;
        let to_height = board.get_height(action.to) as Score;

        let mut score: Score = 0;
        if Self::is_winning_move(board, action) {
            score += self.weights.win;
        }
        if to_height < WINNING_HEIGHT as Score {
            score += to_height * self.weights.move_up;
        }
        score += self.field.get(action.to) as Score * self.weights.move_field;
        if to_height < from_height {
            score -= from_height - to_height;
        }

        score
            + self
                .best_build_after_move(board, action)
                .unwrap_or(-self.weights.no_build)
    }

    /// Best build score available after making `action`, or `None` if the worker would be boxed in.
    pub fn best_build_after_move(&self, board: &mut BoardState, action: WorkerMove) -> Option<Score> {
        let mut moved = SimulatedMove::new(board, action);
        let builds = generate_builds(&moved, action.to, self.god);

        let best = builds
            .into_iter()
            .map(|build| self.score_build(&mut moved, build, action.to))
            .max();
        best
    }

    /// Scores raising `build` by one level for a worker standing on `standing`.
    pub fn score_build(&self, board: &mut BoardState, build: Square, standing: Square) -> Score {
        let height = board.get_height(build);
        let mut score: Score = 0;

        // Never build above our own level, we couldn't climb it
        if height < WINNING_HEIGHT && height <= board.get_height(standing) {
            score += (height as Score + 1) * self.weights.build_height;
        }

        if height == WINNING_HEIGHT - 1 && self.opponent_reaches_after_build(board, build) {
            score -= self.weights.must_build;
        }

        if height == WINNING_HEIGHT && self.opponent_can_reach(board, build) {
            score += self.weights.must_build;
        }

        score += self.god.build_bonus(&self.weights, build, standing);
        score -= self.field.get(build) as Score * self.weights.build_field;

        trace!("build {} from {}: {}", build, standing, score);
        score
    }

    fn opponent_can_reach(&self, board: &BoardState, target: Square) -> bool {
        can_player_reach(board, !self.player, self.opponent_god, target)
    }

    fn opponent_reaches_after_build(&self, board: &mut BoardState, build: Square) -> bool {
        let built = SimulatedBuild::new(board, build);
        self.opponent_can_reach(&built, build)
    }
}
