use log::{debug, info, warn};
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;

use crate::{
    board::{BoardState, FullGameState, WORKERS_PER_PLAYER},
    error::{SantoriniError, SantoriniResult},
    gods::StaticGod,
    heuristic::{Evaluator, HeuristicWeights, Score},
    movegen::{WorkerMove, generate_builds, generate_moves},
    placement::place_workers,
    player::Player,
    square::Square,
};

/// What a turn did to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub enum TurnAction {
    PlaceWorkers {
        workers: [Square; WORKERS_PER_PLAYER],
    },
    MoveAndBuild {
        worker_move: WorkerMove,
        builds: Vec<Square>,
        is_win: bool,
    },
}

impl std::fmt::Display for TurnAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnAction::PlaceWorkers { workers } => {
                write!(f, "place {} {}", workers[0], workers[1])
            }
            TurnAction::MoveAndBuild {
                worker_move,
                builds,
                is_win,
            } => {
                write!(f, "move {}", worker_move)?;
                for build in builds {
                    write!(f, " build {}", build)?;
                }
                if *is_win {
                    write!(f, " (win)")?;
                }
                Ok(())
            }
        }
    }
}

/// Highest scoring move. Ties go to the earliest candidate.
pub fn select_move(
    evaluator: &Evaluator,
    board: &mut BoardState,
    moves: &[WorkerMove],
) -> Option<(WorkerMove, Score)> {
    let mut best: Option<(WorkerMove, Score)> = None;

    for &action in moves {
        let score = evaluator.score_move(board, action);
        debug!("move {}: {}", action, score);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((action, score));
        }
    }

    best
}

/// Picks the builds for a worker on `standing`, best first. A second build is only
/// taken by gods allowed one, and only when it doesn't score below zero.
pub fn select_builds(
    evaluator: &Evaluator,
    board: &mut BoardState,
    standing: Square,
    god: StaticGod,
    rng: &mut impl Rng,
) -> Vec<Square> {
    let mut candidates = generate_builds(board, standing, god);
    candidates.shuffle(rng);

    let mut best: Option<(Square, Score)> = None;
    let mut second: Option<(Square, Score)> = None;

    for build in candidates {
        let score = evaluator.score_build(board, build, standing);
        debug!("build {} from {}: {}", build, standing, score);

        match best {
            Some((_, best_score)) if score <= best_score => {
                if second.is_none_or(|(_, second_score)| score > second_score) {
                    second = Some((build, score));
                }
            }
            _ => {
                second = best;
                best = Some((build, score));
            }
        }
    }

    let mut result = Vec::with_capacity(god.max_builds);
    if let Some((build, _)) = best {
        result.push(build);
    }
    if let Some((build, _)) = second.filter(|&(_, score)| god.max_builds >= 2 && score >= 0) {
        result.push(build);
    }

    result
}

fn play_move_phase(
    state: &FullGameState,
    board: &mut BoardState,
    player: Player,
    weights: HeuristicWeights,
    rng: &mut impl Rng,
) -> SantoriniResult<TurnAction> {
    let god = state.get_god_for_player(player);
    let evaluator = Evaluator::new(state, player, weights);
    debug!("opponent field:\n{}", evaluator.field());

    let mut moves = generate_moves(board, player, god);
    moves.shuffle(rng);

    let Some((worker_move, score)) = select_move(&evaluator, board, &moves) else {
        warn!("player {:?} ({}) has no legal moves", player, god);
        return Err(SantoriniError::NoLegalMoves(player));
    };
    info!("player {:?} moves {} scoring {}", player, worker_move, score);

    let is_win = Evaluator::is_winning_move(board, worker_move);
    board.move_worker(worker_move.from, worker_move.to);

    let builds = select_builds(&evaluator, board, worker_move.to, god, rng);
    if builds.is_empty() && !is_win {
        warn!(
            "player {:?} has nowhere to build from {}",
            player, worker_move.to
        );
        return Err(SantoriniError::NoLegalBuilds(player, worker_move.to));
    }

    for &build in &builds {
        board.build(build);
    }

    Ok(TurnAction::MoveAndBuild {
        worker_move,
        builds,
        is_win,
    })
}

/// Plays one turn for `player`. The state is only updated when a full action was found,
/// on error it is left as it was.
pub fn take_turn(
    state: &mut FullGameState,
    player: Player,
    is_placement: bool,
    weights: HeuristicWeights,
    rng: &mut impl Rng,
) -> SantoriniResult<TurnAction> {
    state
        .validation_err(player, is_placement)
        .map_err(SantoriniError::InvalidState)?;

    let mut board = state.board;
    let action = if is_placement {
        let workers = place_workers(&mut board, player, rng)?;
        TurnAction::PlaceWorkers { workers }
    } else {
        play_move_phase(state, &mut board, player, weights, rng)?
    };

    info!("player {:?}: {}", player, action);
    state.board = board;
    Ok(action)
}
