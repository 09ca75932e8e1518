use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    board::BoardState,
    heuristic::{HeuristicWeights, Score},
    movegen::WorkerMove,
    square::Square,
};

pub mod demeter;
pub mod triton;
pub mod zeus;

pub type StaticGod = &'static GodPower;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Display,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum GodName {
    #[strum(to_string = "zeus", serialize = "z")]
    Zeus = 0,
    #[strum(to_string = "demeter", serialize = "d")]
    Demeter = 1,
    #[strum(to_string = "triton", serialize = "t")]
    Triton = 2,
}

impl GodName {
    pub fn to_power(&self) -> StaticGod {
        &ALL_GODS_BY_ID[*self as usize]
    }
}

/// Appends extra move candidates for the worker standing on the given square.
pub type ExtendMovesFn = fn(board: &BoardState, worker: Square, moves: &mut Vec<WorkerMove>);
/// Appends extra build candidates for a worker standing on the given square.
pub type ExtendBuildsFn = fn(board: &BoardState, standing: Square, builds: &mut Vec<Square>);
pub type CanBuildOnSelfFn = fn(board: &BoardState, standing: Square) -> bool;
pub type BuildBonusFn = fn(weights: &HeuristicWeights, build: Square, standing: Square) -> Score;

/// Rule and scoring hooks for one god. Gods only override the hooks their power touches.
pub struct GodPower {
    pub god_name: GodName,
    /// Builds a turn may perform, counting the mandatory one.
    pub max_builds: usize,

    _extend_moves: ExtendMovesFn,
    _extend_builds: ExtendBuildsFn,
    _can_build_on_self: CanBuildOnSelfFn,
    _build_bonus: BuildBonusFn,
}

fn no_extra_moves(_board: &BoardState, _worker: Square, _moves: &mut Vec<WorkerMove>) {}

fn no_extra_builds(_board: &BoardState, _standing: Square, _builds: &mut Vec<Square>) {}

fn never_build_on_self(_board: &BoardState, _standing: Square) -> bool {
    false
}

fn no_build_bonus(_weights: &HeuristicWeights, _build: Square, _standing: Square) -> Score {
    0
}

const fn god_power(name: GodName) -> GodPower {
    GodPower {
        god_name: name,
        max_builds: 1,
        _extend_moves: no_extra_moves,
        _extend_builds: no_extra_builds,
        _can_build_on_self: never_build_on_self,
        _build_bonus: no_build_bonus,
    }
}

impl GodPower {
    pub const fn with_max_builds(mut self, max_builds: usize) -> Self {
        self.max_builds = max_builds;
        self
    }

    pub const fn with_move_extension(mut self, extend_moves: ExtendMovesFn) -> Self {
        self._extend_moves = extend_moves;
        self
    }

    pub const fn with_build_on_self(
        mut self,
        can_build_on_self: CanBuildOnSelfFn,
        extend_builds: ExtendBuildsFn,
        build_bonus: BuildBonusFn,
    ) -> Self {
        self._can_build_on_self = can_build_on_self;
        self._extend_builds = extend_builds;
        self._build_bonus = build_bonus;
        self
    }

    pub fn extend_moves(&self, board: &BoardState, worker: Square, moves: &mut Vec<WorkerMove>) {
        (self._extend_moves)(board, worker, moves)
    }

    pub fn extend_builds(&self, board: &BoardState, standing: Square, builds: &mut Vec<Square>) {
        (self._extend_builds)(board, standing, builds)
    }

    pub fn can_build_on_self(&self, board: &BoardState, standing: Square) -> bool {
        (self._can_build_on_self)(board, standing)
    }

    pub fn build_bonus(&self, weights: &HeuristicWeights, build: Square, standing: Square) -> Score {
        (self._build_bonus)(weights, build, standing)
    }
}

impl std::fmt::Debug for GodPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GodPower({:?})", self.god_name)
    }
}

impl PartialEq for GodPower {
    fn eq(&self, other: &Self) -> bool {
        self.god_name == other.god_name
    }
}

impl Eq for GodPower {}

impl std::fmt::Display for GodPower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.god_name)
    }
}

pub static ALL_GODS_BY_ID: [GodPower; 3] = [
    zeus::build_zeus(),
    demeter::build_demeter(),
    triton::build_triton(),
];
