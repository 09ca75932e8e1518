use chrono::Utc;
use rand::{
    Rng, SeedableRng,
    rngs::StdRng,
    seq::{IndexedRandom, IteratorRandom},
};
use strum::IntoEnumIterator;

use crate::{
    board::FullGameState,
    gods::GodName,
    movegen::{generate_builds, generate_moves},
    player::Player,
    square::Square,
};

/// Seed for one invocation, taken from the wall clock.
pub fn seed_from_time() -> u64 {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn get_board_with_random_placements(rng: &mut impl Rng) -> FullGameState {
    let p1_god = GodName::iter().choose(rng).unwrap_or(GodName::Zeus);
    let p2_god = GodName::iter().choose(rng).unwrap_or(GodName::Zeus);
    let mut result = FullGameState::new_empty_state(p1_god, p2_god);
    let worker_spots: Vec<Square> = Square::ALL.into_iter().choose_multiple(rng, 4);

    result.board.place_worker(worker_spots[0], Player::One);
    result.board.place_worker(worker_spots[1], Player::One);
    result.board.place_worker(worker_spots[2], Player::Two);
    result.board.place_worker(worker_spots[3], Player::Two);

    result
}

/// Plays a uniformly random move and build for `player`, or `None` once the game is over.
pub fn get_random_turn(
    state: &FullGameState,
    player: Player,
    rng: &mut impl Rng,
) -> Option<FullGameState> {
    if state.board.get_winner().is_some() {
        return None;
    }

    let god = state.get_god_for_player(player);
    let action = *generate_moves(&state.board, player, god).choose(rng)?;

    let mut result = state.clone();
    result.board.move_worker(action.from, action.to);
    let build = *generate_builds(&result.board, action.to, god).choose(rng)?;
    result.board.build(build);

    Some(result)
}

pub struct RandomSingleGameStateGenerator {
    current_state: Option<FullGameState>,
    current_player: Player,
}

impl RandomSingleGameStateGenerator {
    pub fn new(initial_state: FullGameState) -> Self {
        RandomSingleGameStateGenerator {
            current_state: Some(initial_state),
            current_player: Player::One,
        }
    }

    fn next_with_rng(&mut self, rng: &mut impl Rng) -> Option<FullGameState> {
        let result = self.current_state.take()?;
        self.current_state = get_random_turn(&result, self.current_player, rng);
        self.current_player = !self.current_player;
        Some(result)
    }
}

/// Endless supply of positions reached by random play, restarting whenever a game ends.
pub struct GameStateFuzzer {
    rng: StdRng,
    current_generator: RandomSingleGameStateGenerator,
    remaining_states: usize,
}

impl GameStateFuzzer {
    pub fn new(num_states: usize, seed: u64) -> Self {
        let mut rng = seeded_rng(seed);
        let current_generator =
            RandomSingleGameStateGenerator::new(get_board_with_random_placements(&mut rng));
        GameStateFuzzer {
            rng,
            current_generator,
            remaining_states: num_states,
        }
    }
}

impl Iterator for GameStateFuzzer {
    type Item = FullGameState;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining_states == 0 {
            return None;
        }
        self.remaining_states -= 1;

        loop {
            match self.current_generator.next_with_rng(&mut self.rng) {
                None => {
                    self.current_generator = RandomSingleGameStateGenerator::new(
                        get_board_with_random_placements(&mut self.rng),
                    )
                }
                Some(result) => return Some(result),
            }
        }
    }
}
