//! Scoped probes of hypothetical boards. Each guard applies its change on creation and
//! reverts it when dropped, so a probe can't outlive the scope that made it.

use std::ops::{Deref, DerefMut};

use crate::{board::BoardState, movegen::WorkerMove, square::Square};

pub struct SimulatedMove<'a> {
    board: &'a mut BoardState,
    action: WorkerMove,
}

impl<'a> SimulatedMove<'a> {
    pub fn new(board: &'a mut BoardState, action: WorkerMove) -> Self {
        board.move_worker(action.from, action.to);
        Self { board, action }
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        self.board
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.move_worker(self.action.to, self.action.from);
    }
}

pub struct SimulatedBuild<'a> {
    board: &'a mut BoardState,
    square: Square,
}

impl<'a> SimulatedBuild<'a> {
    pub fn new(board: &'a mut BoardState, square: Square) -> Self {
        board.build(square);
        Self { board, square }
    }
}

impl Deref for SimulatedBuild<'_> {
    type Target = BoardState;

    fn deref(&self) -> &BoardState {
        self.board
    }
}

impl DerefMut for SimulatedBuild<'_> {
    fn deref_mut(&mut self) -> &mut BoardState {
        self.board
    }
}

impl Drop for SimulatedBuild<'_> {
    fn drop(&mut self) {
        self.board.unbuild(self.square);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;
    use crate::player::Player;

    fn sample_board() -> BoardState {
        let mut board = BoardState::default();
        board.place_worker(Square::C3, Player::One);
        board.heights[Square::C4 as usize] = 2;
        board
    }

    #[test]
    fn test_move_is_reverted() {
        let mut board = sample_board();
        let before = board;
        {
            let probe = SimulatedMove::new(&mut board, WorkerMove::new(Square::C3, Square::D3));
            assert_eq!(probe.get_worker(Square::D3), Some(Player::One));
            assert_eq!(probe.get_worker(Square::C3), None);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_probes_are_reverted() {
        let mut board = sample_board();
        let before = board;
        {
            let mut moved = SimulatedMove::new(&mut board, WorkerMove::new(Square::C3, Square::B3));
            let built = SimulatedBuild::new(&mut moved, Square::C4);
            assert_eq!(built.get_height(Square::C4), 3);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_reverted_on_panic() {
        let mut board = sample_board();
        let before = board;
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _probe = SimulatedBuild::new(&mut board, Square::C4);
            panic!("evaluation failed");
        }));
        assert!(result.is_err());
        assert_eq!(board, before);
    }
}
