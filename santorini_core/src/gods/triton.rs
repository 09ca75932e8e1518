use crate::{
    board::BoardState,
    direction::neighbors,
    gods::{GodName, GodPower, god_power},
    movegen::WorkerMove,
    rules::can_move,
    square::Square,
};

/// A step onto the perimeter may be followed by one more step out of that square.
/// The worker is still on `worker` while hops are checked, so it can't hop back home.
fn triton_extend_moves(board: &BoardState, worker: Square, moves: &mut Vec<WorkerMove>) {
    let perimeter_steps: Vec<Square> = moves
        .iter()
        .filter(|action| action.from == worker && action.to.is_perimeter())
        .map(|action| action.to)
        .collect();

    for pos in perimeter_steps {
        for next in neighbors(pos) {
            let hop = WorkerMove::new(worker, next);
            if can_move(board, pos, Some(next)) && !moves.contains(&hop) {
                moves.push(hop);
            }
        }
    }
}

pub const fn build_triton() -> GodPower {
    god_power(GodName::Triton).with_move_extension(triton_extend_moves)
}
