use crate::{
    board::{BoardState, DOME_HEIGHT},
    direction::neighbors,
    gods::StaticGod,
    square::Square,
};

/// Can a worker standing on `from` step onto `to`. Climbing is limited to one level, descending is free.
pub fn can_move(board: &BoardState, from: Square, to: Option<Square>) -> bool {
    let Some(to) = to else {
        return false;
    };
    if board.is_occupied(to) {
        return false;
    }

    let to_height = board.get_height(to);
    if to_height == DOME_HEIGHT {
        return false;
    }

    to_height <= board.get_height(from) + 1
}

/// Can `god`'s worker standing on `standing` build on `pos`.
pub fn can_build(board: &BoardState, pos: Option<Square>, standing: Square, god: StaticGod) -> bool {
    let Some(pos) = pos else {
        return false;
    };
    if board.is_occupied(pos) {
        if pos != standing || !god.can_build_on_self(board, standing) {
            return false;
        }
    }

    board.get_height(pos) != DOME_HEIGHT
}

pub fn can_ever_move(board: &BoardState, pos: Square) -> bool {
    neighbors(pos).any(|to| can_move(board, pos, Some(to)))
}

pub fn can_place(board: &BoardState, pos: Option<Square>) -> bool {
    pos.is_some_and(|pos| !board.is_occupied(pos))
}
