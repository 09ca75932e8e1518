use crate::{board::BOARD_WIDTH, square::Square};

#[repr(u8)]
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum Direction {
    NW,
    N,
    NE,
    W,
    E,
    SW,
    S,
    SE,
}

impl Direction {
    /// Row-major order: the row above left to right, then the same row, then the row below.
    pub const ALL: [Direction; 8] = [
        Direction::NW,
        Direction::N,
        Direction::NE,
        Direction::W,
        Direction::E,
        Direction::SW,
        Direction::S,
        Direction::SE,
    ];

    pub const fn to_icoord(self) -> ICoord {
        match self {
            Direction::NW => ICoord::new(-1, -1),
            Direction::N => ICoord::new(-1, 0),
            Direction::NE => ICoord::new(-1, 1),
            Direction::W => ICoord::new(0, -1),
            Direction::E => ICoord::new(0, 1),
            Direction::SW => ICoord::new(1, -1),
            Direction::S => ICoord::new(1, 0),
            Direction::SE => ICoord::new(1, 1),
        }
    }
}

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub struct ICoord {
    pub row: i32,
    pub col: i32,
}

impl ICoord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn from_square(square: Square) -> Self {
        Self::new(square.row() as i32, square.col() as i32)
    }

    pub const fn is_in_bound(self) -> bool {
        let width = BOARD_WIDTH as i32;
        self.col >= 0 && self.col < width && self.row >= 0 && self.row < width
    }

    pub const fn to_square(self) -> Option<Square> {
        if self.is_in_bound() {
            Some(Square::from_row_col(self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    pub const fn add(self, other: Self) -> Self {
        Self {
            row: self.row + other.row,
            col: self.col + other.col,
        }
    }
}

/// Cell one step from `square` in `direction`, or `None` past the board edge.
pub fn offset_square_by_dir(square: Square, direction: Direction) -> Option<Square> {
    ICoord::from_square(square)
        .add(direction.to_icoord())
        .to_square()
}

/// In-bound neighbors of `square`, in `Direction::ALL` order.
pub fn neighbors(square: Square) -> impl Iterator<Item = Square> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| offset_square_by_dir(square, direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_is_none() {
        assert_eq!(offset_square_by_dir(Square::A5, Direction::N), None);
        assert_eq!(offset_square_by_dir(Square::A5, Direction::W), None);
        assert_eq!(offset_square_by_dir(Square::E1, Direction::SE), None);
        assert_eq!(ICoord::new(5, 0).to_square(), None);
        assert_eq!(ICoord::new(0, -1).to_square(), None);
    }

    #[test]
    fn test_neighbor_order() {
        let found: Vec<Square> = neighbors(Square::C3).collect();
        assert_eq!(
            found,
            vec![
                Square::B4,
                Square::C4,
                Square::D4,
                Square::B3,
                Square::D3,
                Square::B2,
                Square::C2,
                Square::D2,
            ]
        );
    }

    #[test]
    fn test_corner_neighbors() {
        let found: Vec<Square> = neighbors(Square::A5).collect();
        assert_eq!(found, vec![Square::B5, Square::A4, Square::B4]);
    }
}
