pub mod board;
pub mod direction;
pub mod engine;
pub mod error;
pub mod field;
pub mod gods;
pub mod grid;
pub mod heuristic;
pub mod movegen;
pub mod placement;
pub mod player;
pub mod random_utils;
pub mod rules;
pub mod simulate;
pub mod square;
