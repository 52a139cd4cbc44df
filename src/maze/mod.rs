mod bounded;
mod field;
mod parse;
mod position;
mod render;
mod repository;
mod side;
mod traversed;

#[cfg(test)]
pub mod fixtures;

pub use bounded::Maze;
pub use field::Field;
pub use position::Position;
pub use repository::{MAZE_SEPARATOR, MazeRepository};
pub use side::{Rotation, Side};
pub use traversed::TraversedBoard;

pub use crate::error::{MazeError, ParseError};
