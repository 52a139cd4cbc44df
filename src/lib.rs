//! Grid mazes and the strategies that find a way from their starting field
//! to their ending field.

pub mod algorithms;
pub mod error;
pub mod maze;
pub mod solvers;

pub use algorithms::{GuaranteedTraversal, TraversalStrategy};
pub use error::{Reason, Untraversable};
pub use maze::{Maze, Position, TraversedBoard};
