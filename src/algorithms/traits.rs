use crate::{
    error::Untraversable,
    maze::{Maze, TraversedBoard},
};

/// A way of finding a path from a maze's starting field to its ending field.
///
/// Implementations keep all search state local to a call, so one strategy
/// value can traverse any number of mazes, from several threads at once.
pub trait TraversalStrategy: Send + Sync {
    /// the marked fields on success, the reason for giving up otherwise
    fn traverse(&self, maze: &Maze) -> Result<TraversedBoard, Untraversable>;

    fn name(&self) -> &'static str;
}

/// Strategies that find a path whenever one exists.
///
/// Their failure proves the maze untraversable, which does not hold for
/// heuristics such as the wall follower.
pub trait GuaranteedTraversal: TraversalStrategy {
    fn is_traversable(&self, maze: &Maze) -> bool {
        self.traverse(maze).is_ok()
    }
}

impl<S: TraversalStrategy + ?Sized> TraversalStrategy for &S {
    fn traverse(&self, maze: &Maze) -> Result<TraversedBoard, Untraversable> {
        (**self).traverse(maze)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
