use std::collections::{HashMap, HashSet, VecDeque};

use crate::{
    algorithms::traits::{GuaranteedTraversal, TraversalStrategy},
    error::{Reason, Untraversable},
    maze::{Maze, Position, Rotation, Side, TraversedBoard},
};

/// Breadth-first search, marks a shortest path by field count.
///
/// Bordering fields are examined clockwise starting at the top, which decides
/// between several shortest paths.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BFS;

impl TraversalStrategy for BFS {
    fn traverse(&self, maze: &Maze) -> Result<TraversedBoard, Untraversable> {
        let (start, end) = (maze.start(), maze.end());

        let mut visited = HashSet::from([start]);
        let mut came_from = HashMap::new();
        let mut frontier = VecDeque::from([start]);

        while let Some(current) = frontier.pop_front() {
            if current == end {
                let path = reconstruct_path(&came_from, start, end);
                log::debug!("bfs reached {end} after visiting {} fields", visited.len());
                return Ok(TraversedBoard::from_path(maze, path));
            }

            for (neighbor, _) in maze.open_neighbors(current, Rotation::Clockwise, Side::Top) {
                if visited.insert(neighbor) {
                    came_from.insert(neighbor, current);
                    frontier.push_back(neighbor);
                }
            }
        }

        log::debug!("bfs exhausted {} reachable fields from {start}", visited.len());
        Err(Untraversable::new(
            self.name(),
            maze,
            Reason::AllReachableExplored { start, end },
        ))
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

impl GuaranteedTraversal for BFS {}

/// fields from `start` to `end`, both included
fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    end: Position,
) -> Vec<Position> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    path.reverse();
    path
}
