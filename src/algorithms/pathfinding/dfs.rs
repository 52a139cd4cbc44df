use std::collections::HashSet;

use crate::{
    algorithms::traits::{GuaranteedTraversal, TraversalStrategy},
    error::{Reason, Untraversable},
    maze::{Maze, Rotation, Side, TraversedBoard},
};

/// Depth-first search with backtracking.
///
/// Follows the first unvisited walkable field clockwise from the top and
/// steps back once a field has nothing left to offer. The result is some
/// path, not necessarily a short one.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default)]
pub struct DFS;

impl TraversalStrategy for DFS {
    fn traverse(&self, maze: &Maze) -> Result<TraversedBoard, Untraversable> {
        let (start, end) = (maze.start(), maze.end());

        let mut visited = HashSet::from([start]);
        let mut path = vec![start];

        while let Some(&current) = path.last() {
            if current == end {
                log::debug!("dfs reached {end} with a path of {} fields", path.len());
                return Ok(TraversedBoard::from_path(maze, path));
            }

            let next = maze
                .open_neighbors(current, Rotation::Clockwise, Side::Top)
                .map(|(neighbor, _)| neighbor)
                .find(|neighbor| !visited.contains(neighbor));

            match next {
                Some(neighbor) => {
                    visited.insert(neighbor);
                    path.push(neighbor);
                }
                None => {
                    log::trace!("dead end at {current}, backtracking");
                    path.pop();
                }
            }
        }

        log::debug!("dfs analyzed {} fields from {start}", visited.len());
        Err(Untraversable::new(
            self.name(),
            maze,
            Reason::AllOptionsAnalyzed { start, end },
        ))
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}

impl GuaranteedTraversal for DFS {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Position, fixtures};

    /// marked fields are walkable and connected to the starting field
    fn assert_connected_path(maze: &Maze, board: &TraversedBoard) {
        assert!(board.is_marked(maze.start()));
        assert!(board.is_marked(maze.end()));

        let marked: HashSet<Position> = board.marked_positions().collect();
        assert!(marked.iter().all(|&pos| maze.is_walkable(pos)));

        let mut reached = HashSet::from([maze.start()]);
        let mut stack = vec![maze.start()];
        while let Some(pos) = stack.pop() {
            for &other in &marked {
                if pos.borders(other) && reached.insert(other) {
                    stack.push(other);
                }
            }
        }
        assert_eq!(reached, marked);
    }

    #[test]
    fn path_lengths_on_traversable_mazes() {
        let expected = [
            (fixtures::THREE_PATHS_OF_DIFFERENT_LENGTH, 25),
            (fixtures::TWO_PATHS_OF_SAME_LENGTH, 11),
            (fixtures::NOT_WITH_EITHER_HAND, 40),
            (fixtures::NOT_WITH_LEFT_HAND, 39),
            (fixtures::NOT_WITH_RIGHT_HAND, 31),
            (fixtures::START_NEXT_TO_END, 4),
        ];

        for (lines, length) in expected {
            let maze = fixtures::maze(lines);
            let board = DFS.traverse(&maze).unwrap();
            assert_eq!(board.marked_count(), length, "{}", maze.board_to_string());
            assert!(DFS.is_traversable(&maze));
        }
    }

    #[test]
    fn start_next_to_end_goes_around_through_the_top() {
        let maze = fixtures::maze(fixtures::START_NEXT_TO_END);
        let board = DFS.traverse(&maze).unwrap();
        assert_eq!(
            board.to_rows(),
            fixtures::marked(&["xx.", "xx.", "..."])
        );
    }

    #[test]
    fn start_equals_end_marks_one_field() {
        let board = DFS.traverse(&fixtures::start_equals_end()).unwrap();
        assert_eq!(board.marked_count(), 1);
        assert!(board.is_marked(Position::new(1, 1)));
    }

    #[test]
    fn marks_only_the_final_path() {
        for maze in fixtures::traversable() {
            let board = DFS.traverse(&maze).unwrap();
            assert_connected_path(&maze, &board);
        }
    }

    #[test]
    fn untraversable_mazes_fail_after_analyzing_every_option() {
        for maze in fixtures::untraversable() {
            let err = DFS.traverse(&maze).unwrap_err();

            assert_eq!(err.strategy(), "DFS");
            assert_eq!(
                err.reason(),
                &Reason::AllOptionsAnalyzed {
                    start: maze.start(),
                    end: maze.end()
                }
            );
            assert!(
                err.reason()
                    .to_string()
                    .contains("all possible options have been analyzed")
            );
        }
    }

    #[test]
    fn failure_message_names_start_and_end() {
        let maze = fixtures::maze(fixtures::UNREACHABLE_END);
        let err = DFS.traverse(&maze).unwrap_err();
        assert_eq!(
            err.reason().to_string(),
            "starting from (7, 7), all possible options have been analyzed \
             and none leads to the ending field (5, 1)"
        );
    }

    #[test]
    fn repeated_traversals_are_identical() {
        let maze = fixtures::maze(fixtures::NOT_WITH_EITHER_HAND);
        let first = DFS.traverse(&maze).unwrap();
        for _ in 0..5 {
            assert_eq!(DFS.traverse(&maze).unwrap(), first);
        }
    }
}
