use crate::{
    algorithms::traits::TraversalStrategy,
    error::{Reason, Untraversable},
    maze::{Maze, Position, Rotation, Side, TraversedBoard},
};

/// after this many visits of the starting field the follower is assumed to walk in circles
pub const MAX_START_VISITS: usize = 5;

/// moves allowed per field and probing side before giving up
const STEPS_PER_STATE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    /// the direction in which bordering fields are probed
    pub fn rotation(self) -> Rotation {
        match self {
            Hand::Left => Rotation::Clockwise,
            Hand::Right => Rotation::CounterClockwise,
        }
    }
}

/// Keeps one hand on the wall and walks until the ending field shows up.
///
/// This is a heuristic. Mazes whose ending field is not reachable along the
/// wall the follower starts at make it circle around the starting field,
/// which is detected after [`MAX_START_VISITS`] visits.
#[derive(Debug, Clone, Copy)]
pub struct WallFollower {
    hand: Hand,
}

impl WallFollower {
    pub fn new(hand: Hand) -> Self {
        Self { hand }
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    /// the side right after the first wall or board edge around the start
    fn initial_side(&self, maze: &Maze) -> Side {
        let rotation = self.hand.rotation();
        let order = Side::order(rotation);

        maze.start()
            .bordering_fields_unchecked(maze.bounds(), rotation, Side::Top)
            .into_iter()
            .position(|field| !field.is_some_and(|field| maze.is_walkable(field)))
            .map_or(Side::Top, |i| order[i].next(rotation, 1))
    }

    fn fail(&self, maze: &Maze, reason: Reason) -> Untraversable {
        log::debug!("{} gave up: {reason}", self.name());
        Untraversable::new(self.name(), maze, reason)
    }
}

impl TraversalStrategy for WallFollower {
    fn traverse(&self, maze: &Maze) -> Result<TraversedBoard, Untraversable> {
        let rotation = self.hand.rotation();
        let (start, end) = (maze.start(), maze.end());
        let limit = step_limit(maze);

        let mut board = TraversedBoard::for_maze(maze);
        board.mark(start);

        let mut current: Position = start;
        let mut first_side = self.initial_side(maze);
        let mut start_visits = 0;
        let mut moves = 0;

        log::trace!("{} starts at {start} probing from {first_side}", self.name());

        while current != end {
            if current == start {
                start_visits += 1;
                if start_visits >= MAX_START_VISITS {
                    return Err(self.fail(maze, Reason::StartReachedTooOften { times: start_visits }));
                }
            }

            if moves >= limit {
                return Err(self.fail(maze, Reason::StepLimitExceeded { limit }));
            }

            let Some((next, side)) = maze.open_neighbors(current, rotation, first_side).next() else {
                return Err(self.fail(maze, Reason::SurroundedByWalls { field: current, start }));
            };

            log::trace!("{current} -> {next} ({side})");
            board.mark(next);
            current = next;
            first_side = side.next(rotation.inverse(), 1);
            moves += 1;
        }

        log::debug!("{} reached {end} after {moves} moves", self.name());
        Ok(board)
    }

    fn name(&self) -> &'static str {
        match self.hand {
            Hand::Left => "left hand on wall",
            Hand::Right => "right hand on wall",
        }
    }
}

/// Upper bound on moves for one traversal.
///
/// The follower's state is its field plus the side it starts probing at, so a
/// walk that never ends repeats a state within `4 * fields` moves. The bound
/// leaves room for [`MAX_START_VISITS`] rounds before it applies.
fn step_limit(maze: &Maze) -> usize {
    STEPS_PER_STATE * 4 * maze.field_count()
}
