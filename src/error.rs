use thiserror::Error;

use crate::maze::{Maze, Position};

/// invalid input handed to the maze model or the cell geometry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("a maze board needs at least one row and one column")]
    EmptyBoard,

    #[error("maze board row {row} has width {found}, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("the {role} field {position} lies outside the {width}x{height} maze board")]
    FieldOutOfBounds {
        role: &'static str,
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("field {position} lies outside a board of width {width} and height {height}")]
    PositionOutOfBounds {
        position: Position,
        width: usize,
        height: usize,
    },

    #[error("field coordinates must not be negative, got ({x}, {y})")]
    NegativeCoordinates { x: isize, y: isize },

    #[error("fields {a} and {b} do not border each other")]
    NotAdjacent { a: Position, b: Position },

    #[error("traversed board is {found_width}x{found_height}, maze board is {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },
}

/// failure to read a maze from its text form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no field lines were provided")]
    NoFieldLines,

    #[error("field line {line} is blank")]
    BlankLine { line: usize },

    #[error("expected exactly one starting field 'S', found {found}")]
    StartCount { found: usize },

    #[error("expected exactly one ending field 'E', found {found}")]
    EndCount { found: usize },

    #[error("invalid character {ch:?} at line {line}")]
    InvalidCharacter { ch: char, line: usize },

    #[error(transparent)]
    Maze(#[from] MazeError),
}

/// why a strategy gave up on a maze
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error(
        "starting from {start}, all reachable fields have been explored \
         and none leads to the ending field {end}"
    )]
    AllReachableExplored { start: Position, end: Position },

    #[error(
        "starting from {start}, all possible options have been analyzed \
         and none leads to the ending field {end}"
    )]
    AllOptionsAnalyzed { start: Position, end: Position },

    #[error("the starting field has been reached {times} times")]
    StartReachedTooOften { times: usize },

    #[error(
        "the current field {field} is only surrounded by walls or absent fields so that \
         moving further is not possible; this is expected only if it is the starting field {start}"
    )]
    SurroundedByWalls { field: Position, start: Position },

    #[error("no ending field reached within the step limit of {limit} moves")]
    StepLimitExceeded { limit: usize },
}

/// A strategy could not find or complete a path through a maze.
///
/// This is an expected outcome of a traversal, unlike [`MazeError`] which
/// signals malformed input.
#[derive(Debug, Clone, Error)]
#[error("using the strategy \"{strategy}\" the following maze cannot be traversed:\n{maze}\nreason: {reason}")]
pub struct Untraversable {
    strategy: &'static str,
    maze: Box<Maze>,
    reason: Reason,
}

impl Untraversable {
    pub fn new(strategy: &'static str, maze: &Maze, reason: Reason) -> Self {
        Self {
            strategy,
            maze: Box::new(maze.clone()),
            reason,
        }
    }

    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}
