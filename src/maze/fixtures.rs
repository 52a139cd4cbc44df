//! Mazes shared by the strategy tests, written in the text maze format.

use super::{Maze, Position};

// traversable by every strategy, three paths of different lengths
pub const THREE_PATHS_OF_DIFFERENT_LENGTH: &[&str] = &[
    "oo#############",
    "oooooSoooooo#o#",
    "#o###o#####o#o#",
    "#o#ooooooooo#o#",
    "#o#####o###o#o#",
    "#o#o#ooooo#ooo#",
    "#o#o###o#######",
    "#o#ooo#ooooooo#",
    "#o#o#o#####o#o#",
    "#ooo#ooooooo#Eo",
    "#############o#",
];

// traversable by every strategy, two paths of the same length
pub const TWO_PATHS_OF_SAME_LENGTH: &[&str] = &[
    "oo#########",
    "oo#ooooo#o#",
    "#o#o#o#o#o#",
    "#ooo#o#ooo#",
    "#S###E###o#",
    "#o#ooo#ooo#",
    "#o#o#####o#",
    "#ooooooo#o#",
    "#########oo",
];

// traversable, but not with either hand on the wall
pub const NOT_WITH_EITHER_HAND: &[&str] = &[
    "ooo##########",
    "oooooooooooo#",
    "#ooSooo###oo#",
    "#oooooooo#oo#",
    "#oo#######oo#",
    "#Eoooooooooo#",
    "#oo#oo####oo#",
    "#oo#oo#oo####",
    "##########oo#",
];

// traversable, but not with the left hand on the wall
pub const NOT_WITH_LEFT_HAND: &[&str] = &[
    "ooo#############",
    "oooooooo#oooooo#",
    "####oooo#ooo####",
    "#ooooooSooooooo#",
    "####ooooo####oo#",
    "#oooooooo#oo#oo#",
    "#oo#######oo#oo#",
    "#oo#oEooooooooo#",
    "#############oo#",
];

// traversable, but not with the right hand on the wall
pub const NOT_WITH_RIGHT_HAND: &[&str] = &[
    "ooo#############",
    "oooooo#oooooooo#",
    "####oo#ooooo####",
    "#ooooooSooooooo#",
    "####ooooo####oo#",
    "#oooooooo#oo#oo#",
    "#oo#######oo#oo#",
    "#oo#oEooooooooo#",
    "#############oo#",
];

// starting and ending field next to each other
pub const START_NEXT_TO_END: &[&str] = &[
    "oo#",
    "SE#",
    "#o#",
];

// untraversable, the starting field is walled in
pub const BLOCKED_START: &[&str] = &[
    "ooo#######",
    "oooo#S#oo#",
    "#oo####oo#",
    "#oo#Eoooo#",
    "#######oo#",
];

// untraversable, the ending field cannot be reached
pub const UNREACHABLE_END: &[&str] = &[
    "ooo##########",
    "oo#ooE#ooooo#",
    "#oo#o##oo#oo#",
    "#oo##oooo#oo#",
    "####oo#oo####",
    "#ooooo#oo#oo#",
    "#oo#######oo#",
    "#ooooooSoooo#",
    "##########oo#",
];

pub fn maze(lines: &[&str]) -> Maze {
    Maze::from_lines(lines, None).unwrap()
}

/// `oo#` / `oS#` / `#o#`, ending on the starting field
pub fn start_equals_end() -> Maze {
    let board = maze(START_NEXT_TO_END)
        .rows()
        .map(<[bool]>::to_vec)
        .collect();
    let field = Position::new(1, 1);
    Maze::new(board, field, field, Some("start and end share their field".into())).unwrap()
}

pub fn traversable() -> Vec<Maze> {
    vec![
        maze(THREE_PATHS_OF_DIFFERENT_LENGTH),
        maze(TWO_PATHS_OF_SAME_LENGTH),
        maze(NOT_WITH_EITHER_HAND),
        maze(NOT_WITH_LEFT_HAND),
        maze(NOT_WITH_RIGHT_HAND),
        start_equals_end(),
        maze(START_NEXT_TO_END),
    ]
}

pub fn untraversable() -> Vec<Maze> {
    vec![maze(BLOCKED_START), maze(UNREACHABLE_END)]
}

/// expected traversed board drawn with `x` for marked fields
pub fn marked(pattern: &[&str]) -> Vec<Vec<bool>> {
    pattern
        .iter()
        .map(|line| line.chars().map(|ch| ch == 'x').collect())
        .collect()
}
