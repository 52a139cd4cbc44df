use super::{bounded::Maze, position::Position};

/// Boolean matrix of a maze's dimensions marking the fields a strategy selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversedBoard {
    marked: Vec<bool>,
    width: usize,
    height: usize,
}

impl TraversedBoard {
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            marked: vec![false; height * width],
            width,
            height,
        }
    }

    pub fn for_maze(maze: &Maze) -> Self {
        Self::new(maze.height(), maze.width())
    }

    pub fn from_path<I>(maze: &Maze, path: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let mut board = Self::for_maze(maze);
        for pos in path {
            board.mark(pos);
        }
        board
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`
    pub fn bounds(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// positions outside the board are ignored
    pub fn mark(&mut self, pos: Position) {
        if pos.is_within(self.bounds()) {
            self.marked[pos.to_index(self.width)] = true;
        }
    }

    pub fn is_marked(&self, pos: Position) -> bool {
        pos.is_within(self.bounds()) && self.marked[pos.to_index(self.width)]
    }

    /// number of marked fields, the length of the traversed path
    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|&&marked| marked).count()
    }

    pub fn marked_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.marked
            .iter()
            .enumerate()
            .filter(|&(_, &marked)| marked)
            .map(|(index, _)| Position::from_index(index, self.width))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.marked.chunks(self.width.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }
}
