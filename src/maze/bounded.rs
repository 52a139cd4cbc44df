use super::{
    position::Position,
    side::{Rotation, Side},
};
use crate::error::MazeError;

/// An immutable rectangular maze board with a starting and an ending field.
///
/// Every invariant is checked by [`Maze::new`]; a `Maze` that exists is
/// always non-empty, rectangular and has both fields on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Vec<bool>,
    width: usize,
    height: usize,
    start: Position,
    end: Position,
    description: Option<String>,
}

impl Maze {
    /// `board[y][x]` is `true` for a walkable field and `false` for a wall
    pub fn new(
        board: Vec<Vec<bool>>,
        start: Position,
        end: Position,
        description: Option<String>,
    ) -> Result<Self, MazeError> {
        let height = board.len();
        let width = board.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(MazeError::EmptyBoard);
        }

        if let Some((row, found)) = board
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(MazeError::RaggedBoard {
                row,
                expected: width,
                found,
            });
        }

        for (role, position) in [("starting", start), ("ending", end)] {
            if !position.is_within((height, width)) {
                return Err(MazeError::FieldOutOfBounds {
                    role,
                    position,
                    width,
                    height,
                });
            }
        }

        Ok(Self {
            grid: board.into_iter().flatten().collect(),
            width,
            height,
            start,
            end,
            description,
        })
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

    pub fn field_count(&self) -> usize {
        self.grid.len()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.bounds())
    }

    /// `false` for walls and for positions outside the board
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.contains(pos) && self.grid[pos.to_index(self.width)]
    }

    pub fn row(&self, y: usize) -> Option<&[bool]> {
        (y < self.height).then(|| &self.grid[y * self.width..(y + 1) * self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.grid.chunks(self.width)
    }

    /// Bordering fields of `pos`, see [`Position::bordering_fields`].
    ///
    /// Fails if `pos` is not on the maze board.
    pub fn bordering_fields(
        &self,
        pos: Position,
        rotation: Rotation,
        first_side: Side,
    ) -> Result<[Option<Position>; 4], MazeError> {
        pos.bordering_fields(self.height, self.width, rotation, first_side)
    }

    /// walkable bordering fields paired with the side they lie on, none for off-board positions
    pub fn open_neighbors(
        &self,
        pos: Position,
        rotation: Rotation,
        first_side: Side,
    ) -> impl Iterator<Item = (Position, Side)> + '_ {
        self.bordering_fields(pos, rotation, first_side)
            .unwrap_or([None; 4])
            .into_iter()
            .zip(first_side.sequence(rotation))
            .filter_map(|(field, side)| field.map(|field| (field, side)))
            .filter(|&(field, _)| self.is_walkable(field))
    }
}
