use std::fmt;

use super::side::{Rotation, Side};
use crate::error::MazeError;

/// A field coordinate on a maze board, `x` growing rightwards and `y` downwards.
///
/// Whether a position is valid for a particular board is checked against the
/// board's `(height, width)` bounds, never stored in the position itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn to_index(self, width: usize) -> usize {
        self.y * width + self.x
    }

    pub fn from_index(index: usize, width: usize) -> Self {
        Self::new(index % width, index / width)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` iff the two positions share an edge; symmetric
    pub fn borders(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    pub fn is_within(self, bounds: (usize, usize)) -> bool {
        let (height, width) = bounds;
        self.x < width && self.y < height
    }

    /// the bordering position on `side`, or `None` if it falls off the board
    pub fn neighbor(self, side: Side, bounds: (usize, usize)) -> Option<Self> {
        let (height, width) = bounds;
        match side {
            Side::Top if self.y > 0 => Some(Self::new(self.x, self.y - 1)),
            Side::Right if self.x + 1 < width => Some(Self::new(self.x + 1, self.y)),
            Side::Bottom if self.y + 1 < height => Some(Self::new(self.x, self.y + 1)),
            Side::Left if self.x > 0 => Some(Self::new(self.x - 1, self.y)),
            _ => None,
        }
    }

    /// Determines the four bordering fields of this position.
    ///
    /// Slot `k` of the returned array holds the field lying on the side that
    /// is `k` steps in `rotation` from `first_side`, or `None` when that side
    /// lies outside the board. Callers probing the slots in order therefore
    /// probe `first_side` first and then walk around the position in
    /// `rotation`.
    ///
    /// Fails if the position itself is not on the `height` x `width` board.
    pub fn bordering_fields(
        self,
        height: usize,
        width: usize,
        rotation: Rotation,
        first_side: Side,
    ) -> Result<[Option<Self>; 4], MazeError> {
        let bounds = (height, width);
        if !self.is_within(bounds) {
            return Err(MazeError::PositionOutOfBounds {
                position: self,
                width,
                height,
            });
        }

        Ok(self.bordering_fields_unchecked(bounds, rotation, first_side))
    }

    /// clockwise, starting at the top
    pub fn bordering_fields_default(
        self,
        height: usize,
        width: usize,
    ) -> Result<[Option<Self>; 4], MazeError> {
        self.bordering_fields(height, width, Rotation::Clockwise, Side::Top)
    }

    pub(crate) fn bordering_fields_unchecked(
        self,
        bounds: (usize, usize),
        rotation: Rotation,
        first_side: Side,
    ) -> [Option<Self>; 4] {
        first_side
            .sequence(rotation)
            .map(|side| self.neighbor(side, bounds))
    }

    /// Returns the side of `self` on which `other` lies.
    pub fn side_of(self, other: Self) -> Result<Side, MazeError> {
        if !self.borders(other) {
            return Err(MazeError::NotAdjacent { a: self, b: other });
        }

        let side = if other.y < self.y {
            Side::Top
        } else if other.x > self.x {
            Side::Right
        } else if other.y > self.y {
            Side::Bottom
        } else {
            Side::Left
        };
        Ok(side)
    }
}

impl TryFrom<(isize, isize)> for Position {
    type Error = MazeError;

    fn try_from((x, y): (isize, isize)) -> Result<Self, Self::Error> {
        if x < 0 || y < 0 {
            return Err(MazeError::NegativeCoordinates { x, y });
        }
        Ok(Self::new(x as usize, y as usize))
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
