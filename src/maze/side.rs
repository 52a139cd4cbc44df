use std::fmt;

/// one of the four sides bordering a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// direction in which bordering fields are enumerated and probed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Side {
    /// Canonical clockwise order. A side's index is its position in this table,
    /// independent of the declaration order of the enum.
    pub const CLOCKWISE: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    pub fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// wraps around, so any index is accepted
    pub fn from_index(index: usize) -> Self {
        Self::CLOCKWISE[index % 4]
    }

    /// Returns the side reached after `distance` steps in `rotation`'s direction.
    ///
    /// A negative distance walks the opposite way, and the distance is taken
    /// modulo 4, so `side.next(r, n).next(r, -n) == side` for every `n`.
    pub fn next(self, rotation: Rotation, distance: i32) -> Self {
        let steps = (distance.rem_euclid(4) * rotation.step()).rem_euclid(4) as usize;
        Self::from_index(self.index() + steps)
    }

    pub fn opposite(self) -> Self {
        self.next(Rotation::Clockwise, 2)
    }

    /// the four sides in `rotation` order, starting at `Top`
    pub fn order(rotation: Rotation) -> [Side; 4] {
        Side::Top.sequence(rotation)
    }

    /// the four sides in `rotation` order, starting at `self`
    pub fn sequence(self, rotation: Rotation) -> [Side; 4] {
        [
            self,
            self.next(rotation, 1),
            self.next(rotation, 2),
            self.next(rotation, 3),
        ]
    }

    /// coordinate offset `(dx, dy)` of the bordering field on this side
    pub fn offset(self) -> (isize, isize) {
        match self {
            Self::Top => (0, -1),
            Self::Right => (1, 0),
            Self::Bottom => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

impl Rotation {
    pub fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// signed index step along [`Side::CLOCKWISE`]
    fn step(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clockwise => f.write_str("clockwise"),
            Self::CounterClockwise => f.write_str("counter-clockwise"),
        }
    }
}
