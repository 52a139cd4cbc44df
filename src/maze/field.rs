/// what a single character of a maze's text form stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Path,
    Wall,
    Empty,
    Start,
    End,
    Traversed,
}

impl Field {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'o' => Some(Self::Path),
            '#' => Some(Self::Wall),
            ' ' => Some(Self::Empty),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            'x' => Some(Self::Traversed),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Path => 'o',
            Self::Wall => '#',
            Self::Empty => ' ',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Traversed => 'x',
        }
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Path | Self::Start | Self::End | Self::Traversed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_round_trip() {
        for ch in ['o', '#', ' ', 'S', 'E', 'x'] {
            assert_eq!(Field::from_char(ch).map(Field::as_char), Some(ch));
        }
        assert_eq!(Field::from_char('?'), None);
    }

    #[test]
    fn walls_and_empty_fields_block() {
        assert!(!Field::Wall.is_walkable());
        assert!(!Field::Empty.is_walkable());
        assert!(Field::Start.is_walkable());
        assert!(Field::End.is_walkable());
    }
}
