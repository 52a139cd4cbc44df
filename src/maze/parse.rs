use std::str::FromStr;

use super::{bounded::Maze, field::Field, position::Position};
use crate::error::ParseError;

impl Maze {
    /// Builds a maze from its text form, one string per board row.
    ///
    /// `o` is a path, `#` and ` ` are walls, `S` and `E` mark the walkable
    /// starting and ending fields. The board is as wide as the longest line
    /// without trailing whitespace; shorter lines are padded with walls, while
    /// leading whitespace is kept so that non-rectangular mazes can be drawn.
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        description: Option<String>,
    ) -> Result<Self, ParseError> {
        if lines.is_empty() {
            return Err(ParseError::NoFieldLines);
        }

        if let Some(line) = lines.iter().position(|line| line.as_ref().trim().is_empty()) {
            return Err(ParseError::BlankLine { line: line + 1 });
        }

        let count = |wanted: char| {
            lines
                .iter()
                .map(|line| line.as_ref().chars().filter(|&ch| ch == wanted).count())
                .sum::<usize>()
        };
        match (count(Field::Start.as_char()), count(Field::End.as_char())) {
            (1, 1) => {}
            (1, found) => return Err(ParseError::EndCount { found }),
            (found, _) => return Err(ParseError::StartCount { found }),
        }

        let width = lines
            .iter()
            .map(|line| line.as_ref().trim_end().chars().count())
            .max()
            .unwrap_or(0);

        let mut start = Position::new(0, 0);
        let mut end = Position::new(0, 0);
        let mut board = Vec::with_capacity(lines.len());

        for (y, line) in lines.iter().enumerate() {
            let mut row = vec![false; width];
            for (x, ch) in line.as_ref().chars().take(width).enumerate() {
                let field = match Field::from_char(ch) {
                    Some(field) if field != Field::Traversed => field,
                    _ => return Err(ParseError::InvalidCharacter { ch, line: y + 1 }),
                };
                match field {
                    Field::Start => start = Position::new(x, y),
                    Field::End => end = Position::new(x, y),
                    _ => {}
                }
                row[x] = field.is_walkable();
            }
            board.push(row);
        }

        Ok(Maze::new(board, start, end, description)?)
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        Self::from_lines(&lines, None)
    }
}
