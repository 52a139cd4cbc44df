use std::fmt;

use super::{bounded::Maze, field::Field, position::Position, traversed::TraversedBoard};
use crate::error::MazeError;

impl Maze {
    /// the field shown at `pos`, with traversed fields taking precedence over paths
    pub fn field_at(&self, pos: Position, traversed: Option<&TraversedBoard>) -> Field {
        if pos == self.start() {
            Field::Start
        } else if pos == self.end() {
            Field::End
        } else if traversed.is_some_and(|board| board.is_marked(pos)) {
            Field::Traversed
        } else if self.is_walkable(pos) {
            Field::Path
        } else {
            Field::Wall
        }
    }

    /// the board in text form, one line per row
    pub fn board_to_string(&self) -> String {
        self.render(None)
    }

    /// The board with the fields of `traversed` drawn as `x`.
    ///
    /// Fails if the traversed board was not made for a maze of this size.
    pub fn traversed_board_to_string(
        &self,
        traversed: &TraversedBoard,
    ) -> Result<String, MazeError> {
        if traversed.bounds() != self.bounds() {
            return Err(MazeError::DimensionMismatch {
                width: self.width(),
                height: self.height(),
                found_width: traversed.width(),
                found_height: traversed.height(),
            });
        }
        Ok(self.render(Some(traversed)))
    }

    fn render(&self, traversed: Option<&TraversedBoard>) -> String {
        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.push(self.field_at(Position::new(x, y), traversed).as_char());
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => writeln!(f, "{description}\n")?,
            None => writeln!(f, "no description provided\n")?,
        }
        f.write_str(&self.board_to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 3] = ["oo#", "SE#", "#o#"];

    #[test]
    fn renders_board_with_start_and_end() {
        let maze = Maze::from_lines(&LINES, None).unwrap();
        assert_eq!(maze.board_to_string(), "oo#\nSE#\n#o#\n");
    }

    #[test]
    fn display_includes_description() {
        let maze = Maze::from_lines(&LINES, Some("a tiny maze".into())).unwrap();
        assert_eq!(maze.to_string(), "a tiny maze\n\noo#\nSE#\n#o#\n");

        let maze = Maze::from_lines(&LINES, None).unwrap();
        assert!(maze.to_string().starts_with("no description provided\n\n"));
    }

    #[test]
    fn traversed_fields_are_drawn_as_x() {
        let maze = Maze::from_lines(&LINES, None).unwrap();
        let board = TraversedBoard::from_path(
            &maze,
            [Position::new(0, 1), Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)],
        );
        assert_eq!(
            maze.traversed_board_to_string(&board).unwrap(),
            "xx#\nSE#\n#o#\n"
        );
    }

    #[test]
    fn traversed_board_must_match_dimensions() {
        let maze = Maze::from_lines(&LINES, None).unwrap();
        let board = TraversedBoard::new(2, 3);
        assert_eq!(
            maze.traversed_board_to_string(&board),
            Err(MazeError::DimensionMismatch {
                width: 3,
                height: 3,
                found_width: 3,
                found_height: 2,
            })
        );
    }
}
