use std::{fmt, fs, path::Path};

use eyre::WrapErr;

use super::bounded::Maze;

/// line introducing a new maze block inside a maze file
pub const MAZE_SEPARATOR: &str = "-new-maze-";

/// Mazes read from a text file.
///
/// A file holds any number of blocks, each made of a [`MAZE_SEPARATOR`] line,
/// one description line and the maze's field lines. Blank lines are ignored.
#[derive(Debug, Clone, Default)]
pub struct MazeRepository {
    mazes: Vec<Maze>,
}

impl MazeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("unable to read maze file {}", path.display()))?;

        let repository = Self::parse(&content);
        if repository.is_empty() {
            eyre::bail!("no valid maze found in {}", path.display());
        }

        log::debug!("imported {} mazes from {}", repository.len(), path.display());
        Ok(repository)
    }

    /// Invalid blocks are logged and skipped.
    pub fn parse(content: &str) -> Self {
        let mut repository = Self::new();
        repository.import(content);
        repository
    }

    pub fn import(&mut self, content: &str) {
        let lines: Vec<(usize, &str)> = content
            .lines()
            .enumerate()
            .filter(|(number, line)| {
                let blank = line.trim().is_empty();
                if blank {
                    log::debug!("skipping empty maze file line {}", number + 1);
                }
                !blank
            })
            .collect();

        let is_separator = |line: &str| line.trim() == MAZE_SEPARATOR;

        let mut index = 0;
        while index < lines.len() {
            if !is_separator(lines[index].1) {
                index += 1;
                continue;
            }

            index += 1;
            let Some(&(number, description)) = lines.get(index) else {
                log::warn!(
                    "maze file ends with a separator at line {}, no description or field lines follow",
                    lines[index - 1].0 + 1
                );
                return;
            };
            let description = description.trim().to_string();
            index += 1;

            let field_lines: Vec<&str> = lines[index..]
                .iter()
                .map(|&(_, line)| line)
                .take_while(|line| !is_separator(*line))
                .map(str::trim_end)
                .collect();
            index += field_lines.len();

            match Maze::from_lines(&field_lines, Some(description.clone())) {
                Ok(maze) => self.add(maze),
                Err(e) => log::warn!(
                    "skipping maze \"{}\" starting at line {}: {}",
                    description,
                    number + 1,
                    e
                ),
            }
        }
    }

    pub fn add(&mut self, maze: Maze) {
        self.mazes.push(maze);
    }

    pub fn mazes(&self) -> &[Maze] {
        &self.mazes
    }

    pub fn get(&self, index: usize) -> Option<&Maze> {
        self.mazes.get(index)
    }

    pub fn len(&self) -> usize {
        self.mazes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mazes.is_empty()
    }

    /// every maze with its listing label, `"1. description (HxW)"`
    pub fn entries(&self) -> impl Iterator<Item = (String, &Maze)> {
        self.mazes.iter().enumerate().map(|(i, maze)| {
            let label = format!(
                "{}. {} ({}x{})",
                i + 1,
                maze.description().unwrap_or("no description provided"),
                maze.height(),
                maze.width()
            );
            (label, maze)
        })
    }
}

impl fmt::Display for MazeRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, _) in self.entries() {
            writeln!(f, "{label}")?;
        }
        Ok(())
    }
}
