use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use maze_traverser::{
    TraversalStrategy,
    algorithms::{
        exploration::{Hand, WallFollower},
        pathfinding::{BFS, DFS},
    },
};

#[derive(Parser, Debug)]
#[command(name = "maze-traverser")]
#[command(about = "Finds paths through grid mazes with several strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Maze file holding one or more mazes
    #[arg(short, long, value_name = "FILE", default_value = "mazes/mazes.txt")]
    pub file: PathBuf,

    /// Print boards without colors
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every maze of the maze file
    List,

    /// Traverse one maze with one strategy
    Solve {
        /// Maze number as shown by `list`
        index: usize,

        /// Strategy to traverse the maze with
        #[arg(value_enum)]
        strategy: StrategyKind,
    },

    /// Benchmark mode: run every strategy on one maze and compare
    Benchmark {
        /// Maze number as shown by `list`
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyKind {
    /// Breadth-first search, always finds a shortest path
    #[value(name = "bfs")]
    #[allow(clippy::upper_case_acronyms)]
    BFS,

    /// Depth-first search with backtracking
    #[value(name = "dfs")]
    #[allow(clippy::upper_case_acronyms)]
    DFS,

    /// Wall follower keeping the left hand on the wall
    #[value(name = "left-hand", alias = "left")]
    LeftHand,

    /// Wall follower keeping the right hand on the wall
    #[value(name = "right-hand", alias = "right")]
    RightHand,
}

impl StrategyKind {
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::BFS, Self::DFS, Self::LeftHand, Self::RightHand].into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BFS => "breadth-first search",
            Self::DFS => "depth-first search",
            Self::LeftHand => "left hand on wall",
            Self::RightHand => "right hand on wall",
        }
    }

    pub fn strategy(&self) -> Box<dyn TraversalStrategy> {
        match self {
            Self::BFS => Box::new(BFS),
            Self::DFS => Box::new(DFS),
            Self::LeftHand => Box::new(WallFollower::new(Hand::Left)),
            Self::RightHand => Box::new(WallFollower::new(Hand::Right)),
        }
    }
}
