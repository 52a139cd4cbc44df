use std::time::{Duration, Instant};

use crate::{
    algorithms::TraversalStrategy,
    error::Untraversable,
    maze::{Maze, TraversedBoard},
};

/// Outcome of running one strategy on one maze.
#[derive(Debug)]
pub struct SolveReport {
    pub strategy: &'static str,
    pub outcome: Result<TraversedBoard, Untraversable>,
    pub elapsed: Duration,
}

impl SolveReport {
    /// number of marked fields, `None` if the strategy gave up
    pub fn marked_count(&self) -> Option<usize> {
        self.outcome.as_ref().ok().map(TraversedBoard::marked_count)
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub struct Solver<S: TraversalStrategy> {
    strategy: S,
}

impl<S: TraversalStrategy> Solver<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn solve(&self, maze: &Maze) -> SolveReport {
        log::debug!(
            "{}x{} maze: {} -> {}",
            maze.height(),
            maze.width(),
            maze.start(),
            maze.end()
        );

        let started = Instant::now();
        let outcome = self.strategy.traverse(maze);
        let elapsed = started.elapsed();

        match &outcome {
            Ok(board) => log::debug!(
                "{} marked {} fields in {:?}",
                self.strategy.name(),
                board.marked_count(),
                elapsed
            ),
            Err(e) => log::debug!("{} failed after {:?}: {}", self.strategy.name(), elapsed, e.reason()),
        }

        SolveReport {
            strategy: self.strategy.name(),
            outcome,
            elapsed,
        }
    }
}

/// runs every strategy once on `maze`, in the given order
pub fn benchmark<S>(maze: &Maze, strategies: &[S]) -> Vec<SolveReport>
where
    S: AsRef<dyn TraversalStrategy>,
{
    strategies
        .iter()
        .map(|strategy| Solver::new(strategy.as_ref()).solve(maze))
        .collect()
}

/// the successful report with the fewest marked fields, earliest wins ties
pub fn best(reports: &[SolveReport]) -> Option<&SolveReport> {
    reports
        .iter()
        .filter_map(|report| report.marked_count().map(|count| (count, report)))
        .min_by_key(|&(count, _)| count)
        .map(|(_, report)| report)
}

/// the fastest successful report
pub fn fastest(reports: &[SolveReport]) -> Option<&SolveReport> {
    reports
        .iter()
        .filter(|report| report.is_success())
        .min_by_key(|report| report.elapsed)
}
