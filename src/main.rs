mod cli;
mod logging;

use clap::Parser;
use colored::Colorize;
use eyre::{Result, eyre};
use log::info;

use cli::{Args, Command, StrategyKind};
use logging::Logger;
use maze_traverser::{
    Maze, TraversedBoard,
    maze::MazeRepository,
    solvers::{self, SolveReport, Solver},
};

fn main() -> Result<()> {
    let args = Args::parse();
    Logger::init(args.verbosity);

    if args.no_color {
        colored::control::set_override(false);
    }

    let repository = MazeRepository::load(&args.file)?;

    match args.command {
        Command::List => list(&repository),
        Command::Solve { index, strategy } => solve(select(&repository, index)?, strategy)?,
        Command::Benchmark { index } => benchmark(select(&repository, index)?)?,
    }

    Ok(())
}

/// mazes are numbered from 1, as listed
fn select(repository: &MazeRepository, index: usize) -> Result<&Maze> {
    index
        .checked_sub(1)
        .and_then(|i| repository.get(i))
        .ok_or_else(|| eyre!("no maze number {index}, the file holds {} mazes", repository.len()))
}

fn list(repository: &MazeRepository) {
    for (label, maze) in repository.entries() {
        println!("{}", label.bold());
        print_board(&maze.board_to_string());
    }
}

fn solve(maze: &Maze, kind: StrategyKind) -> Result<()> {
    info!("solving with {}", kind.name());

    let strategy = kind.strategy();
    let report = Solver::new(strategy.as_ref()).solve(maze);
    print_report(maze, &report)
}

fn benchmark(maze: &Maze) -> Result<()> {
    info!("benchmarking every strategy");

    let strategies: Vec<_> = StrategyKind::all().map(|kind| kind.strategy()).collect();
    let reports = solvers::benchmark(maze, &strategies);

    for report in &reports {
        print_report(maze, report)?;
    }
    print_benchmark_summary(&reports);
    Ok(())
}

// ========== Utilities ==========

fn print_report(maze: &Maze, report: &SolveReport) -> Result<()> {
    println!("{}", report.strategy.bold());
    match &report.outcome {
        Ok(board) => print_traversed(maze, board, report)?,
        Err(e) => {
            print_board(&maze.board_to_string());
            println!("{} {}", "untraversable:".red(), e.reason());
        }
    }
    println!();
    Ok(())
}

fn print_traversed(maze: &Maze, board: &TraversedBoard, report: &SolveReport) -> Result<()> {
    print_board(&maze.traversed_board_to_string(board)?);
    println!(
        "{} {} fields in {:?}",
        "traversed:".green(),
        board.marked_count(),
        report.elapsed
    );
    Ok(())
}

fn print_board(board: &str) {
    for line in board.lines() {
        let colored: String = line
            .chars()
            .map(|ch| match ch {
                'x' => ch.to_string().green().bold().to_string(),
                'S' | 'E' => ch.to_string().yellow().bold().to_string(),
                '#' => ch.to_string().dimmed().to_string(),
                _ => ch.to_string(),
            })
            .collect();
        println!("{colored}");
    }
}

fn print_benchmark_summary(reports: &[SolveReport]) {
    info!("benchmark results:");
    info!("{:<20} {:>8}  {:>12}", "strategy", "fields", "time");
    info!("{:-<44}", "");

    for report in reports {
        let fields = report
            .marked_count()
            .map_or_else(|| "failed".to_string(), |count| count.to_string());
        info!("{:<20} {:>8}  {:>12?}", report.strategy, fields, report.elapsed);
    }

    if let Some(report) = solvers::best(reports)
        && let Some(count) = report.marked_count()
    {
        info!("best: {} ({} fields)", report.strategy, count);
    }

    if let Some(report) = solvers::fastest(reports) {
        info!("fastest: {} ({:?})", report.strategy, report.elapsed);
    }
}
