use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze_traverser::{
    Maze, Position, TraversalStrategy,
    algorithms::{
        exploration::{Hand, WallFollower},
        pathfinding::{BFS, DFS},
    },
    maze::MazeRepository,
};

const SIZE: usize = 201;

/// corridors running left and right, joined at alternating ends
fn serpentine() -> Maze {
    let board = (0..SIZE)
        .map(|y| {
            (0..SIZE)
                .map(|x| match y % 4 {
                    0 | 2 => true,
                    1 => x == SIZE - 1,
                    _ => x == 0,
                })
                .collect()
        })
        .collect();

    Maze::new(
        board,
        Position::new(0, 0),
        Position::new(SIZE - 1, SIZE - 1),
        None,
    )
    .unwrap()
}

fn strategies() -> Vec<Box<dyn TraversalStrategy>> {
    vec![
        Box::new(BFS),
        Box::new(DFS),
        Box::new(WallFollower::new(Hand::Left)),
        Box::new(WallFollower::new(Hand::Right)),
    ]
}

pub fn bundled_mazes(c: &mut Criterion) {
    let repository = MazeRepository::parse(include_str!("../mazes/mazes.txt"));

    for strategy in strategies() {
        c.bench_function(&format!("bundled_{}", strategy.name()), |b| {
            b.iter(|| {
                for maze in repository.mazes() {
                    let _ = strategy.traverse(black_box(maze));
                }
            })
        });
    }
}

pub fn large_serpentine(c: &mut Criterion) {
    let maze = serpentine();

    for strategy in strategies() {
        c.bench_function(&format!("serpentine_{}", strategy.name()), |b| {
            b.iter(|| strategy.traverse(black_box(&maze)).unwrap())
        });
    }
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = bundled_mazes, large_serpentine}
criterion_main!(benches);
