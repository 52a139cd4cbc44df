mod bfs;
mod dfs;

pub use bfs::BFS;
pub use dfs::DFS;
