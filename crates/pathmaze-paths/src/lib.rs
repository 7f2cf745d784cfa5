//! Path search over wall/passage grids.
//!
//! This crate runs one of four classical strategies between two cells of a
//! [`Grid`](pathmaze_core::Grid) and reports both the exploration order and
//! the reconstructed path:
//!
//! - **Dijkstra** uniform-cost search ([`Algorithm::Dijkstra`])
//! - **A\*** with a Manhattan heuristic ([`Algorithm::AStar`])
//! - **BFS** level-order search ([`Algorithm::Bfs`])
//! - **DFS** stack-driven exploration ([`Algorithm::Dfs`])
//!
//! Every step between orthogonal open cells costs 1. Neighbours are always
//! enumerated right, down, left, up.
//!
//! ```
//! use pathmaze_core::{Grid, Position};
//! use pathmaze_paths::{Algorithm, find_path};
//!
//! let mut grid = Grid::new(5, 5);
//! let res = find_path(&mut grid, Position::new(0, 0), Position::new(4, 4), Algorithm::Bfs);
//! assert_eq!(res.path.len(), 9);
//! ```

mod algorithm;
mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod neighbors;
mod search;

pub use algorithm::Algorithm;
pub use distance::manhattan;
pub use error::PathError;
pub use neighbors::Neighbors;
pub use search::{PathResult, find_path, find_path_by_name};
