//! Maze generation for pathmaze grids.
//!
//! Provides two recipes, both driven by [`MazeGen`]:
//! - **Recursive Division**: a walled border around an open interior that is
//!   split again and again by wall lines with a single gap each.
//! - **Binary Tree**: a lattice of rooms where every room opens a passage
//!   either right or down, giving a spanning tree.
//!
//! Every generator returns the finished [`Grid`](pathmaze_core::Grid)
//! together with the ordered [`MazeStep`] log of each cell it wrote, for
//! replaying the construction.

mod binary_tree;
mod error;
mod kind;
mod mazegen;
mod recursive_division;
mod step;

pub use error::MazeError;
pub use kind::MazeKind;
pub use mazegen::MazeGen;
pub use step::{Maze, MazeStep, StepKind};
