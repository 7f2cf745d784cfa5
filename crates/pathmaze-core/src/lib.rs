//! **pathmaze-core**: the grid model shared by the pathmaze engines.
//!
//! This crate provides the value types every other pathmaze crate speaks:
//! grid coordinates ([`Position`]), the orthogonal move set ([`Direction`]),
//! a wall/passage [`Cell`] carrying transient search bookkeeping, and the
//! row-major [`Grid`] that owns all cells.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, UNREACHABLE};
pub use geom::{Direction, Position};
pub use grid::{Grid, GridIter, ParseGridError};
