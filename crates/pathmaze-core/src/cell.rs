//! The [`Cell`] type: one grid location plus search bookkeeping.

use crate::geom::Position;

/// Sentinel distance meaning "not yet reached".
pub const UNREACHABLE: u32 = u32::MAX;

/// A wall-or-passage grid cell.
///
/// `distance`, `visited` and `predecessor` are transient: the path engine
/// resets them at the start of every run. `predecessor` is a flat index into
/// the owning [`Grid`](crate::Grid), never an owning link.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    row: usize,
    col: usize,
    pub is_wall: bool,
    pub distance: u32,
    pub visited: bool,
    pub predecessor: Option<usize>,
}

impl Cell {
    /// Create an open cell at `pos` with fresh search state.
    #[inline]
    pub const fn new(pos: Position) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
            is_wall: false,
            distance: UNREACHABLE,
            visited: false,
            predecessor: None,
        }
    }

    /// Set the wall flag (builder).
    #[inline]
    pub const fn with_wall(mut self, is_wall: bool) -> Self {
        self.is_wall = is_wall;
        self
    }

    /// The fixed coordinate of this cell.
    #[inline]
    pub const fn pos(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Whether a search has assigned this cell a finite distance.
    #[inline]
    pub const fn is_reached(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Restore the initial search state, leaving the wall flag alone.
    #[inline]
    pub fn reset_search(&mut self) {
        self.distance = UNREACHABLE;
        self.visited = false;
        self.predecessor = None;
    }
}
