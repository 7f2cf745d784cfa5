use pathmaze_core::Grid;

/// Cached neighbour computation helper.
///
/// Enumerates the orthogonal neighbours of a cell that a search may still
/// relax: in range, not a wall, not yet visited. Order is always right,
/// down, left, up.
pub struct Neighbors {
    buf: Vec<usize>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Flat indices of the unvisited, non-wall neighbours of `idx`.
    pub fn open(&mut self, grid: &Grid, idx: usize) -> &[usize] {
        self.buf.clear();
        for n in grid.neighbors(idx) {
            let cell = &grid[n];
            if !cell.visited && !cell.is_wall {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}
