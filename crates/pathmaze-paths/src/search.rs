use pathmaze_core::{Cell, Grid, Position};

use crate::algorithm::Algorithm;
use crate::error::PathError;
use crate::neighbors::Neighbors;

/// Outcome of a single search run.
///
/// Both sequences hold cell snapshots taken when the run finished.
/// `path` runs from start to end and is empty when the end was never
/// discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub visited_order: Vec<Cell>,
    pub path: Vec<Cell>,
}

impl PathResult {
    /// Whether a path to the end was found.
    #[inline]
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path (cells minus one), or `None` when no
    /// path was found.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Path as plain positions.
    pub fn path_positions(&self) -> Vec<Position> {
        self.path.iter().map(Cell::pos).collect()
    }

    /// Visit order as plain positions.
    pub fn visited_positions(&self) -> Vec<Position> {
        self.visited_order.iter().map(Cell::pos).collect()
    }
}

/// Run `algorithm` on `grid` from `start` to `end`.
///
/// The grid's search state is reset first and left holding the final
/// distances, visit flags and predecessors of this run. Endpoints must lie
/// inside the grid; out-of-range endpoints yield an empty result.
pub fn find_path(
    grid: &mut Grid,
    start: Position,
    end: Position,
    algorithm: Algorithm,
) -> PathResult {
    let (Some(si), Some(ei)) = (grid.index(start), grid.index(end)) else {
        log::warn!(
            "{algorithm}: endpoints {start} -> {end} outside {}x{} grid",
            grid.rows(),
            grid.cols()
        );
        return PathResult::default();
    };

    let mut search = Search::new(grid, si, ei);
    match algorithm {
        Algorithm::Dijkstra => search.dijkstra(),
        Algorithm::AStar => search.astar(),
        Algorithm::Bfs => search.bfs(),
        Algorithm::Dfs => search.dfs(),
    }
    let res = search.finish();

    log::debug!(
        "{algorithm}: {start} -> {end} visited {} cells, path {} cells",
        res.visited_order.len(),
        res.path.len()
    );
    res
}

/// Like [`find_path`], selecting the strategy by name.
pub fn find_path_by_name(
    grid: &mut Grid,
    start: Position,
    end: Position,
    algorithm: &str,
) -> Result<PathResult, PathError> {
    let algorithm = algorithm.parse::<Algorithm>()?;
    Ok(find_path(grid, start, end, algorithm))
}

// ---------------------------------------------------------------------------
// Internal search driver
// ---------------------------------------------------------------------------

/// What the frontier loop should do with a popped cell.
pub(crate) enum Visit {
    /// Wall or stale entry: drop it and keep popping.
    Discard,
    /// Frontier holds nothing reachable: stop.
    Exhausted,
    /// The end cell was reached: stop.
    Goal,
    /// Newly visited: relax its neighbours.
    Expand,
}

/// Reference into the grid, ordered by `f` for use in `BinaryHeap`.
///
/// Equal keys pop in insertion order via `seq`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: u32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// State of one run: the borrowed grid, flat endpoint indices, the visit
/// order so far and a neighbour scratch buffer. The per-strategy loops live
/// in their own modules as `impl Search` blocks.
pub(crate) struct Search<'g> {
    pub(crate) grid: &'g mut Grid,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) order: Vec<usize>,
    pub(crate) nbuf: Neighbors,
}

impl<'g> Search<'g> {
    /// Reset the grid and seed the start cell.
    pub(crate) fn new(grid: &'g mut Grid, start: usize, end: usize) -> Self {
        grid.reset_search();
        let s = &mut grid[start];
        s.distance = 0;
        s.visited = true;
        Self {
            grid,
            start,
            end,
            order: Vec::new(),
            nbuf: Neighbors::new(),
        }
    }

    /// Common handling of a popped frontier entry.
    pub(crate) fn visit(&mut self, ci: usize) -> Visit {
        let cell = &mut self.grid[ci];
        if cell.is_wall {
            return Visit::Discard;
        }
        if !cell.is_reached() {
            return Visit::Exhausted;
        }
        // The start is flagged visited when seeded; every other cell only
        // when first popped, so a flagged non-start cell is a stale entry.
        if cell.visited && ci != self.start {
            return Visit::Discard;
        }
        cell.visited = true;
        self.order.push(ci);
        if ci == self.end {
            Visit::Goal
        } else {
            Visit::Expand
        }
    }

    /// Follow predecessors back from the end cell.
    fn backtrack(&self) -> Vec<usize> {
        if self.end != self.start && self.grid[self.end].predecessor.is_none() {
            return Vec::new();
        }
        let mut path = Vec::new();
        let mut ci = Some(self.end);
        while let Some(i) = ci {
            path.push(i);
            if i == self.start {
                break;
            }
            ci = self.grid[i].predecessor;
        }
        path.reverse();
        path
    }

    /// Snapshot the visit order and path.
    pub(crate) fn finish(self) -> PathResult {
        let path = self.backtrack();
        PathResult {
            visited_order: self.order.iter().map(|&i| self.grid[i]).collect(),
            path: path.iter().map(|&i| self.grid[i]).collect(),
        }
    }
}
