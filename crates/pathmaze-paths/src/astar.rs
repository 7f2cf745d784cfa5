use std::collections::BinaryHeap;

use crate::distance::manhattan;
use crate::search::{NodeRef, Search, Visit};

impl Search<'_> {
    /// A* keyed on `f = g + h` with a Manhattan heuristic to the end cell.
    ///
    /// The heuristic is computed once per cell before the search starts.
    /// Relaxation is the same as [`dijkstra`](Self::dijkstra).
    pub(crate) fn astar(&mut self) {
        let goal = self.grid.position(self.end);
        let heuristic: Vec<u32> = self
            .grid
            .iter()
            .map(|(p, _)| manhattan(p, goal))
            .collect();

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(NodeRef {
            idx: self.start,
            f: heuristic[self.start],
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            match self.visit(ci) {
                Visit::Discard => continue,
                Visit::Exhausted | Visit::Goal => break,
                Visit::Expand => {}
            }
            let current_g = self.grid[ci].distance;

            for &ni in nbuf.open(self.grid, ci) {
                let tentative_g = current_g + 1;
                let n = &mut self.grid[ni];
                if tentative_g >= n.distance {
                    continue;
                }
                n.distance = tentative_g;
                n.predecessor = Some(ci);
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative_g + heuristic[ni],
                    seq,
                });
            }
        }

        self.nbuf = nbuf;
    }
}
