use std::collections::BinaryHeap;

use crate::search::{NodeRef, Search, Visit};

impl Search<'_> {
    /// Uniform-cost search keyed on distance from the start.
    ///
    /// A neighbour is re-inserted whenever its distance improves; older
    /// entries for the same cell are dropped when popped.
    pub(crate) fn dijkstra(&mut self) {
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq = 0u64;
        open.push(NodeRef {
            idx: self.start,
            f: 0,
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
                let tentative = current_g + 1;
                let n = &mut self.grid[ni];
                if tentative >= n.distance {
                    continue;
                }
                n.distance = tentative;
                n.predecessor = Some(ci);
                seq += 1;
                open.push(NodeRef {
                    idx: ni,
                    f: tentative,
                    seq,
                });
            }
        }

        self.nbuf = nbuf;
    }
}
