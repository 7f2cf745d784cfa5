use std::collections::VecDeque;

use crate::search::{Search, Visit};

impl Search<'_> {
    /// Breadth-first search.
    ///
    /// Each cell is enqueued once, when first discovered; its distance and
    /// predecessor are fixed at that point.
    pub(crate) fn bfs(&mut self) {
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(self.start);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            match self.visit(ci) {
                Visit::Discard => continue,
                Visit::Exhausted | Visit::Goal => break,
                Visit::Expand => {}
            }
            let current_dist = self.grid[ci].distance;

            for &ni in nbuf.open(self.grid, ci) {
                let n = &mut self.grid[ni];
                if n.is_reached() {
                    continue;
                }
                n.distance = current_dist + 1;
                n.predecessor = Some(ci);
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
    }
}
