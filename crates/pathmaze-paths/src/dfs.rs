use crate::search::{Search, Visit};

impl Search<'_> {
    /// Depth-first exploration.
    ///
    /// Every open, unvisited neighbour is pushed with its distance and
    /// predecessor set at push time. A cell pushed again before it is popped
    /// takes the values of the latest push. The resulting path is valid but
    /// not necessarily shortest.
    pub(crate) fn dfs(&mut self) {
        let mut stack: Vec<usize> = vec![self.start];

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = stack.pop() {
            match self.visit(ci) {
                Visit::Discard => continue,
                Visit::Exhausted | Visit::Goal => break,
                Visit::Expand => {}
            }
            let current_dist = self.grid[ci].distance;

            for &ni in nbuf.open(self.grid, ci) {
                let n = &mut self.grid[ni];
                n.distance = current_dist + 1;
                n.predecessor = Some(ci);
                stack.push(ni);
            }
        }

        self.nbuf = nbuf;
    }
}

#[cfg(test)]
mod tests {
    use pathmaze_core::{Grid, Position};

    use crate::{Algorithm, find_path};

    #[test]
    fn explores_last_pushed_neighbour_first() {
        // From the top-left corner right then down are pushed, so down is
        // popped first and the search runs down the left column.
        let mut grid = Grid::new(3, 3);
        let res = find_path(&mut grid, Position::new(0, 0), Position::new(2, 2), Algorithm::Dfs);
        assert_eq!(
            &res.visited_positions()[..3],
            &[Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
        assert!(res.found());
    }

    #[test]
    fn last_push_wins() {
        // (1,1) is pushed first from (1,0) and again from (2,1); the second
        // push sets the predecessor used by the path.
        let mut grid = Grid::new(3, 3);
        let res = find_path(&mut grid, Position::new(0, 0), Position::new(1, 1), Algorithm::Dfs);
        assert_eq!(
            res.path_positions(),
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(1, 1),
            ]
        );
        assert_eq!(res.path.last().map(|c| c.distance), Some(4));
    }

    #[test]
    fn path_may_be_longer_than_optimal() {
        let mut d = Grid::new(4, 4);
        let mut b = Grid::new(4, 4);
        let end = Position::new(0, 3);
        let rd = find_path(&mut d, Position::ZERO, end, Algorithm::Dfs);
        let rb = find_path(&mut b, Position::ZERO, end, Algorithm::Bfs);
        assert!(rd.found());
        assert!(rd.path.len() > rb.path.len());
    }
}
