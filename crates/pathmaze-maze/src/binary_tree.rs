use pathmaze_core::{Direction, Grid, Position};
use rand::Rng;

use crate::mazegen::MazeGen;
use crate::step::{Maze, Recorder, StepKind};

impl<R: Rng> MazeGen<R> {
    /// Generate a maze with the binary-tree recipe.
    ///
    /// Rooms are the interior cells with an odd row and an odd column. The
    /// grid is first swept to walls, then every room is opened. Each room
    /// except the bottom-right one then carves the wall to its right or
    /// below: always right on the last room row, always down on the last
    /// room column, a coin flip elsewhere. The carved edges form a spanning
    /// tree over the rooms.
    ///
    /// Rooms never touch the outer ring: with an even `rows` (or `cols`) the
    /// odd cells of the last row (or column) stay walled with the border.
    pub fn binary_tree(&mut self, rows: usize, cols: usize, start: Position, end: Position) -> Maze {
        let mut rec = Recorder::new(Grid::new(rows, cols), start, end);

        for row in 0..rows {
            for col in 0..cols {
                rec.set(Position::new(row, col), true, StepKind::Wall);
            }
        }

        let room_rows: Vec<usize> = (1..rows.saturating_sub(1)).step_by(2).collect();
        let room_cols: Vec<usize> = (1..cols.saturating_sub(1)).step_by(2).collect();

        for &row in &room_rows {
            for &col in &room_cols {
                rec.set(Position::new(row, col), false, StepKind::Passage);
            }
        }

        let (Some(&last_row), Some(&last_col)) = (room_rows.last(), room_cols.last()) else {
            rec.force_endpoints();
            return rec.finish();
        };

        let mut carved = 0usize;
        for &row in &room_rows {
            for &col in &room_cols {
                let dir = match (row == last_row, col == last_col) {
                    (true, true) => continue,
                    (true, false) => Direction::Right,
                    (false, true) => Direction::Down,
                    (false, false) => {
                        if self.rng.random_bool(0.5) {
                            Direction::Right
                        } else {
                            Direction::Down
                        }
                    }
                };
                if let Some(p) = Position::new(row, col).step(dir, rows, cols) {
                    rec.set(p, false, StepKind::Passage);
                    carved += 1;
                }
            }
        }

        rec.force_endpoints();
        let maze = rec.finish();
        log::debug!(
            "binary tree {rows}x{cols}: {} rooms, {carved} carved, {} steps",
            room_rows.len() * room_cols.len(),
            maze.steps.len()
        );
        maze
    }
}
