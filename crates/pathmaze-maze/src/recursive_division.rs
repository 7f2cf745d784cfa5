use std::cmp::Ordering;

use pathmaze_core::{Grid, Position};
use rand::Rng;

use crate::mazegen::MazeGen;
use crate::step::{Maze, Recorder, StepKind};

/// An open rectangle of the interior still to be divided, in cells.
///
/// `top` and `left` are always odd. `bottom` and `right` are inclusive and
/// may be even when the chamber touches the last interior row or column of
/// an even-sized grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Chamber {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
}

impl Chamber {
    /// The interior `[1, rows-2] × [1, cols-2]`, if there is one.
    fn interior(rows: usize, cols: usize) -> Option<Self> {
        (rows >= 3 && cols >= 3).then(|| Chamber {
            top: 1,
            left: 1,
            bottom: rows - 2,
            right: cols - 2,
        })
    }

    /// Number of odd rows inside, where rooms and gaps sit.
    #[inline]
    fn rooms_high(self) -> usize {
        (self.bottom - self.top) / 2 + 1
    }

    /// Number of odd columns inside.
    #[inline]
    fn rooms_wide(self) -> usize {
        (self.right - self.left) / 2 + 1
    }
}

impl<R: Rng> MazeGen<R> {
    /// Generate a maze by recursive division.
    ///
    /// 1. Wall off the outer ring, logging one `Border` step per cell.
    /// 2. Split the interior `[1, rows-2] × [1, cols-2]` with a wall line
    ///    (horizontal if taller than wide, vertical if wider than tall, a
    ///    coin flip otherwise) on an even coordinate. The line spans the
    ///    whole chamber and leaves one gap on an odd coordinate.
    /// 3. Recurse into both halves, current wall first, until a chamber is
    ///    one room high or wide.
    ///
    /// Wall cells on `start` or `end` are never drawn; both endpoints are
    /// opened at the end if the border covered them.
    pub fn recursive_division(
        &mut self,
        rows: usize,
        cols: usize,
        start: Position,
        end: Position,
    ) -> Maze {
        let mut rec = Recorder::new(Grid::new(rows, cols), start, end);

        for row in 0..rows {
            for col in 0..cols {
                let p = Position::new(row, col);
                if rec.grid.is_border(p) {
                    rec.set(p, true, StepKind::Border);
                }
            }
        }

        // Explicit pre-order traversal: the second half is pushed first so
        // the first half (top or left) is fully divided before it.
        let mut stack: Vec<Chamber> = Chamber::interior(rows, cols).into_iter().collect();
        let mut splits = 0usize;
        while let Some(ch) = stack.pop() {
            let (high, wide) = (ch.rooms_high(), ch.rooms_wide());
            if high <= 1 || wide <= 1 {
                continue;
            }
            let horizontal = match high.cmp(&wide) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => self.rng.random_bool(0.5),
            };
            let (first, second) = if horizontal {
                self.split_horizontal(&mut rec, ch)
            } else {
                self.split_vertical(&mut rec, ch)
            };
            splits += 1;
            stack.push(second);
            stack.push(first);
        }

        rec.force_endpoints();
        let maze = rec.finish();
        log::debug!(
            "recursive division {rows}x{cols}: {splits} splits, {} steps",
            maze.steps.len()
        );
        maze
    }

    /// Draw a wall row across `ch` and return the chambers above and below.
    fn split_horizontal(&mut self, rec: &mut Recorder, ch: Chamber) -> (Chamber, Chamber) {
        let wall_row = ch.top + 2 * self.rng.random_range(0..ch.rooms_high() - 1) + 1;
        let gap_col = ch.left + 2 * self.rng.random_range(0..ch.rooms_wide());
        log::trace!("horizontal wall at row {wall_row}, gap at col {gap_col}");

        for col in ch.left..=ch.right {
            let p = Position::new(wall_row, col);
            if col != gap_col && !rec.is_endpoint(p) {
                rec.set(p, true, StepKind::Wall);
            }
        }

        let above = Chamber {
            bottom: wall_row - 1,
            ..ch
        };
        let below = Chamber {
            top: wall_row + 1,
            ..ch
        };
        (above, below)
    }

    /// Draw a wall column down `ch` and return the chambers left and right.
    fn split_vertical(&mut self, rec: &mut Recorder, ch: Chamber) -> (Chamber, Chamber) {
        let wall_col = ch.left + 2 * self.rng.random_range(0..ch.rooms_wide() - 1) + 1;
        let gap_row = ch.top + 2 * self.rng.random_range(0..ch.rooms_high());
        log::trace!("vertical wall at col {wall_col}, gap at row {gap_row}");

        for row in ch.top..=ch.bottom {
            let p = Position::new(row, wall_col);
            if row != gap_row && !rec.is_endpoint(p) {
                rec.set(p, true, StepKind::Wall);
            }
        }

        let left = Chamber {
            right: wall_col - 1,
            ..ch
        };
        let right = Chamber {
            left: wall_col + 1,
            ..ch
        };
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathmaze_paths::{Algorithm, find_path};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generate(seed: u64, rows: usize, cols: usize, start: Position, end: Position) -> Maze {
        MazeGen::new(StdRng::seed_from_u64(seed)).recursive_division(rows, cols, start, end)
    }

    #[test]
    fn border_is_walled_and_logged_first() {
        let (rows, cols) = (11, 15);
        let maze = generate(1, rows, cols, Position::new(1, 1), Position::new(9, 13));
        let border_cells = 2 * cols + 2 * (rows - 2);
        assert!(maze.steps[..border_cells].iter().all(|s| s.kind == StepKind::Border && s.is_wall));
        assert!(maze.steps[border_cells..].iter().all(|s| s.kind != StepKind::Border));
        for (p, cell) in maze.grid.iter() {
            if maze.grid.is_border(p) {
                assert!(cell.is_wall, "border cell {p} open");
            }
        }
    }

    #[test]
    fn border_endpoints_are_reopened() {
        let start = Position::new(0, 3);
        let end = Position::new(8, 8);
        let maze = generate(2, 9, 9, start, end);
        assert!(!maze.grid.is_wall(start));
        assert!(!maze.grid.is_wall(end));
        let tail: Vec<Position> = maze.steps[maze.steps.len() - 2..].iter().map(|s| s.pos()).collect();
        assert_eq!(tail, vec![start, end]);
        assert!(maze.steps[maze.steps.len() - 2..].iter().all(|s| s.kind == StepKind::Passage));
        for (p, cell) in maze.grid.iter() {
            if maze.grid.is_border(p) && p != start && p != end {
                assert!(cell.is_wall);
            }
        }
    }

    #[test]
    fn walls_on_even_coordinates_and_rooms_stay_open() {
        for seed in 0..20 {
            let maze = generate(seed, 13, 17, Position::new(1, 1), Position::new(11, 15));
            for step in maze.steps.iter().filter(|s| s.kind == StepKind::Wall) {
                assert!(step.row % 2 == 0 || step.col % 2 == 0, "seed {seed}: {:?}", step);
            }
            for (p, cell) in maze.grid.iter() {
                if p.row % 2 == 1 && p.col % 2 == 1 {
                    assert!(!cell.is_wall, "seed {seed}: room {p} walled");
                }
            }
        }
    }

    #[test]
    fn interior_endpoints_never_walled() {
        // (2, 2) and (6, 4) sit on even coordinates where wall lines may run.
        let start = Position::new(2, 2);
        let end = Position::new(6, 4);
        for seed in 0..50 {
            let maze = generate(seed, 9, 9, start, end);
            assert!(!maze.steps.iter().any(|s| s.is_wall && (s.pos() == start || s.pos() == end)));
            assert!(!maze.grid.is_wall(start));
            assert!(!maze.grid.is_wall(end));
        }
    }

    #[test]
    fn rooms_are_all_connected() {
        for seed in 0..20 {
            let start = Position::new(1, 1);
            let end = Position::new(13, 19);
            let mut maze = generate(seed, 15, 21, start, end);
            let res = find_path(&mut maze.grid, start, end, Algorithm::Bfs);
            assert!(res.found(), "seed {seed}");
            // Aim at the walled corner so the search exhausts everything
            // reachable from the start.
            let mut grid = maze.grid.clone();
            let all = find_path(&mut grid, start, Position::new(14, 20), Algorithm::Bfs);
            let reached: std::collections::HashSet<Position> = all.visited_positions().into_iter().collect();
            for (p, _) in maze.grid.iter() {
                if p.row % 2 == 1 && p.col % 2 == 1 {
                    assert!(reached.contains(&p), "seed {seed}: room {p} unreachable");
                }
            }
        }
    }

    /// Re-run the division over the step log. Each chamber that can still
    /// be split must be followed by exactly one wall line spanning it with a
    /// single gap on an odd coordinate. Endpoints must not lie on any wall
    /// line. Returns the number of lines checked.
    fn check_wall_lines(maze: &Maze, rows: usize, cols: usize) -> usize {
        let walls: Vec<Position> = maze
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Wall)
            .map(|s| s.pos())
            .collect();
        let mut cursor = 0;
        let mut lines = 0;
        let mut stack: Vec<Chamber> = Chamber::interior(rows, cols).into_iter().collect();
        while let Some(ch) = stack.pop() {
            if ch.rooms_high() <= 1 || ch.rooms_wide() <= 1 {
                continue;
            }
            let horizontal = walls[cursor].row == walls[cursor + 1].row;
            let span = if horizontal {
                ch.left..=ch.right
            } else {
                ch.top..=ch.bottom
            };
            let drawn = &walls[cursor..cursor + span.clone().count() - 1];
            cursor += drawn.len();
            lines += 1;

            let (line, along): (usize, Vec<usize>) = if horizontal {
                (drawn[0].row, drawn.iter().map(|p| p.col).collect())
            } else {
                (drawn[0].col, drawn.iter().map(|p| p.row).collect())
            };
            let across = |p: &Position| if horizontal { p.row } else { p.col };
            assert!(drawn.iter().all(|p| across(p) == line), "{ch:?}: ragged line");
            assert_eq!(line % 2, 0, "{ch:?}: wall on odd line {line}");
            let gaps: Vec<usize> = span.filter(|i| !along.contains(i)).collect();
            assert_eq!(gaps.len(), 1, "{ch:?}: gaps {gaps:?}");
            assert_eq!(gaps[0] % 2, 1, "{ch:?}: gap on even {}", gaps[0]);

            if horizontal {
                assert!(ch.top < line && line < ch.bottom);
                stack.push(Chamber { top: line + 1, ..ch });
                stack.push(Chamber { bottom: line - 1, ..ch });
            } else {
                assert!(ch.left < line && line < ch.right);
                stack.push(Chamber { left: line + 1, ..ch });
                stack.push(Chamber { right: line - 1, ..ch });
            }
        }
        assert_eq!(cursor, walls.len(), "wall steps outside any split");
        lines
    }

    #[test]
    fn every_wall_line_spans_its_chamber_with_one_gap() {
        for seed in 0..20 {
            for (rows, cols) in [(10, 10), (8, 12), (13, 17), (9, 14), (16, 7)] {
                let end = Position::new(rows - 2, cols - 2);
                let maze = generate(seed, rows, cols, Position::new(1, 1), end);
                assert!(check_wall_lines(&maze, rows, cols) > 0, "seed {seed} {rows}x{cols}");
            }
        }
    }

    #[test]
    fn even_sizes_divide_the_last_interior_row_and_col() {
        let (mut last_row, mut last_col) = (false, false);
        for seed in 0..20 {
            let maze = generate(seed, 10, 10, Position::new(1, 1), Position::new(8, 8));
            for step in maze.steps.iter().filter(|s| s.kind == StepKind::Wall) {
                last_row |= step.row == 8;
                last_col |= step.col == 8;
            }
        }
        assert!(last_row && last_col);
    }

    #[test]
    fn even_sizes_stay_connected() {
        for seed in 0..20 {
            for (rows, cols) in [(10, 10), (8, 12), (12, 9)] {
                let start = Position::new(1, 1);
                let mut maze = generate(seed, rows, cols, start, Position::new(rows - 2, cols - 2));
                let open = maze.grid.open_count();
                // The border corner is a wall, so the search exhausts the
                // region around the start.
                let res = find_path(&mut maze.grid, start, Position::ZERO, Algorithm::Bfs);
                assert_eq!(res.visited_order.len(), open, "seed {seed} {rows}x{cols}");
            }
        }
    }

    #[test]
    fn tiny_grids_are_all_border() {
        let maze = generate(0, 2, 4, Position::new(0, 0), Position::new(1, 3));
        assert_eq!(
            maze.steps.iter().filter(|s| s.kind == StepKind::Border).count(),
            8
        );
        assert!(!maze.steps.iter().any(|s| s.kind == StepKind::Wall));
    }

    #[test]
    fn three_by_three_has_no_interior_walls() {
        let maze = generate(0, 3, 3, Position::new(1, 1), Position::new(1, 1));
        assert_eq!(maze.steps.len(), 8);
        assert_eq!(maze.passages(), 1);
    }

    #[test]
    fn replay_reproduces_grid() {
        let maze = generate(9, 12, 10, Position::new(0, 0), Position::new(11, 9));
        assert_eq!(maze.replay(), maze.grid);
    }
}
