//! ASCII rendering of grids, mazes and search results.

use std::fmt::Write as _;

use pathmaze_core::{Grid, Position};
use pathmaze_maze::{Maze, StepKind};
use pathmaze_paths::PathResult;

const WALL: char = '#';
const OPEN: char = '.';
const VISITED: char = 'o';
const PATH: char = '*';
const START: char = 'S';
const END: char = 'E';

/// Maze layout followed by a summary of the step log.
pub fn maze(maze: &Maze) -> String {
    let count = |kind| maze.steps.iter().filter(|s| s.kind == kind).count();
    let mut out = maze.grid.to_string();
    let _ = writeln!(
        out,
        "steps: {} ({} border, {} wall, {} passage)",
        maze.steps.len(),
        count(StepKind::Border),
        count(StepKind::Wall),
        count(StepKind::Passage)
    );
    out
}

/// Grid with visited cells, the path and both endpoints overlaid.
pub fn search(grid: &Grid, res: &PathResult, start: Position, end: Position) -> String {
    let mut canvas: Vec<char> = grid
        .cells()
        .iter()
        .map(|c| if c.is_wall { WALL } else { OPEN })
        .collect();
    let mut paint = |p: Position, ch: char| {
        if let Some(i) = grid.index(p) {
            canvas[i] = ch;
        }
    };
    for c in &res.visited_order {
        paint(c.pos(), VISITED);
    }
    for c in &res.path {
        paint(c.pos(), PATH);
    }
    paint(start, START);
    paint(end, END);

    let mut out = String::with_capacity(canvas.len() + grid.rows() + 64);
    for row in canvas.chunks(grid.cols().max(1)) {
        out.extend(row);
        out.push('\n');
    }
    match res.path_len() {
        Some(len) => {
            let _ = writeln!(out, "visited: {}, path length: {len}", res.visited_order.len());
        }
        None => {
            let _ = writeln!(out, "visited: {}, no path", res.visited_order.len());
        }
    }
    out
}
