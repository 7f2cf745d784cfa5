//! `pathmaze`: generate mazes and run grid path searches from the shell.

mod args;
mod error;
mod logger;
mod render;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pathmaze_core::{Grid, Position};
use pathmaze_maze::{MazeGen, MazeKind};
use pathmaze_paths::{Algorithm, PathResult, find_path};
use rand::rngs::StdRng;
use serde::Serialize;

use crate::args::{Area, Cli, Command, Format};
use crate::error::CliError;

/// JSON shape of a `solve` run.
#[derive(Serialize)]
struct SolveReport<'a> {
    algorithm: Algorithm,
    start: Position,
    end: Position,
    #[serde(flatten)]
    result: &'a PathResult,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logger::init(logger::level_for(cli.verbose, cli.quiet)) {
        eprintln!("warning: {e}");
    }

    let mut out = io::stdout().lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    match &cli.command {
        Command::Maze { kind, area, seed } => {
            let kind: MazeKind = kind.parse()?;
            let (start, end) = checked_endpoints(area, area.rows, area.cols)?;
            log::info!(
                "maze request: type={kind}, rows={}, cols={}, start={start}, end={end}",
                area.rows,
                area.cols
            );
            let maze = maze_gen(*seed).generate(kind, area.rows, area.cols, start, end);
            log::info!("maze generated: {} steps", maze.steps.len());

            match cli.format {
                Format::Json => {
                    serde_json::to_writer_pretty(&mut *out, &maze)?;
                    writeln!(out)?;
                }
                Format::Ascii => write!(out, "{}", render::maze(&maze))?,
            }
        }
        Command::Solve {
            algorithm,
            area,
            maze,
            grid,
            seed,
        } => {
            let algorithm: Algorithm = algorithm.parse()?;
            let (mut grid, start, end) = match (maze, grid) {
                (_, Some(path)) => {
                    let grid = load_grid(path)?;
                    let (start, end) = checked_endpoints(area, grid.rows(), grid.cols())?;
                    (grid, start, end)
                }
                (Some(kind), None) => {
                    let kind: MazeKind = kind.parse()?;
                    let (start, end) = checked_endpoints(area, area.rows, area.cols)?;
                    let maze = maze_gen(*seed).generate(kind, area.rows, area.cols, start, end);
                    (maze.grid, start, end)
                }
                (None, None) => {
                    let (start, end) = checked_endpoints(area, area.rows, area.cols)?;
                    (Grid::new(area.rows, area.cols), start, end)
                }
            };

            for p in [start, end] {
                if grid.set_wall(p, false) {
                    log::info!("opened wall at endpoint {p}");
                }
            }

            log::info!(
                "pathfinding request: algorithm={algorithm}, rows={}, cols={}, start={start}, end={end}",
                grid.rows(),
                grid.cols()
            );
            let res = find_path(&mut grid, start, end, algorithm);
            if !res.found() {
                log::warn!("{algorithm}: no path from {start} to {end}");
            }

            match cli.format {
                Format::Json => {
                    let report = SolveReport {
                        algorithm,
                        start,
                        end,
                        result: &res,
                    };
                    serde_json::to_writer_pretty(&mut *out, &report)?;
                    writeln!(out)?;
                }
                Format::Ascii => write!(out, "{}", render::search(&grid, &res, start, end))?,
            }
        }
    }
    Ok(())
}

/// Generator seeded from `seed`, or from OS entropy without one.
fn maze_gen(seed: Option<u64>) -> MazeGen<StdRng> {
    match seed {
        Some(seed) => MazeGen::seeded(seed),
        None => MazeGen::from_entropy(),
    }
}

/// Resolve the endpoints for a `rows × cols` grid and check the size and
/// bounds the engines rely on.
fn checked_endpoints(area: &Area, rows: usize, cols: usize) -> Result<(Position, Position), CliError> {
    if rows == 0 || cols == 0 {
        return Err(CliError::InvalidSize);
    }
    let (start, end) = area.endpoints(rows, cols);
    let in_bounds = |p: Position| p.row < rows && p.col < cols;
    if !in_bounds(start) {
        return Err(CliError::StartOutOfBounds(start));
    }
    if !in_bounds(end) {
        return Err(CliError::EndOutOfBounds(end));
    }
    Ok((start, end))
}

fn load_grid(path: &Path) -> Result<Grid, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid: Grid = text.parse()?;
    log::debug!("loaded {}x{} grid from {}", grid.rows(), grid.cols(), path.display());
    Ok(grid)
}
