//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use pathmaze_core::Position;

#[derive(Parser, Debug)]
#[command(version, about, name = "pathmaze")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json, global = true)]
    pub format: Format,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a maze and print its grid and step log
    Maze {
        /// RECURSIVE_DIVISION or BINARY_TREE
        kind: String,
        #[command(flatten)]
        area: Area,
        /// Seed for reproducible layouts
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Search a grid and print the visit order and path
    Solve {
        /// DIJKSTRA, A_STAR, BFS or DFS
        algorithm: String,
        #[command(flatten)]
        area: Area,
        /// Generate the grid with this maze recipe first
        #[arg(long, conflicts_with = "grid")]
        maze: Option<String>,
        /// Read the grid from an ASCII file (`#` wall, `.` open)
        #[arg(long)]
        grid: Option<PathBuf>,
        /// Seed for the maze recipe
        #[arg(long, requires = "maze")]
        seed: Option<u64>,
    },
}

/// Grid size and endpoints shared by both subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct Area {
    /// Number of rows (ignored with --grid)
    #[arg(long, default_value_t = 21)]
    pub rows: usize,
    /// Number of columns (ignored with --grid)
    #[arg(long, default_value_t = 41)]
    pub cols: usize,
    /// Start cell as `row,col` [default: 1,1]
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,
    /// End cell as `row,col` [default: rows-2,cols-2]
    #[arg(long, value_parser = parse_position)]
    pub end: Option<Position>,
}

impl Area {
    /// Start and end for a `rows × cols` grid, falling back to the
    /// cells just inside the top-left and bottom-right corners.
    pub fn endpoints(&self, rows: usize, cols: usize) -> (Position, Position) {
        let start = self
            .start
            .unwrap_or_else(|| Position::new(1.min(rows.saturating_sub(1)), 1.min(cols.saturating_sub(1))));
        let end = self
            .end
            .unwrap_or_else(|| Position::new(rows.saturating_sub(2), cols.saturating_sub(2)));
        (start, end)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Ascii,
}

/// Parse `row,col`.
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{s}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row `{row}`: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("bad column `{col}`: {e}"))?;
    Ok(Position::new(row, col))
}
