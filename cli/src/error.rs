use std::path::PathBuf;

use pathmaze_core::{ParseGridError, Position};
use pathmaze_maze::MazeError;
use pathmaze_paths::PathError;
use thiserror::Error;

/// Everything that can stop a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("rows and columns must be greater than 0")]
    InvalidSize,
    #[error("start coordinates {0} out of bounds")]
    StartOutOfBounds(Position),
    #[error("end coordinates {0} out of bounds")]
    EndOutOfBounds(Position),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("cannot parse grid: {0}")]
    Grid(#[from] ParseGridError),
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}
