use thiserror::Error;

/// Errors surfaced by the maze entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The maze selector did not name a known recipe.
    #[error("invalid maze type: {0}")]
    InvalidMazeKind(String),
}
