use thiserror::Error;

/// Errors surfaced by the search entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The algorithm selector did not name a known strategy.
    #[error("invalid algorithm: {0}")]
    InvalidAlgorithm(String),
}
