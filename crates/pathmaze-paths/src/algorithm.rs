use std::fmt;
use std::str::FromStr;

use crate::error::PathError;

/// The closed set of search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Every strategy, in declaration order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Canonical selector name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "DIJKSTRA",
            Algorithm::AStar => "A_STAR",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }

    /// Whether the strategy always returns a minimal-length path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PathError;

    /// Case-insensitive; `-` and `_` are interchangeable, so `a-star`,
    /// `A_STAR` and `astar` all select A*.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_uppercase().replace('-', "_");
        match norm.as_str() {
            "DIJKSTRA" => Ok(Algorithm::Dijkstra),
            "A_STAR" | "ASTAR" | "A*" => Ok(Algorithm::AStar),
            "BFS" => Ok(Algorithm::Bfs),
            "DFS" => Ok(Algorithm::Dfs),
            _ => Err(PathError::InvalidAlgorithm(s.to_owned())),
        }
    }
}
