use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;

/// The closed set of maze recipes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum MazeKind {
    RecursiveDivision,
    BinaryTree,
}

impl MazeKind {
    pub const ALL: [MazeKind; 2] = [MazeKind::RecursiveDivision, MazeKind::BinaryTree];

    /// Canonical selector name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            MazeKind::RecursiveDivision => "RECURSIVE_DIVISION",
            MazeKind::BinaryTree => "BINARY_TREE",
        }
    }
}

impl fmt::Display for MazeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeKind {
    type Err = MazeError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_uppercase().replace('-', "_");
        match norm.as_str() {
            "RECURSIVE_DIVISION" => Ok(MazeKind::RecursiveDivision),
            "BINARY_TREE" => Ok(MazeKind::BinaryTree),
            _ => Err(MazeError::InvalidMazeKind(s.to_owned())),
        }
    }
}
