use pathmaze_core::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::kind::MazeKind;
use crate::step::Maze;

/// Maze generator owning its random source.
///
/// Each generator is meant for a single caller: create one per request (or
/// per thread) instead of sharing it. Use [`MazeGen::seeded`] for
/// reproducible layouts.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Generator with a fixed seed; the same seed and arguments always give
    /// the same maze and step log.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    /// Create a new MazeGen drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Build a `rows × cols` maze with the given recipe.
    ///
    /// `start` and `end` must lie inside the grid; both are passable in the
    /// result.
    pub fn generate(
        &mut self,
        kind: MazeKind,
        rows: usize,
        cols: usize,
        start: Position,
        end: Position,
    ) -> Maze {
        match kind {
            MazeKind::RecursiveDivision => self.recursive_division(rows, cols, start, end),
            MazeKind::BinaryTree => self.binary_tree(rows, cols, start, end),
        }
    }

    /// Like [`generate`](Self::generate), selecting the recipe by name.
    pub fn generate_by_name(
        &mut self,
        kind: &str,
        rows: usize,
        cols: usize,
        start: Position,
        end: Position,
    ) -> Result<Maze, MazeError> {
        let kind = kind.parse::<MazeKind>()?;
        Ok(self.generate(kind, rows, cols, start, end))
    }
}
