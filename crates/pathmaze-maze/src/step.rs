use pathmaze_core::{Grid, Position};

/// What a logged step did to its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StepKind {
    Wall,
    Passage,
    Border,
}

/// One cell mutation, in generation order. Used for animation playback only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeStep {
    pub row: usize,
    pub col: usize,
    pub is_wall: bool,
    pub kind: StepKind,
}

impl MazeStep {
    #[inline]
    pub const fn pos(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// A generated maze: the final grid plus the log of how it was built.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    pub steps: Vec<MazeStep>,
}

impl Maze {
    /// Number of open cells in the final grid.
    pub fn passages(&self) -> usize {
        self.grid.open_count()
    }

    /// Replay the step log onto an open grid of the same size. Yields the
    /// final layout for every generator in this crate.
    pub fn replay(&self) -> Grid {
        let mut grid = Grid::new(self.grid.rows(), self.grid.cols());
        for step in &self.steps {
            grid.set_wall(step.pos(), step.is_wall);
        }
        grid
    }
}

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// Grid under construction plus its step log. Every write goes through
/// [`set`](Self::set) so the log stays in lockstep with the grid.
pub(crate) struct Recorder {
    pub(crate) grid: Grid,
    steps: Vec<MazeStep>,
    start: Position,
    end: Position,
}

impl Recorder {
    pub(crate) fn new(grid: Grid, start: Position, end: Position) -> Self {
        Self {
            grid,
            steps: Vec::new(),
            start,
            end,
        }
    }

    /// Whether `p` is one of the designated endpoints.
    #[inline]
    pub(crate) fn is_endpoint(&self, p: Position) -> bool {
        p == self.start || p == self.end
    }

    /// Write `p` and append the matching step.
    pub(crate) fn set(&mut self, p: Position, is_wall: bool, kind: StepKind) {
        self.grid.set_wall(p, is_wall);
        self.steps.push(MazeStep {
            row: p.row,
            col: p.col,
            is_wall,
            kind,
        });
    }

    /// Open the start and end cells, logging a passage step for each one
    /// that was a wall.
    pub(crate) fn force_endpoints(&mut self) {
        for p in [self.start, self.end] {
            if self.grid.contains(p) && self.grid.is_wall(p) {
                self.set(p, false, StepKind::Passage);
            }
        }
    }

    pub(crate) fn finish(self) -> Maze {
        Maze {
            grid: self.grid,
            steps: self.steps,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn step_kind_is_lowercase() {
        let step = MazeStep {
            row: 1,
            col: 2,
            is_wall: true,
            kind: StepKind::Border,
        };
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"border\""), "{json}");
        let back: MazeStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, back);
    }
}
