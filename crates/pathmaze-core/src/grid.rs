//! The [`Grid`] type: a row-major 2D array of [`Cell`]s.
//!
//! The grid owns every cell. Anything that needs to refer to another cell
//! (search predecessors, frontier entries) stores a flat index obtained from
//! [`Grid::index`], never a reference.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use thiserror::Error;

use crate::cell::Cell;
use crate::geom::{Direction, Position};

/// Character used for walls in the ASCII form.
const WALL_CHAR: char = '#';
/// Character used for passages in the ASCII form.
const OPEN_CHAR: char = '.';

/// A `rows × cols` grid of cells stored row-major.
///
/// Deserialization checks that `cells` holds exactly `rows × cols` entries in
/// row-major order and that every predecessor index is in range.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of open cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, false)
    }

    /// Create a grid where every cell has the given wall flag.
    pub fn filled(rows: usize, cols: usize, is_wall: bool) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Position::new(row, col)).with_wall(is_wall));
            }
        }
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.row < self.rows && p.col < self.cols
    }

    /// Whether `p` lies on the outermost ring of the grid.
    #[inline]
    pub fn is_border(&self, p: Position) -> bool {
        self.contains(p)
            && (p.row == 0 || p.col == 0 || p.row + 1 == self.rows || p.col + 1 == self.cols)
    }

    /// Convert a position to a flat index. Returns `None` if out of range.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        self.contains(p).then(|| p.row * self.cols + p.col)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn position(&self, idx: usize) -> Position {
        Position::new(idx / self.cols, idx % self.cols)
    }

    /// The cell at `p`, if in range.
    #[inline]
    pub fn at(&self, p: Position) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, if in range.
    #[inline]
    pub fn at_mut(&mut self, p: Position) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Whether `p` is a wall. Positions outside the grid count as walls.
    #[inline]
    pub fn is_wall(&self, p: Position) -> bool {
        self.at(p).is_none_or(|c| c.is_wall)
    }

    /// Set the wall flag at `p`. Returns `true` if the flag changed; out of
    /// range positions are ignored.
    pub fn set_wall(&mut self, p: Position, is_wall: bool) -> bool {
        match self.at_mut(p) {
            Some(cell) if cell.is_wall != is_wall => {
                cell.is_wall = is_wall;
                true
            }
            _ => false,
        }
    }

    /// Reset every cell's search state.
    pub fn reset_search(&mut self) {
        for cell in &mut self.cells {
            cell.reset_search();
        }
    }

    /// Number of non-wall cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_wall).count()
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Flat indices of the in-range orthogonal neighbours of `idx`, in
    /// [`Direction::ALL`] order (right, down, left, up).
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let p = self.position(idx);
        Direction::ALL
            .into_iter()
            .filter_map(move |d| p.step(d, self.rows, self.cols))
            .map(|n| n.row * self.cols + n.col)
    }

    /// Row-major iterator over `(Position, &Cell)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            inner: self.cells.iter(),
        }
    }
}

impl Index<usize> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }
}

impl IndexMut<usize> for Grid {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }
}

impl fmt::Display for Grid {
    /// One line per row, `#` for walls and `.` for passages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for cell in row {
                let ch = if cell.is_wall { WALL_CHAR } else { OPEN_CHAR };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ASCII parsing
// ---------------------------------------------------------------------------

/// Errors produced when parsing a grid from its ASCII form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {ch:?} at ({row}, {col})")]
    UnknownChar { ch: char, row: usize, col: usize },
    #[error("{rows}x{cols} grid has {found} cells")]
    Shape {
        rows: usize,
        cols: usize,
        found: usize,
    },
    #[error("cell {index} is out of place or links outside the grid")]
    Cell { index: usize },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parse the format produced by [`Display`](fmt::Display). Blank lines
    /// are skipped and trailing whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(ParseGridError::Empty);
        };
        let cols = first.chars().count();
        let mut grid = Grid::new(lines.len(), cols);

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(ParseGridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let is_wall = match ch {
                    WALL_CHAR => true,
                    OPEN_CHAR => false,
                    _ => return Err(ParseGridError::UnknownChar { ch, row, col }),
                };
                grid.set_wall(Position::new(row, col), is_wall);
            }
        }
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Unchecked wire shape of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = ParseGridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let RawGrid { rows, cols, cells } = raw;
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(ParseGridError::Shape {
                rows,
                cols,
                found: cells.len(),
            });
        }
        let grid = Grid { rows, cols, cells };
        for (index, cell) in grid.cells.iter().enumerate() {
            let linked = cell.predecessor.is_none_or(|p| p < grid.cells.len());
            if cell.pos() != grid.position(index) || !linked {
                return Err(ParseGridError::Cell { index });
            }
        }
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Position, &Cell)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    inner: std::slice::Iter<'a, Cell>,
}

impl<'a> Iterator for GridIter<'a> {
    type Item = (Position, &'a Cell);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.inner.next()?;
        Some((cell.pos(), cell))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_at() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        let c = g.at(Position::new(2, 3)).copied();
        assert_eq!(c.map(|c| c.pos()), Some(Position::new(2, 3)));
        assert!(g.at(Position::new(3, 0)).is_none());
    }

    #[test]
    fn index_round_trip() {
        let g = Grid::new(4, 7);
        for (p, cell) in g.iter() {
            let i = g.index(p).unwrap();
            assert_eq!(g.position(i), p);
            assert_eq!(g[i].pos(), cell.pos());
        }
    }

    #[test]
    fn set_wall_reports_change() {
        let mut g = Grid::new(2, 2);
        let p = Position::new(1, 0);
        assert!(g.set_wall(p, true));
        assert!(!g.set_wall(p, true));
        assert!(g.is_wall(p));
        assert!(g.is_wall(Position::new(5, 5)));
        assert_eq!(g.open_count(), 3);
    }

    #[test]
    fn neighbors_clip_and_keep_order() {
        let g = Grid::new(3, 3);
        let centre = g.index(Position::new(1, 1)).unwrap();
        let ns: Vec<Position> = g.neighbors(centre).map(|i| g.position(i)).collect();
        assert_eq!(
            ns,
            vec![
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(1, 0),
                Position::new(0, 1),
            ]
        );
        let corner = g.index(Position::new(0, 0)).unwrap();
        assert_eq!(g.neighbors(corner).count(), 2);
    }

    #[test]
    fn border_detection() {
        let g = Grid::new(4, 5);
        assert!(g.is_border(Position::new(0, 2)));
        assert!(g.is_border(Position::new(3, 2)));
        assert!(g.is_border(Position::new(2, 4)));
        assert!(!g.is_border(Position::new(1, 1)));
        assert!(!g.is_border(Position::new(9, 9)));
    }

    #[test]
    fn ascii_round_trip() {
        let text = "#.#\n...\n#.#\n";
        let g: Grid = text.parse().unwrap();
        assert_eq!(g.rows(), 3);
        assert!(g.is_wall(Position::new(0, 0)));
        assert!(!g.is_wall(Position::new(1, 1)));
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Grid>(), Err(ParseGridError::Empty));
        assert_eq!(
            "..\n.\n".parse::<Grid>(),
            Err(ParseGridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            ".x\n".parse::<Grid>(),
            Err(ParseGridError::UnknownChar {
                ch: 'x',
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn reset_search_clears_all_cells() {
        let mut g = Grid::new(2, 2);
        g[0].distance = 0;
        g[0].visited = true;
        g[3].predecessor = Some(0);
        g.reset_search();
        assert!(g.cells().iter().all(|c| !c.visited && !c.is_reached()));
        assert!(g.cells().iter().all(|c| c.predecessor.is_none()));
    }
}
