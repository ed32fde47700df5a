//! Grid module - the N x N matrix of levels
//!
//! Uses a flat row-major vector so any side length from `MIN_GRID_SIZE` to
//! `MAX_GRID_SIZE` shares one representation.
//! Coordinates: row 0 is the top row, column 0 is the leftmost column.

use std::fmt;

use crate::error::EngineError;
use crate::line::LineBuf;
use crate::types::{
    tile_value, Coord, Level, DEFAULT_GRID_SIZE, EMPTY, MAX_GRID_SIZE, MAX_LEVEL, MIN_GRID_SIZE,
};

/// Square grid of cell levels
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Row-major cells (row * size + col)
    cells: Vec<Level>,
}

impl Grid {
    /// Create an empty grid with the given side length
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(EngineError::InvalidGridSize { size });
        }
        Ok(Self {
            size,
            cells: vec![EMPTY; size * size],
        })
    }

    /// Build a grid from explicit rows (top row first).
    ///
    /// The number of rows sets the side length; every row must have that many
    /// cells, and no level may exceed `MAX_LEVEL`.
    pub fn from_rows<R: AsRef<[Level]>>(rows: &[R]) -> Result<Self, EngineError> {
        let mut grid = Self::new(rows.len())?;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != grid.size {
                return Err(EngineError::RaggedRows {
                    row: r,
                    expected: grid.size,
                });
            }
            if let Some(c) = row.iter().position(|level| *level > MAX_LEVEL) {
                return Err(EngineError::InvalidLevel {
                    row: r,
                    col: c,
                    level: row[c],
                });
            }
            grid.cells[r * grid.size..(r + 1) * grid.size].copy_from_slice(row);
        }
        Ok(grid)
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        Some(coord.row * self.size + coord.col)
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Level at `coord`, `None` when out of bounds
    pub fn get(&self, coord: Coord) -> Option<Level> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Overwrite one cell. Only the engine mutates a live grid.
    pub(crate) fn set(&mut self, coord: Coord, level: Level) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = level;
        }
    }

    /// Empty every cell
    pub(crate) fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Level] {
        &self.cells
    }

    /// Copy of row `i`, left to right
    pub fn row(&self, i: usize) -> LineBuf {
        self.cells[i * self.size..(i + 1) * self.size]
            .iter()
            .copied()
            .collect()
    }

    /// Copy of column `i`, top to bottom
    pub fn column(&self, i: usize) -> LineBuf {
        (0..self.size).map(|r| self.cells[r * self.size + i]).collect()
    }

    /// Rows as nested vectors (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Level>> {
        self.cells.chunks(self.size).map(<[Level]>::to_vec).collect()
    }

    /// Empty cells in row-major order
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, level)| **level == EMPTY)
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|level| **level != EMPTY).count()
    }

    /// Largest level on the grid (0 when empty)
    pub fn highest_level(&self) -> Level {
        self.cells.iter().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of displayed tile values. Merges conserve it; each spawn adds 2.
    ///
    /// Saturates at `u64::MAX`.
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .fold(0u64, |sum, level| sum.saturating_add(tile_value(*level)))
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&EMPTY)
    }

    /// True if some push would change the grid: an empty cell or two equal
    /// horizontal/vertical neighbours below `MAX_LEVEL` exist.
    pub fn has_moves(&self) -> bool {
        if !self.is_full() {
            return true;
        }
        let n = self.size;
        (0..n).any(|r| {
            (0..n).any(|c| {
                let level = self.cells[r * n + c];
                level < MAX_LEVEL
                    && ((c + 1 < n && self.cells[r * n + c + 1] == level)
                        || (r + 1 < n && self.cells[(r + 1) * n + c] == level))
            })
        })
    }

    /// Mirror left to right
    pub fn reflected_horizontally(&self) -> Self {
        let rows: Vec<Vec<Level>> = self
            .to_rows()
            .into_iter()
            .map(|mut row| {
                row.reverse();
                row
            })
            .collect();
        Self {
            size: self.size,
            cells: rows.concat(),
        }
    }

    /// Swap rows and columns
    pub fn transposed(&self) -> Self {
        let n = self.size;
        let mut cells = vec![EMPTY; n * n];
        for r in 0..n {
            for c in 0..n {
                cells[c * n + r] = self.cells[r * n + c];
            }
        }
        Self { size: n, cells }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            cells: vec![EMPTY; DEFAULT_GRID_SIZE * DEFAULT_GRID_SIZE],
        }
    }
}

/// Board dump, one row per line, levels separated by spaces.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (c, level) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{level}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
