//! Grid representation for the Game of Life simulation

use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finite Game of Life grid
///
/// Cells are stored in a single contiguous buffer in row-major order, so a
/// failed allocation can never leave partially-built rows behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid
    pub fn new(rows: usize, cols: usize) -> Result<Self, LifeError> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Create a grid from nested rows of cells
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: height,
                cols: width,
            });
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(LifeError::InvalidDimensions {
                rows: height,
                cols: width,
            });
        }

        let cells: Vec<bool> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: height,
            cols: width,
            cells,
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Convert 2D coordinates to the buffer index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell state; coordinates outside the grid read as dead
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell state
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        if row >= self.rows || col >= self.cols {
            return Err(LifeError::OutOfBounds {
                x: col as i64,
                y: row as i64,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = alive;
        Ok(())
    }

    /// Read-only row-major iteration over cell states
    ///
    /// This is the renderer boundary: one slice per row, one entry per cell.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.cols)
    }

    /// Coordinates of all living cells, row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut living = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) {
                    living.push((row, col));
                }
            }
        }
        living
    }

    /// Count of living cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check whether no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                let symbol = if cell { "⬛" } else { "⬜" };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
