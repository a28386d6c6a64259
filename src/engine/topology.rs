//! Boundary topologies and the edge-cell update pass
//!
//! Interior cells never see the boundary, so the topology only decides two
//! things: how an out-of-range coordinate folds back into the grid, and how
//! the outer ring of cells counts its neighbors.

use super::{Grid, LifeRules};
use crate::error::LifeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the grid's edges connect to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topology {
    /// Dead hedge: nothing beyond the edge, boundary cells have fewer
    /// neighbors
    #[serde(alias = "hedge")]
    Flat,
    /// Both axes wrap around to the opposite edge
    Torus,
    /// Rows wrap like a torus; crossing a column edge re-enters on the
    /// opposite column with the row reflected (a non-orientable surface)
    Klein,
}

impl Topology {
    /// Fold a possibly-out-of-range coordinate into the grid
    ///
    /// `x` is the column axis, `y` the row axis, matching pattern-file
    /// coordinates. Flat refuses anything outside the grid; Torus and Klein
    /// always succeed. In-range coordinates come back unchanged.
    pub fn fold_coordinate(
        &self,
        x: i64,
        y: i64,
        rows: usize,
        cols: usize,
    ) -> Result<(usize, usize), LifeError> {
        let (irows, icols) = (rows as i64, cols as i64);
        match self {
            Topology::Flat => {
                if x >= 0 && x < icols && y >= 0 && y < irows {
                    Ok((x as usize, y as usize))
                } else {
                    Err(LifeError::OutOfBounds { x, y })
                }
            }
            Topology::Torus => {
                let fx = x.rem_euclid(icols);
                let fy = y.rem_euclid(irows);
                Ok((fx as usize, fy as usize))
            }
            Topology::Klein => {
                // The row axis wraps first so the reflection below acts on
                // an in-range row. The column axis is periodic over twice
                // the width: the second half is the mirrored copy.
                let mut fy = y.rem_euclid(irows);
                let mut fx = x.rem_euclid(2 * icols);
                if fx >= icols {
                    fy = irows - 1 - fy;
                    fx -= icols;
                }
                Ok((fx as usize, fy as usize))
            }
        }
    }

    /// Whether the neighbor at column `x`, row `y` is alive, folding the
    /// coordinate under this topology; flat reads off-grid positions as dead
    fn neighbor_alive(&self, grid: &Grid, x: i64, y: i64) -> bool {
        match self.fold_coordinate(x, y, grid.rows(), grid.cols()) {
            Ok((fx, fy)) => grid.get(fy, fx),
            Err(_) => false,
        }
    }

    /// Count the live neighbors of a cell with boundary folding applied
    pub fn count_neighbors(&self, grid: &Grid, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for dy in [-1i64, 0, 1] {
            for dx in [-1i64, 0, 1] {
                if dy == 0 && dx == 0 {
                    continue;
                }
                if self.neighbor_alive(grid, col as i64 + dx, row as i64 + dy) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Update every cell on the outer ring of `present` into `future`
    ///
    /// Visits row 0, row rows-1, and the first and last column of the rows
    /// between, each cell exactly once, corners included.
    pub fn edge_pass(&self, present: &Grid, future: &mut Grid) -> Result<(), LifeError> {
        for (row, col) in ring_cells(present.rows(), present.cols()) {
            let neighbors = self.count_neighbors(present, row, col);
            let next = LifeRules::next_state(present.get(row, col), neighbors);
            future.set(row, col, next)?;
        }
        Ok(())
    }
}

/// Every boundary cell of a rows x cols grid, exactly once
fn ring_cells(rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
    let top = (0..cols).map(move |col| (0, col));
    let bottom = (0..cols)
        .filter(move |_| rows > 1)
        .map(move |col| (rows - 1, col));
    let left = (1..rows.saturating_sub(1)).map(move |row| (row, 0));
    let right = (1..rows.saturating_sub(1))
        .filter(move |_| cols > 1)
        .map(move |row| (row, cols - 1));
    top.chain(bottom).chain(left).chain(right)
}

impl FromStr for Topology {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flat" | "hedge" => Ok(Topology::Flat),
            "torus" => Ok(Topology::Torus),
            "klein" => Ok(Topology::Klein),
            other => Err(LifeError::InvalidTopology {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topology::Flat => "flat",
            Topology::Torus => "torus",
            Topology::Klein => "klein",
        };
        write!(f, "{}", name)
    }
}
