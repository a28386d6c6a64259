//! Generation advancement: interior pass and the double-buffered driver

use super::{Grid, LifeRules, Topology};
use crate::error::LifeError;
use itertools::Itertools;

/// Update every interior cell of `present` into `future`
///
/// Interior cells have all eight neighbors in range by construction, so no
/// topology is involved; this is the dominant O(rows * cols) cost of a tick.
pub fn interior_pass(present: &Grid, future: &mut Grid) -> Result<(), LifeError> {
    let (rows, cols) = (present.rows(), present.cols());
    for (row, col) in (1..rows.saturating_sub(1)).cartesian_product(1..cols.saturating_sub(1)) {
        let neighbors = present.get(row - 1, col - 1) as u8
            + present.get(row - 1, col) as u8
            + present.get(row - 1, col + 1) as u8
            + present.get(row, col + 1) as u8
            + present.get(row + 1, col + 1) as u8
            + present.get(row + 1, col) as u8
            + present.get(row + 1, col - 1) as u8
            + present.get(row, col - 1) as u8;
        let next = LifeRules::next_state(present.get(row, col), neighbors);
        future.set(row, col, next)?;
    }
    Ok(())
}

/// Compute one full generation from `present` into `future`
///
/// Runs the topology's edge pass, then the interior pass. Both read only
/// `present` and write only `future`; `present` is left unmodified, and the
/// caller owns the buffer exchange.
pub fn advance(present: &Grid, future: &mut Grid, topology: Topology) -> Result<(), LifeError> {
    topology.edge_pass(present, future)?;
    interior_pass(present, future)
}

/// The simulation driver owning the present and future grid buffers
#[derive(Debug, Clone)]
pub struct Simulation {
    present: Grid,
    future: Grid,
    topology: Topology,
    generation: u64,
}

impl Simulation {
    /// Create a simulation over an all-dead grid
    ///
    /// Extents below 3x3 leave no room for a distinct edge ring and
    /// interior and are rejected up front.
    pub fn new(rows: usize, cols: usize, topology: Topology) -> Result<Self, LifeError> {
        if rows < 3 || cols < 3 {
            return Err(LifeError::GridTooSmall { rows, cols });
        }
        Ok(Self {
            present: Grid::new(rows, cols)?,
            future: Grid::new(rows, cols)?,
            topology,
            generation: 0,
        })
    }

    /// Create a simulation from an already-seeded grid
    pub fn from_grid(grid: Grid, topology: Topology) -> Result<Self, LifeError> {
        if grid.rows() < 3 || grid.cols() < 3 {
            return Err(LifeError::GridTooSmall {
                rows: grid.rows(),
                cols: grid.cols(),
            });
        }
        let future = Grid::new(grid.rows(), grid.cols())?;
        Ok(Self {
            present: grid,
            future,
            topology,
            generation: 0,
        })
    }

    /// The current generation's grid, read-only
    pub fn grid(&self) -> &Grid {
        &self.present
    }

    /// Mutable access to the current grid, for seeding before the first tick
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.present
    }

    /// The boundary topology this simulation runs under
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of ticks executed so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count of living cells in the current generation
    pub fn population(&self) -> usize {
        self.present.population()
    }

    /// Advance one generation and swap the buffers
    pub fn step(&mut self) -> Result<(), LifeError> {
        advance(&self.present, &mut self.future, self.topology)?;
        std::mem::swap(&mut self.present, &mut self.future);
        self.generation += 1;
        Ok(())
    }

    /// Advance a fixed number of generations
    pub fn run(&mut self, generations: u64) -> Result<(), LifeError> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }
}
