//! Game of Life on three boundary topologies
//!
//! This library simulates Conway's Game of Life on a finite grid whose edges
//! behave as a dead hedge, a torus, or a Klein bottle, with grid seeding
//! from Life 1.05 / 1.06 pattern files at arbitrary offsets.

pub mod config;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod utils;

pub use config::Settings;
pub use engine::{Grid, Simulation, Topology};
pub use error::LifeError;
pub use pattern::Offset;

use anyhow::{Context, Result};
use pattern::{import_pattern_file, seed_default};

/// Build a seeded simulation from validated settings
///
/// Imports every configured pattern slot before the first tick; with no
/// slots configured, the default three-cell seed applies so the starting
/// grid is always valid.
pub fn build_simulation(settings: &Settings) -> Result<Simulation> {
    settings.validate()?;

    let topology = settings.simulation.topology;
    let mut sim = Simulation::new(settings.grid.rows, settings.grid.cols, topology)
        .context("Failed to create simulation grids")?;

    if settings.patterns.is_empty() {
        seed_default(sim.grid_mut()).context("Failed to seed default pattern")?;
    } else {
        for slot in &settings.patterns {
            import_pattern_file(&slot.file, topology, slot.offset, sim.grid_mut())?;
        }
    }

    Ok(sim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PatternSlot;
    use tempfile::tempdir;

    #[test]
    fn test_build_simulation_with_default_seed() {
        let settings = Settings::default();
        let sim = build_simulation(&settings).unwrap();
        assert_eq!(sim.grid().live_cells(), vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_build_simulation_with_patterns() {
        let dir = tempdir().unwrap();
        pattern::create_example_patterns(dir.path()).unwrap();

        let mut settings = Settings::default();
        settings.simulation.topology = Topology::Torus;
        settings.patterns = vec![PatternSlot {
            file: dir.path().join("glider_106.lif"),
            offset: Offset::new(10, 10),
        }];

        let sim = build_simulation(&settings).unwrap();
        assert_eq!(sim.population(), 5);
        assert_eq!(sim.topology(), Topology::Torus);
    }

    #[test]
    fn test_build_simulation_rejects_bad_settings() {
        let mut settings = Settings::default();
        settings.grid.cols = 1;
        assert!(build_simulation(&settings).is_err());
    }
}
