//! Run summaries written at the end of a simulation

use crate::config::OutputFormat;
use crate::engine::{Simulation, Topology};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Record of a completed run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub rows: usize,
    pub cols: usize,
    pub topology: Topology,
    pub generations: u64,
    pub initial_population: usize,
    pub final_population: usize,
    /// Living-cell count per generation, starting at generation 0
    pub population_history: Vec<usize>,
}

impl RunSummary {
    /// Build a summary from a finished simulation and its population trace
    pub fn from_simulation(sim: &Simulation, population_history: Vec<usize>) -> Self {
        Self {
            rows: sim.grid().rows(),
            cols: sim.grid().cols(),
            topology: sim.topology(),
            generations: sim.generation(),
            initial_population: population_history.first().copied().unwrap_or(0),
            final_population: sim.population(),
            population_history,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text rendering of the summary
    pub fn format_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Run: {}x{} grid, {} topology\n",
            self.rows, self.cols, self.topology
        ));
        output.push_str(&format!("Generations: {}\n", self.generations));
        output.push_str(&format!(
            "Population: {} → {}\n",
            self.initial_population, self.final_population
        ));
        output
    }

    /// Write the summary into `dir`, returning the file path
    pub fn save<P: AsRef<Path>>(&self, dir: P, format: &OutputFormat) -> Result<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        let path = match format {
            OutputFormat::Text => {
                let path = dir.join("summary.txt");
                std::fs::write(&path, self.format_text())?;
                path
            }
            OutputFormat::Json => {
                let path = dir.join("summary.json");
                std::fs::write(&path, self.to_json().context("Failed to serialize summary")?)?;
                path
            }
        };
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn finished_sim() -> (Simulation, Vec<usize>) {
        let mut sim = Simulation::new(5, 5, Topology::Torus).unwrap();
        sim.grid_mut().set(1, 1, true).unwrap();
        let mut history = vec![sim.population()];
        for _ in 0..3 {
            sim.step().unwrap();
            history.push(sim.population());
        }
        (sim, history)
    }

    #[test]
    fn test_summary_captures_run() {
        let (sim, history) = finished_sim();
        let summary = RunSummary::from_simulation(&sim, history);
        assert_eq!(summary.rows, 5);
        assert_eq!(summary.topology, Topology::Torus);
        assert_eq!(summary.generations, 3);
        assert_eq!(summary.initial_population, 1);
        // A lone cell dies in one tick
        assert_eq!(summary.final_population, 0);
        assert_eq!(summary.population_history.len(), 4);
    }

    #[test]
    fn test_summary_json_round_trip() {
        let (sim, history) = finished_sim();
        let summary = RunSummary::from_simulation(&sim, history);
        let json = summary.to_json().unwrap();
        let parsed: RunSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.final_population, summary.final_population);
        assert_eq!(parsed.topology, summary.topology);
    }

    #[test]
    fn test_summary_save() {
        let (sim, history) = finished_sim();
        let summary = RunSummary::from_simulation(&sim, history);
        let dir = tempdir().unwrap();

        let path = summary.save(dir.path(), &OutputFormat::Text).unwrap();
        assert!(path.ends_with("summary.txt"));
        assert!(path.exists());

        let path = summary.save(dir.path(), &OutputFormat::Json).unwrap();
        assert!(path.ends_with("summary.json"));
        assert!(path.exists());
    }
}
