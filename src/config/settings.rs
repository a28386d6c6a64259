//! Configuration settings for the simulation

use crate::engine::Topology;
use crate::error::LifeError;
use crate::pattern::Offset;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of pattern slots per run
pub const MAX_PATTERN_SLOTS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub patterns: Vec<PatternSlot>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub topology: Topology,
    pub generations: u64,
}

/// One pattern source and the offset it is placed at
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternSlot {
    pub file: PathBuf,
    #[serde(default)]
    pub offset: Offset,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub directory: PathBuf,
    /// Print the grid every N generations; 0 prints only the final state
    pub print_every: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig { rows: 25, cols: 25 },
            simulation: SimulationConfig {
                topology: Topology::Flat,
                generations: 100,
            },
            patterns: Vec::new(),
            output: OutputConfig {
                format: OutputFormat::Text,
                directory: PathBuf::from("output/runs"),
                print_every: 1,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    ///
    /// Extents below 3x3 are rejected here, before any grid exists; the
    /// stepper needs a distinct edge ring and interior.
    pub fn validate(&self) -> Result<()> {
        if self.grid.rows < 3 || self.grid.cols < 3 {
            return Err(LifeError::GridTooSmall {
                rows: self.grid.rows,
                cols: self.grid.cols,
            }
            .into());
        }

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.patterns.len() > MAX_PATTERN_SLOTS {
            return Err(LifeError::TooManyPatterns {
                count: self.patterns.len(),
                max: MAX_PATTERN_SLOTS,
            }
            .into());
        }

        for slot in &self.patterns {
            if !slot.file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", slot.file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(topology) = cli_overrides.topology {
            self.simulation.topology = topology;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if !cli_overrides.patterns.is_empty() {
            self.patterns = cli_overrides.patterns.clone();
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub topology: Option<Topology>,
    pub generations: Option<u64>,
    pub patterns: Vec<PatternSlot>,
    pub output_dir: Option<PathBuf>,
}
