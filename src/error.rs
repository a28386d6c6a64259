//! Error taxonomy for the simulation core

use thiserror::Error;

/// Errors surfaced by the grid, topology, and pattern-import layers
#[derive(Debug, Error)]
pub enum LifeError {
    /// Grid extents must both be at least one cell
    #[error("invalid grid dimensions {rows}x{cols}: both extents must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Advancing a generation needs a distinct edge ring and interior
    #[error("grid {rows}x{cols} is too small to simulate: both extents must be at least 3")]
    GridTooSmall { rows: usize, cols: usize },

    /// Flat topology rejects placement outside the grid
    #[error("cell ({x}, {y}) is out of bounds for the flat boundary")]
    OutOfBounds { x: i64, y: i64 },

    /// Pattern header marker is neither dialect 5 nor dialect 6
    #[error("pattern file version not recognized (expected a Life 1.05 or 1.06 header)")]
    UnknownFormat,

    /// A dialect-6 body line that is not a coordinate pair
    #[error("malformed pattern line {line}: {content:?}")]
    MalformedPattern { line: usize, content: String },

    /// At most three pattern slots are supported per run
    #[error("{count} pattern slots configured, at most {max} are supported")]
    TooManyPatterns { count: usize, max: usize },

    /// Unrecognized topology name in configuration
    #[error("invalid topology {name:?}: expected \"hedge\", \"flat\", \"torus\", or \"klein\"")]
    InvalidTopology { name: String },

    #[error("pattern I/O failed")]
    Io(#[from] std::io::Error),
}
