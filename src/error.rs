use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when addressing cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The coordinate lies outside `[0, rows) x [0, cols)`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },
    /// A replacement grid does not have the simulation's dimensions.
    #[error("grid is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        actual_rows: usize,
        actual_cols: usize,
        rows: usize,
        cols: usize,
    },
}

/// Errors emitted while building or loading a simulation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Values that cannot drive a simulation (e.g. a zero-sized grid).
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}
