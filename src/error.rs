//! Errors reported by grid construction and cell access.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("initial state has {actual} cells, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("unknown transition rule: {0:?}")]
    UnknownRule(String),
    #[error("unknown seed pattern: {0:?}")]
    UnknownPattern(String),
    #[error("neighbourhood radius must be at least 1, got {0}")]
    InvalidRadius(u32),
    #[error("grid dimensions {rows}x{columns} are out of range")]
    InvalidDimensions { rows: u32, columns: u32 },
    #[error("cell index {index} out of bounds for grid of {len} cells")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("cell ({row}, {column}) out of bounds for {rows}x{columns} grid")]
    CoordinateOutOfBounds {
        row: u32,
        column: u32,
        rows: u32,
        columns: u32,
    },
    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
