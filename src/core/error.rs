//! Error types for the voxslice engine

use thiserror::Error;

use crate::voxel::grid::{GridCoord, GridDims};

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the engine
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("coordinate {coord:?} out of bounds for grid {dims:?}")]
    OutOfBounds { coord: GridCoord, dims: GridDims },

    #[error("snapshot {snapshot:?} does not fit destination grid {grid:?}")]
    SnapshotTooLarge { snapshot: GridDims, grid: GridDims },

    #[error("snapshot data does not match its declared dimensions {dims:?}")]
    SnapshotShape { dims: GridDims },
}
