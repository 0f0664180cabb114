//! Voxel data structures

pub mod color;
pub mod grid;

pub use color::Color;
pub use grid::{DEFAULT_DIMS, GridCoord, GridDims, VoxelGrid};
