//! Voxslice - a slice-projection voxel painting engine
//!
//! A dense 3D voxel grid is edited through 2D cross-sections ("slices"):
//! the `slice` module maps surface cells bijectively onto grid cells, the
//! `edit` module drives paint/erase/hover input into grid mutations, and
//! the `snapshot` module persists the grid as a bounding-box-trimmed JSON
//! document. 3D visualization is an external collaborator reached through
//! the traits in `render`.

pub mod core;
pub mod voxel;
pub mod slice;
pub mod render;
pub mod edit;
pub mod snapshot;
