//! Dense 3D voxel grid storage

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, Result};
use crate::voxel::color::Color;

/// Grid dimensions (width, height, length), fixed at construction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub w: usize,
    pub h: usize,
    pub l: usize,
}

impl GridDims {
    /// Create new grid dimensions
    pub const fn new(w: usize, h: usize, l: usize) -> Self {
        Self { w, h, l }
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.w * self.h * self.l
    }

    /// Whether a coordinate lies inside the grid
    pub const fn contains(&self, coord: GridCoord) -> bool {
        coord.x < self.w && coord.y < self.h && coord.z < self.l
    }
}

/// Absolute cell coordinate within a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridCoord {
    /// Create a new grid coordinate
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Default editing volume: 48 x 32 x 48
pub const DEFAULT_DIMS: GridDims = GridDims::new(48, 32, 48);

/// Dense 3D array of optional colors; absent means empty.
///
/// Coordinates produced by the slice projector are in-bounds by
/// construction, so `get`/`set` take that for granted and panic on a
/// direct out-of-bounds access. Other callers go through the checked
/// variants.
pub struct VoxelGrid {
    dims: GridDims,
    /// Cells in x-major order: index = x + w * (y + h * z)
    cells: Vec<Option<Color>>,
}

impl VoxelGrid {
    /// Create a new empty grid. Dimensions must all be non-zero.
    pub fn new(dims: GridDims) -> Self {
        assert!(
            dims.w > 0 && dims.h > 0 && dims.l > 0,
            "grid dimensions must be non-zero: {dims:?}"
        );
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
        }
    }

    /// Grid dimensions
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    fn index(&self, coord: GridCoord) -> usize {
        assert!(
            self.dims.contains(coord),
            "coordinate {coord:?} out of bounds for grid {:?}",
            self.dims
        );
        coord.x + self.dims.w * (coord.y + self.dims.h * coord.z)
    }

    /// Get the color at a coordinate. O(1).
    pub fn get(&self, coord: GridCoord) -> Option<Color> {
        self.cells[self.index(coord)]
    }

    /// Set or clear the color at a coordinate. O(1), mutates exactly
    /// one cell; callers are responsible for updating the render
    /// collaborator.
    pub fn set(&mut self, coord: GridCoord, color: Option<Color>) {
        let index = self.index(coord);
        self.cells[index] = color;
    }

    /// Bounds-checked variant of [`get`](Self::get)
    pub fn get_checked(&self, coord: GridCoord) -> Result<Option<Color>> {
        if !self.dims.contains(coord) {
            return Err(Error::OutOfBounds { coord, dims: self.dims });
        }
        Ok(self.get(coord))
    }

    /// Bounds-checked variant of [`set`](Self::set)
    pub fn set_checked(&mut self, coord: GridCoord, color: Option<Color>) -> Result<()> {
        if !self.dims.contains(coord) {
            return Err(Error::OutOfBounds { coord, dims: self.dims });
        }
        self.set(coord, color);
        Ok(())
    }

    /// Clear every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Whether no cell holds a color
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over all occupied cells with their coordinates
    pub fn iter_occupied(&self) -> impl Iterator<Item = (GridCoord, Color)> + '_ {
        let GridDims { w, h, .. } = self.dims;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|color| {
                let x = i % w;
                let y = (i / w) % h;
                let z = i / (w * h);
                (GridCoord::new(x, y, z), color)
            })
        })
    }
}
