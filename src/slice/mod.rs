//! Slice projection between the 2D editing surface and 3D grid coordinates
//!
//! A slice is the cross-section of the grid at a fixed `layer` index along
//! one [`Axis`]; the two free dimensions become (row, col). [`Axis::project`]
//! is a bijection between surface cells and the 3D cells sharing the fixed
//! coordinate, which is what lets the rest of the crate skip runtime bounds
//! checks on grid access.

use std::fmt;

use crate::voxel::color::Color;
use crate::voxel::grid::{GridCoord, GridDims, VoxelGrid};

/// Grid axis held fixed while editing a slice
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Cyclic successor: X -> Y -> Z -> X
    pub const fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Number of layers along this axis
    pub const fn extent(self, dims: GridDims) -> usize {
        match self {
            Axis::X => dims.w,
            Axis::Y => dims.h,
            Axis::Z => dims.l,
        }
    }

    /// 2D dimensions of a slice perpendicular to this axis
    pub const fn slice_dims(self, dims: GridDims) -> SliceDims {
        match self {
            Axis::X => SliceDims::new(dims.h, dims.l),
            Axis::Y => SliceDims::new(dims.w, dims.l),
            Axis::Z => SliceDims::new(dims.h, dims.w),
        }
    }

    /// Map a surface cell to its 3D grid coordinate.
    ///
    /// `layer` lands on the fixed coordinate, `row` and `col` on the two
    /// free ones. Bijective over `[0, rows) x [0, cols)` for each layer.
    pub const fn project(self, layer: usize, row: usize, col: usize) -> GridCoord {
        match self {
            Axis::X => GridCoord::new(layer, row, col),
            Axis::Y => GridCoord::new(row, layer, col),
            Axis::Z => GridCoord::new(col, row, layer),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// 2D dimensions of a slice
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceDims {
    pub rows: usize,
    pub cols: usize,
}

impl SliceDims {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

/// Current editing position: an axis and a clamped layer index.
///
/// Invariant: `layer < axis.extent(dims)` for the grid the cursor is used
/// with. `change_axis` resets the layer to 0 and `change_layer` saturates,
/// so the invariant holds for any event sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceCursor {
    axis: Axis,
    layer: usize,
}

impl SliceCursor {
    /// Create a cursor on the given axis at layer 0
    pub const fn new(axis: Axis) -> Self {
        Self { axis, layer: 0 }
    }

    pub const fn axis(&self) -> Axis {
        self.axis
    }

    pub const fn layer(&self) -> usize {
        self.layer
    }

    /// Advance to the cyclically next axis, resetting the layer to 0.
    /// The caller regenerates the surface and re-issues layer visibility.
    pub fn change_axis(&mut self) {
        self.axis = self.axis.next();
        self.layer = 0;
    }

    /// Move the layer by `delta`, saturating into `[0, extent - 1]`.
    /// Returns the resulting layer.
    pub fn change_layer(&mut self, delta: i64, dims: GridDims) -> usize {
        let max = self.axis.extent(dims).saturating_sub(1);
        let next = (self.layer as i64).saturating_add(delta).clamp(0, max as i64);
        self.layer = next as usize;
        self.layer
    }

    /// Project a surface cell of the current slice to grid coordinates
    pub const fn project(&self, row: usize, col: usize) -> GridCoord {
        self.axis.project(self.layer, row, col)
    }

    /// Dimensions of the current slice for the given grid
    pub const fn slice_dims(&self, dims: GridDims) -> SliceDims {
        self.axis.slice_dims(dims)
    }
}

impl Default for SliceCursor {
    /// The editing surface opens on the Y axis (XZ plane) at layer 0
    fn default() -> Self {
        Self::new(Axis::Y)
    }
}

/// A captured 2D image of one slice, row-major.
///
/// Produced for surface redraws and clipboard copies; empty cells are kept
/// as `None` so sparseness survives the capture.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceImage {
    dims: SliceDims,
    cells: Vec<Option<Color>>,
}

impl SliceImage {
    /// Read the cursor's current slice out of the grid
    pub fn capture(grid: &VoxelGrid, cursor: &SliceCursor) -> Self {
        let dims = cursor.slice_dims(grid.dims());
        let mut cells = Vec::with_capacity(dims.cell_count());
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                cells.push(grid.get(cursor.project(row, col)));
            }
        }
        Self { dims, cells }
    }

    pub const fn dims(&self) -> SliceDims {
        self.dims
    }

    /// Cell at (row, col); `None` means empty
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.cells[row * self.dims.cols + col]
    }

    /// Iterate all cells as (row, col, cell)
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Option<Color>)> + '_ {
        let cols = self.dims.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, *cell))
    }
}
