//! Single-slot clipboard for slice snapshots

use log::{debug, warn};

use crate::render::SceneRenderer;
use crate::slice::{SliceCursor, SliceImage};
use crate::voxel::grid::VoxelGrid;

/// Holds at most one captured slice. Each copy overwrites the slot.
///
/// The buffer is axis-independent: pasting after an axis or layer change
/// re-projects the buffered (row, col) entries onto whatever slice is
/// current. Buffer cells that fall outside the current slice are skipped.
#[derive(Debug, Default)]
pub struct ClipboardBuffer {
    slot: Option<SliceImage>,
}

impl ClipboardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Snapshot every cell of the cursor's current slice, empty cells
    /// included, so sparseness is preserved.
    pub fn copy(&mut self, grid: &VoxelGrid, cursor: &SliceCursor) {
        let image = SliceImage::capture(grid, cursor);
        debug!(
            "copied {}x{} slice at {} layer {}",
            image.dims().rows,
            image.dims().cols,
            cursor.axis(),
            cursor.layer()
        );
        self.slot = Some(image);
    }

    /// Write every non-absent buffer cell into the cursor's current slice
    /// and paint the corresponding cube. Absent cells are skipped, so
    /// paste never erases existing voxels. No-op when the slot is empty.
    ///
    /// Returns true if a buffered slice was applied.
    pub fn paste<R: SceneRenderer>(
        &self,
        grid: &mut VoxelGrid,
        cursor: &SliceCursor,
        renderer: &mut R,
    ) -> bool {
        let Some(image) = &self.slot else {
            return false;
        };

        let dims = cursor.slice_dims(grid.dims());
        let mut skipped = 0usize;
        for (row, col, cell) in image.iter() {
            let Some(color) = cell else { continue };
            if row >= dims.rows || col >= dims.cols {
                skipped += 1;
                continue;
            }
            let coord = cursor.project(row, col);
            grid.set(coord, Some(color));
            renderer.paint_cube(coord, color);
        }
        if skipped > 0 {
            warn!(
                "paste skipped {skipped} buffered cells outside the current {}x{} slice",
                dims.rows, dims.cols
            );
        }
        true
    }

    /// Drop the buffered slice, if any
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
