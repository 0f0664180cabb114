//! Editing session: the paint/erase/hover state machine
//!
//! One session owns all mutable editing state (grid, cursor, clipboard,
//! selected color) and turns an abstract pointer-event stream into grid
//! mutations plus render-collaborator calls. Everything runs synchronously
//! inside the handler invocation, so no mutation can interleave with
//! another.

use log::{debug, info};

use crate::core::error::Result;
use crate::edit::clipboard::ClipboardBuffer;
use crate::render::{BACKGROUND_COLOR, SceneRenderer, SliceSurface};
use crate::slice::{SliceCursor, SliceImage};
use crate::snapshot::{self, Snapshot};
use crate::voxel::color::Color;
use crate::voxel::grid::{DEFAULT_DIMS, GridCoord, GridDims, VoxelGrid};

/// Pointer input event on the 2D editing surface.
///
/// `Up` is global rather than cell-scoped: releasing the pointer anywhere
/// ends a paint stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Down { row: usize, col: usize },
    Enter { row: usize, col: usize },
    Leave { row: usize, col: usize },
    Up,
}

/// Session state: painting is active between pointer-down and the next
/// global pointer-up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Painting,
}

/// Orchestrates user input into grid mutations and render calls
pub struct EditSession {
    grid: VoxelGrid,
    cursor: SliceCursor,
    clipboard: ClipboardBuffer,
    selected: Color,
    state: EditState,
}

impl EditSession {
    /// Create a session over a fresh grid, idle, with white selected
    pub fn new(dims: GridDims) -> Self {
        Self {
            grid: VoxelGrid::new(dims),
            cursor: SliceCursor::default(),
            clipboard: ClipboardBuffer::new(),
            selected: Color::WHITE,
            state: EditState::Idle,
        }
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn cursor(&self) -> SliceCursor {
        self.cursor
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn selected_color(&self) -> Color {
        self.selected
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.selected = color;
    }

    /// Feed one pointer event through the state machine
    pub fn handle_pointer<R: SceneRenderer, S: SliceSurface>(
        &mut self,
        event: PointerEvent,
        renderer: &mut R,
        surface: &mut S,
    ) {
        match event {
            PointerEvent::Down { row, col } => {
                self.apply_paint(row, col, renderer, surface);
                self.state = EditState::Painting;
            }
            PointerEvent::Enter { row, col } => match self.state {
                // Drag-paint: entering a cell mid-stroke paints it
                EditState::Painting => self.apply_paint(row, col, renderer, surface),
                EditState::Idle => renderer.handle_hover(self.cursor.project(row, col)),
            },
            PointerEvent::Leave { row, col } => {
                let coord = self.cursor.project(row, col);
                let restore = self.grid.get(coord).unwrap_or(BACKGROUND_COLOR);
                renderer.hover_out(coord, restore);
            }
            PointerEvent::Up => {
                self.state = EditState::Idle;
            }
        }
    }

    /// Toggle paint action: an occupied cell is erased, an empty cell is
    /// set to the selected color. Always followed by a surface redraw.
    fn apply_paint<R: SceneRenderer, S: SliceSurface>(
        &mut self,
        row: usize,
        col: usize,
        renderer: &mut R,
        surface: &mut S,
    ) {
        let coord = self.cursor.project(row, col);
        match self.grid.get(coord) {
            Some(_) => {
                self.grid.set(coord, None);
                renderer.kill_cube(coord);
                debug!("erased {coord:?}");
            }
            None => {
                self.grid.set(coord, Some(self.selected));
                renderer.paint_cube(coord, self.selected);
                debug!("painted {coord:?} {}", self.selected);
            }
        }
        self.redraw(surface);
    }

    fn redraw<S: SliceSurface>(&self, surface: &mut S) {
        surface.redraw(&SliceImage::capture(&self.grid, &self.cursor));
    }

    /// Switch to the cyclically next axis at layer 0, refresh the 3D
    /// reference plane and regenerate the surface
    pub fn change_axis<R: SceneRenderer, S: SliceSurface>(
        &mut self,
        renderer: &mut R,
        surface: &mut S,
    ) {
        self.cursor.change_axis();
        debug!("axis changed to {} layer 0", self.cursor.axis());
        renderer.set_layer_visibility(self.cursor.layer(), self.cursor.axis());
        self.redraw(surface);
    }

    /// Move the active layer by `delta`, saturating at the axis bounds
    pub fn change_layer<R: SceneRenderer, S: SliceSurface>(
        &mut self,
        delta: i64,
        renderer: &mut R,
        surface: &mut S,
    ) {
        let layer = self.cursor.change_layer(delta, self.grid.dims());
        debug!("layer changed to {layer} on {}", self.cursor.axis());
        renderer.set_layer_visibility(layer, self.cursor.axis());
        self.redraw(surface);
    }

    /// Capture the current slice into the clipboard slot
    pub fn copy_slice(&mut self) {
        self.clipboard.copy(&self.grid, &self.cursor);
    }

    /// Paste the buffered slice onto the current slice; no-op when the
    /// clipboard is empty
    pub fn paste_slice<R: SceneRenderer, S: SliceSurface>(
        &mut self,
        renderer: &mut R,
        surface: &mut S,
    ) {
        if self.clipboard.paste(&mut self.grid, &self.cursor, renderer) {
            self.redraw(surface);
        }
    }

    /// Snapshot the grid for persistence; `None` when nothing is painted
    pub fn save(&self) -> Option<Snapshot> {
        snapshot::save(&self.grid)
    }

    /// Replace the grid contents with a validated snapshot and resync
    /// both views. The grid is untouched if validation fails.
    pub fn load<R: SceneRenderer, S: SliceSurface>(
        &mut self,
        snapshot: &Snapshot,
        renderer: &mut R,
        surface: &mut S,
    ) -> Result<()> {
        let previous: Vec<GridCoord> = self.grid.iter_occupied().map(|(c, _)| c).collect();
        snapshot::load(&mut self.grid, snapshot)?;

        for coord in previous {
            renderer.kill_cube(coord);
        }
        for (coord, color) in self.grid.iter_occupied() {
            renderer.paint_cube(coord, color);
        }
        renderer.set_layer_visibility(self.cursor.layer(), self.cursor.axis());
        self.redraw(surface);
        info!("loaded snapshot with {} occupied voxels", self.grid.occupied_count());
        Ok(())
    }
}

impl Default for EditSession {
    /// Session over the default 48x32x48 editing volume
    fn default() -> Self {
        Self::new(DEFAULT_DIMS)
    }
}
