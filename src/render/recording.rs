//! Recording render collaborator
//!
//! Implements both render contracts by logging every call, for headless
//! runs and for asserting on render traffic in tests.

use crate::render::{SceneRenderer, SliceSurface};
use crate::slice::{Axis, SliceImage};
use crate::voxel::color::Color;
use crate::voxel::grid::GridCoord;

/// One recorded [`SceneRenderer`] call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderCall {
    PaintCube { coord: GridCoord, color: Color },
    KillCube { coord: GridCoord },
    SetLayerVisibility { layer: usize, axis: Axis },
    HandleHover { coord: GridCoord },
    HoverOut { coord: GridCoord, restore: Color },
}

/// Render collaborator that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
    redraws: Vec<SliceImage>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All scene calls in order
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Number of surface redraws received
    pub fn redraw_count(&self) -> usize {
        self.redraws.len()
    }

    /// The most recent surface redraw, if any
    pub fn last_redraw(&self) -> Option<&SliceImage> {
        self.redraws.last()
    }

    /// Forget everything recorded so far
    pub fn reset(&mut self) {
        self.calls.clear();
        self.redraws.clear();
    }
}

impl SceneRenderer for RecordingRenderer {
    fn paint_cube(&mut self, coord: GridCoord, color: Color) {
        self.calls.push(RenderCall::PaintCube { coord, color });
    }

    fn kill_cube(&mut self, coord: GridCoord) {
        self.calls.push(RenderCall::KillCube { coord });
    }

    fn set_layer_visibility(&mut self, layer: usize, axis: Axis) {
        self.calls.push(RenderCall::SetLayerVisibility { layer, axis });
    }

    fn handle_hover(&mut self, coord: GridCoord) {
        self.calls.push(RenderCall::HandleHover { coord });
    }

    fn hover_out(&mut self, coord: GridCoord, restore: Color) {
        self.calls.push(RenderCall::HoverOut { coord, restore });
    }
}

impl SliceSurface for RecordingRenderer {
    fn redraw(&mut self, image: &SliceImage) {
        self.redraws.push(image.clone());
    }
}
