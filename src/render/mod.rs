//! Render collaborator contracts
//!
//! The engine never draws anything itself. The 3D view implements
//! [`SceneRenderer`] and the 2D editing surface implements
//! [`SliceSurface`]; the edit session calls both synchronously from its
//! input handlers.

pub mod recording;

pub use recording::{RecordingRenderer, RenderCall};

use crate::slice::{Axis, SliceImage};
use crate::voxel::color::Color;
use crate::voxel::grid::GridCoord;

/// Color restored on hover-out when the cell holds no value
pub const BACKGROUND_COLOR: Color = Color::WHITE;

/// The external 3D visualization component
pub trait SceneRenderer {
    /// Mark a cell as painted: opaque, visible, in the given color
    fn paint_cube(&mut self, coord: GridCoord, color: Color);

    /// Mark a cell as empty: invisible/translucent, unpainted
    fn kill_cube(&mut self, coord: GridCoord);

    /// Render painted cells opaque everywhere and the unpainted cells of
    /// the active slice as a translucent reference plane; all other
    /// unpainted cells stay hidden.
    fn set_layer_visibility(&mut self, layer: usize, axis: Axis);

    /// Transient highlight of a hovered cell
    fn handle_hover(&mut self, coord: GridCoord);

    /// Restore a hovered cell to its stored color, or
    /// [`BACKGROUND_COLOR`] if it is empty
    fn hover_out(&mut self, coord: GridCoord, restore: Color);
}

/// The 2D editing surface: a `rows x cols` grid of cells for the current
/// axis/layer, redrawn after every grid mutation.
pub trait SliceSurface {
    fn redraw(&mut self, image: &SliceImage);
}
