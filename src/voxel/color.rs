//! Voxel color type

use std::fmt;

use serde::{Deserialize, Serialize};

/// 24-bit RGB color packed as `0xRRGGBB`.
///
/// Serializes as the bare integer, which is also the value handed to the
/// render collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color(0xFF_FF_FF);
    pub const BLACK: Color = Color(0x00_00_00);

    /// Create a color from a packed `0xRRGGBB` value.
    /// Bits above the low 24 are masked off.
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// Create a color from RGB888 components.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Get RGB888 components.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// The packed `0xRRGGBB` value.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
