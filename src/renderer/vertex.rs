//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::Rgb;

/// Simple 2D vertex with position (field pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Opaque float color from an 8-bit palette entry
pub fn rgba(color: Rgb) -> [f32; 4] {
    let (r, g, b) = color;
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use crate::palette;

    pub const PADDLE: crate::Rgb = palette::WHITE;
    pub const BALL: crate::Rgb = palette::WHITE;
}
