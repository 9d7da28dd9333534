//! Vertex type for tessellated 2D output

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
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

/// Fixed display colors
pub mod colors {
    /// Disc fill on displays without color
    pub const DISC_MONO: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
