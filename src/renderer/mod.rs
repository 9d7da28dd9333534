//! Render adapter
//!
//! Draws each disc as a filled circle, in population order. Holds no physics
//! state of its own.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::platform::RedrawTarget;
use crate::sim::{Disc, Simulation};
pub use vertex::{Vertex, colors};

/// Anything that can fill a circle
pub trait Canvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
}

/// Fill color for a disc: its own color, or white on monochrome displays
pub fn disc_color(disc: &Disc) -> [f32; 4] {
    disc.color.map(|c| c.to_rgba()).unwrap_or(colors::DISC_MONO)
}

pub fn draw_disc<C: Canvas>(canvas: &mut C, disc: &Disc) {
    canvas.fill_circle(disc.pos, disc.radius(), disc_color(disc));
}

/// Draw the whole population
pub fn draw<C: Canvas>(canvas: &mut C, sim: &Simulation) {
    for disc in sim.discs() {
        draw_disc(canvas, disc);
    }
}

/// Canvas that tessellates circles into a triangle list
///
/// Also serves as the redraw target: `mark_dirty` flags it and `redraw`
/// rebuilds the vertex buffer only when flagged.
#[derive(Debug, Default)]
pub struct VertexCanvas {
    vertices: Vec<Vertex>,
    dirty: bool,
    frames: u64,
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes ready for a GPU vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Frames rebuilt so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rebuild the frame from `sim` if a redraw was requested
    pub fn redraw(&mut self, sim: &Simulation) -> bool {
        if !self.dirty {
            return false;
        }
        self.vertices.clear();
        draw(self, sim);
        self.dirty = false;
        self.frames += 1;
        true
    }
}

impl Canvas for VertexCanvas {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }
}

impl RedrawTarget for VertexCanvas {
    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
