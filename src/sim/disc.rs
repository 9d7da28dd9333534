//! Disc entity and force application

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{ACCEL_RATIO, DISC_DENSITY};

/// One raw accelerometer reading in milli-g
///
/// Sensor X/Y lie in the screen plane with Y pointing up; Z is unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccelSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl AccelSample {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Planar force in screen coordinates (screen Y points down)
    pub fn to_force(self, ratio: f32) -> Vec2 {
        Vec2::new(self.x as f32 * ratio, -(self.y as f32) * ratio)
    }
}

/// 8-bit RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random color
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }

    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Mass of a disc of uniform density
#[inline]
pub fn compute_mass(radius: f32) -> f32 {
    std::f32::consts::PI * radius * radius * DISC_DENSITY
}

/// A simulated disc
///
/// `radius` and `mass` are private so mass can only change through
/// [`Disc::set_radius`].
#[derive(Debug, Clone, Serialize)]
pub struct Disc {
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
    mass: f32,
    /// Fill color, `None` on displays without color
    pub color: Option<Rgb>,
}

impl Disc {
    /// Resting disc at `pos`. `radius` must be positive.
    pub fn new(pos: Vec2, radius: f32, color: Option<Rgb>) -> Self {
        debug_assert!(radius > 0.0, "disc radius must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            mass: compute_mass(radius),
            color,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn set_radius(&mut self, radius: f32) {
        debug_assert!(radius > 0.0, "disc radius must be positive");
        self.radius = radius;
        self.mass = compute_mass(radius);
    }

    /// `vel += force / mass`; position is untouched until the next update
    pub fn apply_force(&mut self, force: Vec2) {
        self.vel += force / self.mass;
    }

    /// Apply a raw accelerometer reading using the default ratio
    pub fn apply_accel(&mut self, sample: AccelSample) {
        self.apply_accel_with_ratio(sample, ACCEL_RATIO);
    }

    pub fn apply_accel_with_ratio(&mut self, sample: AccelSample, ratio: f32) {
        self.apply_force(sample.to_force(ratio));
    }

    /// Advance by one tick (unit timestep)
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}
