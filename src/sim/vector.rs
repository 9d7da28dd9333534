//! 2D vector helpers
//!
//! Thin named wrappers over `glam::Vec2` plus the reflection used for
//! round-screen bounces.

use glam::Vec2;

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Component-wise multiply by a scalar
#[inline]
pub fn scale(v: Vec2, k: f32) -> Vec2 {
    v * k
}

#[inline]
pub fn length(v: Vec2) -> f32 {
    v.length()
}

/// Rescale `v` so its magnitude becomes `new_len`
///
/// `current_len` is the caller's already-computed `length(v)` and must be
/// non-zero.
#[inline]
pub fn set_length(v: Vec2, new_len: f32, current_len: f32) -> Vec2 {
    v * (new_len / current_len)
}

/// Reflect velocity off a surface with given unit normal
#[inline]
pub fn reflect(vel: Vec2, normal: Vec2) -> Vec2 {
    vel - 2.0 * vel.dot(normal) * normal
}

/// Velocity after bouncing off the inside of a circle centered at `center`
///
/// The collision normal runs from the circle center through the disc
/// position. A disc sitting exactly on the center has no normal and keeps
/// its velocity.
pub fn reflection_velocity(center: Vec2, pos: Vec2, vel: Vec2) -> Vec2 {
    let normal = subtract(pos, center).normalize_or_zero();
    if normal == Vec2::ZERO {
        return vel;
    }
    reflect(vel, normal)
}
