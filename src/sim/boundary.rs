//! Screen boundary and disc collision response
//!
//! Discs only collide with the edge of the screen, never with each other.
//! Rectangular screens flip each axis' velocity independently and leave the
//! position alone; round screens clamp the disc back onto the allowed circle
//! and reflect it about the radial normal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::disc::Disc;
use super::vector::{length, reflection_velocity, scale, set_length, subtract};
use crate::consts::{RECT_RESTITUTION, ROUND_RESTITUTION};
use crate::settings::DisplayShape;

/// Region the discs are confined to, fixed for the whole run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Boundary {
    /// Axis-aligned rectangle with its origin at (0, 0)
    Rect {
        width: f32,
        height: f32,
        restitution: f32,
    },
    /// Circle inscribed in a round display
    Circle {
        center: Vec2,
        radius: f32,
        restitution: f32,
    },
}

impl Boundary {
    pub fn rect(width: f32, height: f32) -> Self {
        Boundary::Rect {
            width,
            height,
            restitution: RECT_RESTITUTION,
        }
    }

    pub fn circle(center: Vec2, radius: f32) -> Self {
        Boundary::Circle {
            center,
            radius,
            restitution: ROUND_RESTITUTION,
        }
    }

    /// Boundary for a display of the given shape and pixel size
    ///
    /// Round displays have an even pixel width, so the visual center sits
    /// between pixels; the circle is centered one pixel up-left of `w/2`.
    pub fn from_display(shape: DisplayShape, width: u32, height: u32) -> Self {
        match shape {
            DisplayShape::Rect => Self::rect(width as f32, height as f32),
            DisplayShape::Round => {
                let center = Vec2::new(
                    (width / 2) as f32 - 1.0,
                    (height / 2) as f32 - 1.0,
                );
                Self::circle(center, center.x)
            }
        }
    }

    pub fn with_restitution(self, e: f32) -> Self {
        match self {
            Boundary::Rect { width, height, .. } => Boundary::Rect {
                width,
                height,
                restitution: e,
            },
            Boundary::Circle { center, radius, .. } => Boundary::Circle {
                center,
                radius,
                restitution: e,
            },
        }
    }

    pub fn restitution(&self) -> f32 {
        match *self {
            Boundary::Rect { restitution, .. } | Boundary::Circle { restitution, .. } => {
                restitution
            }
        }
    }

    /// Where new discs are placed
    pub fn center(&self) -> Vec2 {
        match *self {
            Boundary::Rect { width, height, .. } => {
                Vec2::new((width / 2.0).floor(), (height / 2.0).floor())
            }
            Boundary::Circle { center, .. } => center,
        }
    }

    pub fn is_round(&self) -> bool {
        matches!(self, Boundary::Circle { .. })
    }

    /// Detect and respond to a boundary hit for an already-integrated disc
    ///
    /// Returns true if the disc bounced.
    pub fn resolve(&self, disc: &mut Disc) -> bool {
        match *self {
            Boundary::Rect {
                width,
                height,
                restitution,
            } => resolve_rect(disc, width, height, restitution),
            Boundary::Circle {
                center,
                radius,
                restitution,
            } => resolve_circle(disc, center, radius, restitution),
        }
    }
}

/// Flip one velocity component if the disc touches a wall and is still
/// heading into it. Position is left where integration put it.
#[inline]
fn bounce_axis(pos: f32, vel: &mut f32, radius: f32, extent: f32, e: f32) -> bool {
    let into_near = pos - radius <= 0.0 && *vel < 0.0;
    let into_far = pos + radius >= extent && *vel > 0.0;
    if !(into_near || into_far) {
        return false;
    }
    *vel = -*vel * e;
    true
}

fn resolve_rect(disc: &mut Disc, width: f32, height: f32, e: f32) -> bool {
    let r = disc.radius();
    let hit_x = bounce_axis(disc.pos.x, &mut disc.vel.x, r, width, e);
    let hit_y = bounce_axis(disc.pos.y, &mut disc.vel.y, r, height, e);
    hit_x || hit_y
}

fn resolve_circle(disc: &mut Disc, center: Vec2, radius: f32, e: f32) -> bool {
    let allowed = radius - disc.radius();
    let offset = subtract(disc.pos, center);

    // Squared compare keeps the sqrt off the common no-hit path
    if offset.length_squared() <= allowed * allowed {
        return false;
    }

    let dist = length(offset);
    if dist > allowed {
        disc.pos = center + set_length(offset, allowed, dist);
    }
    disc.vel = scale(reflection_velocity(center, disc.pos, disc.vel), e);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_left_wall_bounce() {
        let boundary = Boundary::rect(180.0, 180.0);
        let mut disc = Disc::new(Vec2::new(8.0, 90.0), 5.0, None);
        disc.vel = Vec2::new(-3.0, 0.0);

        disc.integrate();
        assert_eq!(disc.pos.x - disc.radius(), 0.0);
        assert!(boundary.resolve(&mut disc));
        assert_eq!(disc.pos, Vec2::new(5.0, 90.0));
        assert!((disc.vel.x - 1.5).abs() < 1e-6);
        assert_eq!(disc.vel.y, 0.0);
    }

    #[test]
    fn test_rect_bounce_leaves_position_past_wall() {
        let boundary = Boundary::rect(180.0, 180.0);
        let mut disc = Disc::new(Vec2::new(2.0, 90.0), 5.0, None);
        disc.vel = Vec2::new(-3.0, 0.0);

        disc.integrate();
        assert_eq!(disc.pos.x, -1.0);
        assert!(boundary.resolve(&mut disc));
        assert_eq!(disc.pos, Vec2::new(-1.0, 90.0));
        assert!(disc.pos.x - disc.radius() <= 0.0);
        assert!((disc.vel.x - 1.5).abs() < 1e-6);
        assert_eq!(disc.vel.y, 0.0);
    }

    #[test]
    fn test_rect_ignores_disc_leaving_wall() {
        // Already overlapping but moving away: no second flip
        let boundary = Boundary::rect(100.0, 100.0);
        let mut disc = Disc::new(Vec2::new(2.0, 50.0), 5.0, None);
        disc.vel = Vec2::new(1.0, 0.0);
        assert!(!boundary.resolve(&mut disc));
        assert_eq!(disc.vel.x, 1.0);
    }

    #[test]
    fn test_rect_corner_flips_both_axes() {
        let boundary = Boundary::rect(100.0, 100.0);
        let mut disc = Disc::new(Vec2::new(97.0, 97.0), 5.0, None);
        disc.vel = Vec2::new(2.0, 4.0);

        assert!(boundary.resolve(&mut disc));
        assert!((disc.vel.x + 1.0).abs() < 1e-6);
        assert!((disc.vel.y + 2.0).abs() < 1e-6);
        assert_eq!(disc.pos, Vec2::new(97.0, 97.0));
    }

    #[test]
    fn test_rect_oversized_disc_uses_same_rules() {
        // Disc wider than the screen: touches both walls, flips toward the
        // wall it is heading into
        let boundary = Boundary::rect(10.0, 10.0);
        let mut disc = Disc::new(Vec2::new(5.0, 5.0), 8.0, None);
        disc.vel = Vec2::new(-1.0, 0.0);
        assert!(boundary.resolve(&mut disc));
        assert!((disc.vel.x - 0.5).abs() < 1e-6);
        assert_eq!(disc.pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_rect_sustained_push_alternates_direction() {
        // Constant force into the left wall: once settled, every tick the
        // force turns the disc into the wall and the bounce turns it back.
        // The disc creeps outward by about 2a/3 per tick.
        let boundary = Boundary::rect(100.0, 100.0);
        let mut disc = Disc::new(Vec2::new(12.0, 50.0), 5.0, None);
        let push = Vec2::new(-2.0 * disc.mass(), 0.0);

        for _ in 0..10 {
            disc.apply_force(push);
            disc.integrate();
            boundary.resolve(&mut disc);
        }

        for _ in 0..50 {
            let before = disc.pos.x;
            disc.apply_force(push);
            assert!(disc.vel.x < 0.0);
            disc.integrate();
            assert!(boundary.resolve(&mut disc));
            assert!(disc.vel.x > 0.0);
            assert!(disc.pos.x < before);
            assert!(disc.pos.x - disc.radius() <= 0.0);
            assert_eq!(disc.pos.y, 50.0);
        }
        assert!((disc.vel.x - 2.0 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_circle_clamp_and_reflect() {
        let center = Vec2::new(90.0, 90.0);
        let boundary = Boundary::circle(center, 90.0);
        let mut disc = Disc::new(Vec2::new(174.0, 90.0), 5.0, None);
        disc.vel = Vec2::new(3.0, 0.0);

        disc.integrate();
        assert!(boundary.resolve(&mut disc));
        assert!(((disc.pos - center).length() - 85.0).abs() < 1e-4);
        assert!((disc.vel.x + 2.1).abs() < 1e-5);
        assert!(disc.vel.y.abs() < 1e-5);
    }

    #[test]
    fn test_circle_inside_is_untouched() {
        let boundary = Boundary::circle(Vec2::new(90.0, 90.0), 90.0);
        let mut disc = Disc::new(Vec2::new(100.0, 100.0), 5.0, None);
        disc.vel = Vec2::new(1.0, 1.0);
        assert!(!boundary.resolve(&mut disc));
        assert_eq!(disc.pos, Vec2::new(100.0, 100.0));
        assert_eq!(disc.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_circle_oblique_hit_keeps_speed_ratio() {
        let center = Vec2::new(0.0, 0.0);
        let boundary = Boundary::circle(center, 50.0);
        let mut disc = Disc::new(Vec2::new(30.0, 40.0), 4.0, None);
        disc.vel = Vec2::new(1.0, 2.0);
        let speed = disc.vel.length();

        assert!(boundary.resolve(&mut disc));
        assert!(((disc.pos - center).length() - 46.0).abs() < 1e-4);
        assert!((disc.vel.length() - speed * 0.7).abs() < 1e-5);
        // Now heading back inward
        assert!(disc.vel.dot(disc.pos - center) < 0.0);
    }

    #[test]
    fn test_from_display_round() {
        let b = Boundary::from_display(DisplayShape::Round, 180, 180);
        match b {
            Boundary::Circle {
                center,
                radius,
                restitution,
            } => {
                assert_eq!(center, Vec2::new(89.0, 89.0));
                assert_eq!(radius, 89.0);
                assert_eq!(restitution, ROUND_RESTITUTION);
            }
            Boundary::Rect { .. } => panic!("expected circle"),
        }
    }

    #[test]
    fn test_from_display_rect_center() {
        let b = Boundary::from_display(DisplayShape::Rect, 144, 168);
        assert_eq!(b.center(), Vec2::new(72.0, 84.0));
        assert_eq!(b.restitution(), RECT_RESTITUTION);
        assert!(!b.is_round());
    }
}
