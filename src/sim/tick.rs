//! Fixed timestep simulation tick
//!
//! Advances every disc by one step from a single accelerometer sample.

use super::boundary::Boundary;
use super::disc::{AccelSample, Disc};
use super::state::Simulation;

/// Integrate one disc and resolve its boundary collision
///
/// Force for this tick must already be applied. Returns true on a bounce.
pub fn update_disc(disc: &mut Disc, boundary: &Boundary) -> bool {
    disc.integrate();
    boundary.resolve(disc)
}

/// Advance the simulation by one tick
///
/// Every disc, in index order, takes the sample as a force and is then
/// integrated and collided. Returns the number of discs that bounced.
pub fn tick(state: &mut Simulation, sample: AccelSample) -> usize {
    state.time_ticks += 1;

    let boundary = state.boundary;
    let ratio = state.accel_ratio;
    let mut bounces = 0;
    for disc in state.discs_mut() {
        disc.apply_accel_with_ratio(sample, ratio);
        if update_disc(disc, &boundary) {
            bounces += 1;
        }
    }

    log::trace!(
        "tick {}: accel=({}, {}) bounces={}",
        state.time_ticks,
        sample.x,
        sample.y,
        bounces
    );
    bounces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use glam::Vec2;
    use proptest::prelude::*;

    fn single_disc_settings(radius: f32) -> Settings {
        Settings {
            disc_count: 1,
            initial_radius: radius,
            color: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_zero_sample_keeps_rest() {
        let mut sim = Simulation::new(Boundary::rect(144.0, 168.0), &Settings::default());
        let before: Vec<_> = sim.discs().iter().map(|d| (d.pos, d.vel)).collect();

        for _ in 0..10 {
            assert_eq!(tick(&mut sim, AccelSample::ZERO), 0);
        }

        let after: Vec<_> = sim.discs().iter().map(|d| (d.pos, d.vel)).collect();
        assert_eq!(before, after);
        assert_eq!(sim.time_ticks, 10);
    }

    #[test]
    fn test_rect_scenario_falls_and_bounces_off_bottom() {
        let settings = single_disc_settings(5.0);
        let mut sim = Simulation::new(Boundary::rect(180.0, 180.0), &settings);
        assert_eq!(sim.discs()[0].pos, Vec2::new(90.0, 90.0));

        // Sensor -Y is screen-down
        let sample = AccelSample::new(0, -100, 0);
        let mut bounced_at = None;
        for i in 0..50 {
            let disc = &mut sim.discs_mut()[0];
            disc.apply_accel_with_ratio(sample, settings.accel_ratio);
            let pre = disc.vel;
            update_disc(disc, &Boundary::rect(180.0, 180.0));

            if disc.vel.y < 0.0 {
                assert!(pre.y > 0.0, "was falling toward the bottom wall");
                assert!((disc.vel.y + pre.y * 0.5).abs() < 1e-5);
                assert_eq!(disc.vel.x, 0.0);
                assert!(disc.pos.y + disc.radius() >= 180.0);
                bounced_at = Some(i);
                break;
            }
            assert!(disc.pos.y >= 90.0);
        }
        assert!(bounced_at.is_some(), "disc never reached the bottom wall");
    }

    #[test]
    fn test_rect_scenario_through_tick() {
        let settings = single_disc_settings(5.0);
        let mut sim = Simulation::new(Boundary::rect(180.0, 180.0), &settings);
        let sample = AccelSample::new(0, -100, 0);

        let total: usize = (0..50).map(|_| tick(&mut sim, sample)).sum();
        assert!(total >= 1);
        let disc = &sim.discs()[0];
        assert_eq!(disc.pos.x, 90.0);
        assert!(disc.pos.y > 90.0);
    }

    #[test]
    fn test_circle_scenario_radial_hit() {
        let center = Vec2::new(90.0, 90.0);
        let boundary = Boundary::circle(center, 90.0);
        let mut sim = Simulation::new(boundary, &single_disc_settings(5.0));

        let v = 4.0;
        {
            let disc = &mut sim.discs_mut()[0];
            disc.pos = center + Vec2::new(0.0, 83.0);
            disc.vel = Vec2::new(0.0, v);
        }

        assert_eq!(tick(&mut sim, AccelSample::ZERO), 1);
        let disc = &sim.discs()[0];
        assert!(((disc.pos - center).length() - 85.0).abs() < 1e-4);
        assert!((disc.vel.length() - v * 0.7).abs() < 1e-5);
        assert!(disc.vel.y < 0.0);
    }

    proptest! {
        #[test]
        fn discs_stay_inside_circle(
            x in -1000i16..1000,
            y in -1000i16..1000,
            ticks in 1usize..200,
        ) {
            let center = Vec2::new(89.0, 89.0);
            let mut sim = Simulation::new(Boundary::circle(center, 89.0), &Settings::default());
            let sample = AccelSample::new(x, y, 0);
            for _ in 0..ticks {
                tick(&mut sim, sample);
            }
            for disc in sim.discs() {
                let allowed = 89.0 - disc.radius();
                prop_assert!((disc.pos - center).length() <= allowed + 1e-3);
            }
        }
    }
}
