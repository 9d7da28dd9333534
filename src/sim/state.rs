//! Simulation context
//!
//! Owns the disc population and the boundary for one run. The host creates it
//! at startup and drops it at teardown; nothing here is global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::boundary::Boundary;
use super::disc::{Disc, Rgb};
use crate::settings::Settings;

/// Hands out disc radii: `initial`, `initial + step`, `initial + 2*step`, ...
#[derive(Debug, Clone)]
pub struct RadiusSeries {
    next: f32,
    step: f32,
}

impl RadiusSeries {
    pub fn new(initial: f32, step: f32) -> Self {
        Self {
            next: initial,
            step,
        }
    }
}

impl Iterator for RadiusSeries {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let radius = self.next;
        self.next += self.step;
        Some(radius)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    /// Region the discs bounce around in
    pub boundary: Boundary,
    /// Fixed-size population, index order is stable
    discs: Vec<Disc>,
    /// Raw accelerometer units to force
    pub accel_ratio: f32,
    /// Ticks advanced so far
    pub time_ticks: u64,
}

impl Simulation {
    /// Seed the population: every disc at the boundary center, at rest,
    /// with increasing radius
    pub fn new(boundary: Boundary, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let spawn = boundary.center();

        let discs: Vec<Disc> = RadiusSeries::new(settings.initial_radius, settings.radius_step)
            .take(settings.disc_count)
            .map(|radius| {
                let color = settings.color.then(|| Rgb::random(&mut rng));
                Disc::new(spawn, radius, color)
            })
            .collect();

        log::debug!(
            "Seeded {} discs at ({}, {}), radii {:?}..{:?}",
            discs.len(),
            spawn.x,
            spawn.y,
            discs.first().map(Disc::radius),
            discs.last().map(Disc::radius),
        );

        Self {
            boundary,
            discs,
            accel_ratio: settings.accel_ratio,
            time_ticks: 0,
        }
    }

    /// Build the boundary from the configured display, then seed
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.boundary(), settings)
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// Mutable access to existing discs; the population size cannot change
    pub fn discs_mut(&mut self) -> &mut [Disc] {
        &mut self.discs
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Total kinetic energy, handy for logging
    pub fn kinetic_energy(&self) -> f32 {
        self.discs
            .iter()
            .map(|d| 0.5 * d.mass() * d.vel.length_squared())
            .sum()
    }
}
