//! Disc simulation module
//!
//! All physics lives here. This module stays pure:
//! - Implicit unit timestep (velocity is distance per tick)
//! - Seeded RNG only (disc colors)
//! - Stable iteration order (population index)
//! - No rendering or platform dependencies

pub mod boundary;
pub mod disc;
pub mod state;
pub mod tick;
pub mod vector;

pub use boundary::Boundary;
pub use disc::{AccelSample, Disc, Rgb, compute_mass};
pub use state::Simulation;
pub use tick::tick;
pub use vector::{add, length, reflection_velocity, scale, set_length, subtract};
