//! Accel Discs - tilt-driven discs bouncing around a watch face
//!
//! Core modules:
//! - `sim`: Disc physics (vector math, disc model, boundary collisions, tick)
//! - `driver`: Self-rescheduling timer loop that feeds the simulation
//! - `renderer`: Draws the disc population onto a canvas
//! - `platform`: Host service traits plus a headless event loop
//! - `settings`: Startup configuration
//! - `status`: Time/battery/connection readouts

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod status;

pub use driver::{Driver, DriverPhase};
pub use settings::{DisplayShape, Settings, SettingsError};

/// Simulation constants
pub mod consts {
    /// Number of discs in the population
    pub const NUM_DISCS: usize = 20;
    /// Mass per unit area
    pub const DISC_DENSITY: f32 = 0.25;
    /// Radius of the first disc created
    pub const INITIAL_RADIUS: f32 = 3.0;
    /// Each successive disc is this much larger than the last
    pub const RADIUS_STEP: f32 = 0.5;

    /// Raw accelerometer units (milli-g) to simulation force
    pub const ACCEL_RATIO: f32 = 0.05;
    /// Delay between the end of one tick and the start of the next
    pub const ACCEL_STEP_MS: u32 = 50;

    /// Restitution against rectangular screen edges
    pub const RECT_RESTITUTION: f32 = 0.5;
    /// Restitution against a round screen edge
    pub const ROUND_RESTITUTION: f32 = 0.7;

    /// Default display (rectangular color watch)
    pub const DISPLAY_WIDTH: u32 = 144;
    pub const DISPLAY_HEIGHT: u32 = 168;
    /// Round display
    pub const ROUND_DISPLAY_SIZE: u32 = 180;
}
