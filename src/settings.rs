//! Startup configuration
//!
//! Read once before the simulation starts; physics parameters never change
//! while it runs. Stored as JSON, every field optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Boundary;

/// Physical shape of the watch display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayShape {
    #[default]
    Rect,
    Round,
}

impl DisplayShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayShape::Rect => "rect",
            DisplayShape::Round => "round",
        }
    }

    /// Pixel size of the stock display of this shape
    pub fn stock_size(&self) -> (u32, u32) {
        match self {
            DisplayShape::Rect => (DISPLAY_WIDTH, DISPLAY_HEIGHT),
            DisplayShape::Round => (ROUND_DISPLAY_SIZE, ROUND_DISPLAY_SIZE),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rect" | "rectangle" | "square" => Some(DisplayShape::Rect),
            "round" | "circle" => Some(DisplayShape::Round),
            _ => None,
        }
    }
}

/// Errors from loading or validating settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Simulation and display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub display: DisplayShape,
    pub width: u32,
    pub height: u32,
    /// Display can show color (discs get random colors)
    pub color: bool,

    // === Population ===
    pub disc_count: usize,
    pub initial_radius: f32,
    pub radius_step: f32,

    // === Physics ===
    pub accel_ratio: f32,
    pub tick_ms: u32,
    pub rect_restitution: f32,
    pub round_restitution: f32,

    /// Seed for disc colors
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayShape::Rect,
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            color: true,

            disc_count: NUM_DISCS,
            initial_radius: INITIAL_RADIUS,
            radius_step: RADIUS_STEP,

            accel_ratio: ACCEL_RATIO,
            tick_ms: ACCEL_STEP_MS,
            rect_restitution: RECT_RESTITUTION,
            round_restitution: ROUND_RESTITUTION,

            seed: 0,
        }
    }
}

impl Settings {
    /// Defaults for a round 180x180 display
    pub fn round() -> Self {
        Self {
            display: DisplayShape::Round,
            width: ROUND_DISPLAY_SIZE,
            height: ROUND_DISPLAY_SIZE,
            ..Self::default()
        }
    }

    /// Same settings on a display of another shape
    ///
    /// A size still at the current shape's stock value is treated as unset
    /// and follows the new shape. Any other size is kept.
    pub fn with_display(self, shape: DisplayShape) -> Self {
        let (width, height) = if (self.width, self.height) == self.display.stock_size() {
            shape.stock_size()
        } else {
            (self.width, self.height)
        };
        Self {
            display: shape,
            width,
            height,
            ..self
        }
    }

    /// Boundary matching the configured display
    pub fn boundary(&self) -> Boundary {
        let e = match self.display {
            DisplayShape::Rect => self.rect_restitution,
            DisplayShape::Round => self.round_restitution,
        };
        Boundary::from_display(self.display, self.width, self.height).with_restitution(e)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        };

        if self.width == 0 || self.height == 0 {
            return invalid("width", "display must have a non-zero size");
        }
        if self.disc_count == 0 {
            return invalid("disc_count", "must be at least 1");
        }
        if !(self.initial_radius > 0.0 && self.initial_radius.is_finite()) {
            return invalid("initial_radius", "must be positive and finite");
        }
        if !(self.radius_step >= 0.0) {
            return invalid("radius_step", "must not be negative");
        }
        if self.tick_ms == 0 {
            return invalid("tick_ms", "must be at least 1");
        }
        if !self.accel_ratio.is_finite() {
            return invalid("accel_ratio", "must be finite");
        }
        for (field, e) in [
            ("rect_restitution", self.rect_restitution),
            ("round_restitution", self.round_restitution),
        ] {
            if !(e > 0.0 && e <= 1.0) {
                return invalid(field, "must be in (0, 1]");
            }
        }
        Ok(())
    }

    /// Parse and validate JSON settings
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
