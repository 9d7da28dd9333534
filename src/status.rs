//! Status readouts shown above the discs
//!
//! Pure text formatting; the host feeds in clock, battery, connection and
//! accelerometer events.

use crate::sim::AccelSample;

/// Battery state as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryState {
    pub percent: u8,
    pub charging: bool,
}

/// Accelerometer axis reported by a tap event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// `HH:MM:SS`
pub fn time_text(hours: u8, minutes: u8, seconds: u8) -> String {
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// `HH:MM:SS` for seconds since midnight (wraps at 24h)
pub fn time_text_from_secs(secs: u64) -> String {
    let secs = secs % 86_400;
    time_text((secs / 3600) as u8, (secs / 60 % 60) as u8, (secs % 60) as u8)
}

pub fn battery_text(state: BatteryState) -> String {
    if state.charging {
        "charging".to_string()
    } else {
        format!("{}% charged", state.percent)
    }
}

pub fn connection_text(connected: bool) -> &'static str {
    if connected { "connected" } else { "disconnected" }
}

/// Table of the first three samples of an accelerometer batch
pub fn accel_text(samples: &[AccelSample]) -> String {
    let mut text = String::from("N X,Y,Z");
    for (i, s) in samples.iter().take(3).enumerate() {
        text.push_str(&format!("\n{} {},{},{}", i, s.x, s.y, s.z));
    }
    text
}

pub fn tap_text(axis: Axis, direction: i32) -> String {
    let sign = if direction > 0 { "positive" } else { "negative" };
    format!("{} axis {}.", axis.as_str(), sign)
}
