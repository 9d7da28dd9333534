//! Simulation driver
//!
//! Owns the simulation for the lifetime of the watch app and advances it from
//! a one-shot timer that re-arms itself after each tick. A slow tick delays
//! every later tick; there is no catch-up.

use crate::platform::{Accelerometer, RedrawTarget, Scheduler, TimerId};
use crate::settings::Settings;
use crate::sim::{AccelSample, Simulation, tick};

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    /// Constructed, no timer armed yet
    Idle,
    /// A tick timer is always pending
    Running,
    /// Torn down; no more ticks
    Stopped,
}

#[derive(Debug)]
pub struct Driver {
    settings: Settings,
    phase: DriverPhase,
    sim: Option<Simulation>,
    /// The one timer this driver answers to
    timer: Option<TimerId>,
}

impl Driver {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            phase: DriverPhase::Idle,
            sim: None,
            timer: None,
        }
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    /// Current simulation, present only while running
    pub fn simulation(&self) -> Option<&Simulation> {
        self.sim.as_ref()
    }

    /// Seed the population and arm the first tick
    pub fn start<S: Scheduler>(&mut self, scheduler: &mut S) {
        if self.phase != DriverPhase::Idle {
            log::warn!("Driver start ignored in {:?}", self.phase);
            return;
        }

        let sim = Simulation::from_settings(&self.settings);
        log::info!(
            "Starting {} discs on {} {}x{} display, tick every {}ms",
            sim.len(),
            self.settings.display.as_str(),
            self.settings.width,
            self.settings.height,
            self.settings.tick_ms
        );
        self.sim = Some(sim);
        self.timer = Some(scheduler.schedule_once(self.settings.tick_ms));
        self.phase = DriverPhase::Running;
    }

    /// Timer callback. Returns true if a tick ran.
    ///
    /// Firings for any timer other than the armed one are ignored, so a
    /// late callback after `stop` does nothing.
    pub fn on_timer<S, A, R>(
        &mut self,
        id: TimerId,
        scheduler: &mut S,
        accel: &mut A,
        surface: &mut R,
    ) -> bool
    where
        S: Scheduler,
        A: Accelerometer,
        R: RedrawTarget,
    {
        if self.phase != DriverPhase::Running || self.timer != Some(id) {
            log::debug!("Ignoring stale timer {:?} in {:?}", id, self.phase);
            return false;
        }
        let Some(sim) = self.sim.as_mut() else {
            return false;
        };

        let sample = accel.peek().unwrap_or(AccelSample::ZERO);
        tick(sim, sample);
        surface.mark_dirty();

        self.timer = Some(scheduler.schedule_once(self.settings.tick_ms));
        true
    }

    /// Cancel the pending tick, then drop the population
    pub fn stop<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.timer.take() {
            scheduler.cancel(id);
        }
        if let Some(sim) = self.sim.take() {
            log::info!("Stopped after {} ticks", sim.time_ticks);
        }
        self.phase = DriverPhase::Stopped;
    }
}
