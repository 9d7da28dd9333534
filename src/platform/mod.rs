//! Platform abstraction layer
//!
//! Host services the driver needs:
//! - One-shot timers (`Scheduler`)
//! - Latest accelerometer reading (`Accelerometer`)
//! - Redraw requests (`RedrawTarget`)
//!
//! Plus a headless cooperative event loop with a virtual clock, used by the
//! native binary and the tests.

use std::collections::{BTreeSet, VecDeque};

use crate::sim::AccelSample;

/// Handle for a scheduled one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

pub trait Scheduler {
    /// Fire once after `delay_ms`. Repeating requires re-arming.
    fn schedule_once(&mut self, delay_ms: u32) -> TimerId;
    /// Returns false if the timer already fired or was never scheduled
    fn cancel(&mut self, id: TimerId) -> bool;
}

pub trait Accelerometer {
    /// Non-blocking snapshot of the most recent sample, `None` before the
    /// first one arrives
    fn peek(&mut self) -> Option<AccelSample>;
}

pub trait RedrawTarget {
    /// Ask for a redraw before the next frame is presented
    fn mark_dirty(&mut self);
}

/// Single-threaded timer queue driven by a virtual millisecond clock
///
/// Callbacks are dispatched one at a time by the caller:
/// `while let Some(id) = event_loop.next_timer() { ... }`.
#[derive(Debug, Default)]
pub struct EventLoop {
    now_ms: u64,
    next_id: u64,
    /// Keyed by (deadline, id) so equal deadlines fire in schedule order
    pending: BTreeSet<(u64, u64)>,
}

impl EventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Pop the earliest timer and move the clock to its deadline
    pub fn next_timer(&mut self) -> Option<TimerId> {
        let (deadline, id) = self.pending.pop_first()?;
        self.now_ms = self.now_ms.max(deadline);
        Some(TimerId(id))
    }

    /// Account for time spent inside a callback
    pub fn spend(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl Scheduler for EventLoop {
    fn schedule_once(&mut self, delay_ms: u32) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.pending.insert((self.now_ms + delay_ms as u64, id));
        TimerId(id)
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        let key = self.pending.iter().find(|(_, timer)| *timer == id.0).copied();
        match key {
            Some(key) => self.pending.remove(&key),
            None => false,
        }
    }
}

/// Accelerometer fed from a script of samples
///
/// Each `peek` consumes the next scripted sample if there is one, otherwise
/// repeats the last sample seen.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAccelerometer {
    script: VecDeque<AccelSample>,
    latest: Option<AccelSample>,
}

impl ScriptedAccelerometer {
    /// No sample has arrived yet
    pub fn new() -> Self {
        Self::default()
    }

    pub fn constant(sample: AccelSample) -> Self {
        Self {
            script: VecDeque::new(),
            latest: Some(sample),
        }
    }

    pub fn from_samples(samples: impl IntoIterator<Item = AccelSample>) -> Self {
        Self {
            script: samples.into_iter().collect(),
            latest: None,
        }
    }

    pub fn push(&mut self, sample: AccelSample) {
        self.script.push_back(sample);
    }
}

impl Accelerometer for ScriptedAccelerometer {
    fn peek(&mut self) -> Option<AccelSample> {
        if let Some(sample) = self.script.pop_front() {
            self.latest = Some(sample);
        }
        self.latest
    }
}
