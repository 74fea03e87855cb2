//! Frame timing: turns time samples into step deltas.

use core::cell::Cell;

/// A source of monotonically non-decreasing time, in seconds.
pub trait TimeSource {
    fn now(&self) -> f64;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> f64 {
        (**self).now()
    }
}

/// Time source that only moves when told to. Useful for tests and offline
/// stepping.
#[derive(Debug, Default)]
pub struct ManualTime {
    now: Cell<f64>,
}

impl ManualTime {
    pub fn new(start: f64) -> Self {
        ManualTime { now: Cell::new(start) }
    }

    pub fn set(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl TimeSource for ManualTime {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Derives per-frame deltas from successive time samples.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// A clock with no prior sample. Its first tick yields no delta.
    pub fn new() -> Self {
        FrameClock { last: None }
    }

    /// A clock whose first tick measures from `start`.
    pub fn starting_at(start: f64) -> Self {
        FrameClock { last: Some(start) }
    }

    /// Record `now` and return the time since the previous sample, or `None`
    /// if this is the first sample.
    ///
    /// The delta is returned as-is; range checking belongs to the integrator.
    pub fn tick(&mut self, now: f64) -> Option<f32> {
        let dt = self.last.map(|last| (now - last) as f32);
        self.last = Some(now);
        dt
    }

    pub fn last_sample(&self) -> Option<f64> {
        self.last
    }

    /// Forget the last sample, e.g. after a pause.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
