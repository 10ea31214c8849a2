//! Fixed-rate tick scheduling.
//!
//! The real-time loop feeds wall-clock frame durations into a [`Ticker`],
//! which answers how many fixed simulation steps are due. Simulated time
//! advances only by whole steps, so game logic never sees a variable delta.

use crate::core::constants::MAX_CATCH_UP_TICKS;
use std::time::Duration;

/// Fixed-step accumulator with a bounded catch-up.
#[derive(Debug, Clone)]
pub struct Ticker {
    step: Duration,
    accumulator: Duration,
    ticks: u64,
    ticks_per_second: u32,
}

impl Ticker {
    pub fn new(ticks_per_second: u32) -> Self {
        let ticks_per_second = ticks_per_second.max(1);
        Self {
            step: Duration::from_secs(1) / ticks_per_second,
            accumulator: Duration::ZERO,
            ticks: 0,
            ticks_per_second,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Feed elapsed wall-clock time and return how many steps to run now.
    ///
    /// At most [`MAX_CATCH_UP_TICKS`] steps are returned; any backlog beyond
    /// that is discarded so a stall cannot snowball.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.step && due < MAX_CATCH_UP_TICKS {
            self.accumulator -= self.step;
            due += 1;
        }
        if self.accumulator >= self.step {
            self.accumulator = Duration::ZERO;
        }
        due
    }

    /// Consume one step and return the simulated time in milliseconds.
    pub fn tick(&mut self) -> u64 {
        self.ticks += 1;
        self.now_ms()
    }

    /// Simulated milliseconds since the ticker started.
    pub fn now_ms(&self) -> u64 {
        self.ticks * 1000 / self.ticks_per_second as u64
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How long to wait before the next step is due.
    pub fn time_until_next(&self, since_last_advance: Duration) -> Duration {
        self.step
            .saturating_sub(self.accumulator + since_last_advance)
    }
}
