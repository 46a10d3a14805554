//! Frame pacing and frame-rate measurement
//!
//! Time is read through [`Clock`] as whole milliseconds so the loop can be
//! driven by a manual clock in tests.

use crate::{Config, Params};
use std::time::{Duration, Instant};
use tracing::trace;

/// Time source for the session loop
pub trait Clock {
    /// Milliseconds since some fixed origin
    fn now_ms(&self) -> u64;

    /// Block the calling thread
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and [`std::thread::sleep`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Counts completed frames over rolling one-second windows.
///
/// The published rate only changes when a window closes, so it lags by up to
/// one window and is never smoothed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateMeter {
    frame_count: u32,
    window_start: u64,
    rate: u32,
}

impl RateMeter {
    pub fn new(now_ms: u64) -> Self {
        Self {
            frame_count: 0,
            window_start: now_ms,
            rate: 0,
        }
    }

    /// Count one completed frame. Returns the newly published rate if this
    /// frame closed the window.
    pub fn record_frame(&mut self, now_ms: u64) -> Option<u32> {
        self.frame_count += 1;
        if now_ms.saturating_sub(self.window_start) < Params::RATE_WINDOW_MS {
            return None;
        }
        self.rate = self.frame_count;
        self.frame_count = 0;
        self.window_start = now_ms;
        trace!(fps = self.rate, "Frame rate window closed");
        Some(self.rate)
    }

    /// Last published frames-per-second
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Frames counted in the open window
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}

/// Sleeps out the rest of each frame to hold the target frame rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame_delay: Duration,
    frame_start: u64,
    meter: RateMeter,
}

impl FramePacer {
    pub fn new(config: &Config, now_ms: u64) -> Self {
        Self {
            frame_delay: config.frame_delay(),
            frame_start: now_ms,
            meter: RateMeter::new(now_ms),
        }
    }

    pub fn begin_frame(&mut self, now_ms: u64) {
        self.frame_start = now_ms;
    }

    /// How long to sleep after a frame that took `elapsed`. Zero on overrun.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_delay.saturating_sub(elapsed)
    }

    /// Close the current frame: count it, then sleep for whatever is left of
    /// the target frame duration. Returns the time slept.
    pub fn end_frame(&mut self, clock: &impl Clock) -> Duration {
        self.meter.record_frame(clock.now_ms());

        let elapsed = Duration::from_millis(clock.now_ms().saturating_sub(self.frame_start));
        let remaining = self.remaining(elapsed);
        if !remaining.is_zero() {
            clock.sleep(remaining);
        }
        remaining
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Last published frames-per-second
    pub fn fps(&self) -> u32 {
        self.meter.rate()
    }

    pub fn meter(&self) -> &RateMeter {
        &self.meter
    }
}
