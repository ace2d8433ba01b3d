//! Frame clock for driving effects and caption timers.
//!
//! Provides a single source of truth for elapsed time across the slideshow.
//! Elapsed time is accumulated from per-frame deltas, so a fixed delta makes
//! the whole timeline deterministic - the scheduler tests drive everything
//! through [`Clock::set_fixed_delta`] without sleeping.
//!
//! # Example
//!
//! ```ignore
//! use fiesta::time::Clock;
//!
//! let mut clock = Clock::new();
//!
//! // In your frame loop:
//! let (elapsed, delta) = clock.update();
//! ```

use std::time::{Duration, Instant};

/// Time tracking for the slideshow loop.
///
/// Tracks accumulated elapsed time, per-frame delta, and frame count.
/// Supports pausing, time scaling, and fixed-delta stepping.
#[derive(Debug)]
pub struct Clock {
    /// When the last frame occurred.
    last_frame: Instant,
    /// Accumulated elapsed time.
    elapsed: Duration,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Whether time is paused.
    paused: bool,
    /// Fixed delta time for deterministic updates (optional).
    fixed_delta: Option<f32>,
    /// Time scale multiplier (1.0 = normal speed).
    time_scale: f32,
}

impl Clock {
    /// Create a new clock starting from now.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            elapsed: Duration::ZERO,
            delta_secs: 0.0,
            frame_count: 0,
            paused: false,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Update timing values. Call once per frame.
    ///
    /// Returns `(elapsed_secs, delta_secs)` for convenience.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.paused {
            self.delta_secs = 0.0;
            return (self.elapsed.as_secs_f32(), 0.0);
        }

        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta) * self.time_scale;
        self.elapsed += Duration::from_secs_f32(self.delta_secs);
        self.frame_count += 1;

        (self.elapsed.as_secs_f32(), self.delta_secs)
    }

    /// Advance the clock by an explicit amount, ignoring wall time.
    ///
    /// Useful in tests and headless drivers. Respects pause but not the
    /// fixed delta or time scale - the caller decides the step.
    pub fn step(&mut self, delta: Duration) {
        if self.paused {
            return;
        }
        self.delta_secs = delta.as_secs_f32();
        self.elapsed += delta;
        self.frame_count += 1;
    }

    /// Accumulated elapsed time.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Accumulated elapsed time in seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Time since last frame in seconds (delta time).
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Whether time is currently paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Current time scale multiplier.
    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Pause time progression.
    ///
    /// While paused, `delta()` returns 0 and `elapsed()` stops increasing.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume time progression after pausing.
    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.paused = false;
        }
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Set a fixed delta time for deterministic updates.
    ///
    /// Pass `None` to use real frame timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Set time scale multiplier.
    ///
    /// - `1.0` = normal speed
    /// - `0.5` = half speed
    /// - `2.0` = double speed
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Reset the clock to its initial state.
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
        self.elapsed = Duration::ZERO;
        self.delta_secs = 0.0;
        self.frame_count = 0;
        self.paused = false;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
