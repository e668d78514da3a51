//! Day clock: UTC day progress, day keys and the animation timer.

use std::time::Instant;

use chrono::{DateTime, Timelike, Utc};

use crate::error::BlobError;

/// Seconds in one UTC day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Fraction of the UTC day elapsed at `seconds` since midnight.
pub fn day_progress_from_seconds(seconds: f64) -> f64 {
    seconds / SECONDS_PER_DAY as f64
}

/// Seconds since UTC midnight, including the fractional part.
pub fn seconds_since_midnight(now: DateTime<Utc>) -> f64 {
    now.num_seconds_from_midnight() as f64 + now.nanosecond() as f64 / 1e9
}

/// Calendar date of `now` as `YYYY-MM-DD`.
pub fn day_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Today's UTC calendar date as `YYYY-MM-DD`.
pub fn today_key() -> String {
    day_key(Utc::now())
}

/// Format seconds since midnight as `HH:MM:SS`.
pub fn format_time(seconds: u32) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Maps wall-clock time to day progress and tracks elapsed animation time.
#[derive(Debug, Clone)]
pub struct DayClock {
    started: Instant,
    /// Seconds since UTC midnight used instead of the wall clock
    time_override: Option<u32>,
}

impl Default for DayClock {
    fn default() -> Self {
        Self::new()
    }
}

impl DayClock {
    /// Start a clock reading the wall clock.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            time_override: None,
        }
    }

    /// Start a clock pinned to `seconds` since UTC midnight.
    pub fn with_override(seconds: u32) -> Result<Self, BlobError> {
        let mut clock = Self::new();
        clock.set_override(Some(seconds))?;
        Ok(clock)
    }

    /// Pin (or with `None`, release) the time of day.
    pub fn set_override(&mut self, seconds: Option<u32>) -> Result<(), BlobError> {
        if let Some(s) = seconds {
            if s >= SECONDS_PER_DAY {
                return Err(BlobError::TimeOverrideOutOfRange(s));
            }
        }
        self.time_override = seconds;
        Ok(())
    }

    /// Return to the wall clock.
    pub fn clear_override(&mut self) {
        self.time_override = None;
    }

    pub fn time_override(&self) -> Option<u32> {
        self.time_override
    }

    /// Fraction of the UTC day elapsed, in [0, 1).
    pub fn day_progress(&self) -> f64 {
        self.day_progress_at(Utc::now())
    }

    /// Day progress as seen at `now`; the override wins when set.
    pub fn day_progress_at(&self, now: DateTime<Utc>) -> f64 {
        match self.time_override {
            Some(seconds) => day_progress_from_seconds(seconds as f64),
            None => day_progress_from_seconds(seconds_since_midnight(now)),
        }
    }

    /// Shift the pinned time of day by `delta_secs`, wrapping around midnight.
    ///
    /// Without an override the shift starts from the wall clock.
    pub fn scrub(&mut self, delta_secs: i64) -> u32 {
        self.scrub_at(delta_secs, Utc::now())
    }

    pub fn scrub_at(&mut self, delta_secs: i64, now: DateTime<Utc>) -> u32 {
        let from = self
            .time_override
            .unwrap_or_else(|| seconds_since_midnight(now) as u32);
        let seconds = (from as i64 + delta_secs).rem_euclid(SECONDS_PER_DAY as i64) as u32;
        self.time_override = Some(seconds);
        seconds
    }

    /// Seconds since the clock was started (monotonic).
    pub fn elapsed_time(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

/// Remembers the current day key and reports when the calendar day changes.
#[derive(Debug, Clone)]
pub struct RolloverTracker {
    current: String,
}

impl RolloverTracker {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            current: key.into(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Record `key`; returns true when it differs from the previous day.
    pub fn observe(&mut self, key: &str) -> bool {
        if key == self.current {
            return false;
        }
        self.current = key.to_string();
        true
    }
}
