//! Wall-clock source for the scene's `dt`.

use std::time::Instant;

use tracing::debug;

/// Measures the step between frames and clamps it, so a stalled frame
/// (debugger break, window drag) does not integrate one huge step.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    max_dt: f64,
    frames: u64,
}

impl FrameClock {
    /// Longest step handed out by default, in seconds.
    pub const DEFAULT_MAX_DT: f64 = 0.25;

    pub fn new() -> Self {
        Self::with_max_dt(Self::DEFAULT_MAX_DT)
    }

    pub fn with_max_dt(max_dt: f64) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            max_dt,
            frames: 0,
        }
    }

    /// Seconds since the previous call (or since creation), at most `max_dt`.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let raw = (now - self.last_tick).as_secs_f64();
        self.last_tick = now;
        self.frames += 1;
        self.clamp(raw)
    }

    fn clamp(&self, raw: f64) -> f64 {
        if raw > self.max_dt {
            debug!(raw, max_dt = self.max_dt, "frame step clamped");
            self.max_dt
        } else {
            raw
        }
    }

    /// Number of `tick` calls so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }

    /// Seconds since the clock was created.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(2));
        let dt = clock.tick();
        assert!(dt > 0.0);
        assert!(clock.elapsed_secs() >= dt);
        clock.tick();
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_stalled_frame_is_clamped() {
        let mut clock = FrameClock::with_max_dt(0.001);
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(clock.tick(), 0.001);
        assert_eq!(clock.max_dt(), 0.001);
    }

    #[test]
    fn test_short_step_passes_through() {
        let clock = FrameClock::new();
        assert_eq!(clock.clamp(0.016), 0.016);
        assert_eq!(clock.clamp(1.0), FrameClock::DEFAULT_MAX_DT);
    }
}
