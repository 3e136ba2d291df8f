//! Frame timing from host millisecond timestamps
//!
//! The host calls into these with wall-clock time (`Date.now()` in the
//! browser, a synthetic clock natively). Nothing here reads a clock itself.

use serde::Serialize;

use crate::consts::FRAMERATE;

/// Frames kept for the rolling latency average
const WINDOW: usize = 60;

/// Measures `delta` between frames and keeps HUD statistics
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    deltas: [f32; WINDOW],
    index: usize,
    filled: usize,
}

/// Snapshot shown on the HUD
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FrameStats {
    /// `round(1 / delta)` of the last frame
    pub fps: u32,
    /// Last frame's delta in seconds
    pub latency: f32,
    /// Mean delta over the last 60 frames, seconds
    pub avg_latency: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            deltas: [0.0; WINDOW],
            index: 0,
            filled: 0,
        }
    }

    /// Seconds since the previous call. The first frame assumes the nominal
    /// frame rate. A clock that runs backwards yields 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last).max(0.0) / 1000.0) as f32,
            None => 1.0 / FRAMERATE,
        };
        self.last_ms = Some(now_ms);

        self.deltas[self.index] = dt;
        self.index = (self.index + 1) % WINDOW;
        self.filled = (self.filled + 1).min(WINDOW);
        dt
    }

    pub fn stats(&self) -> FrameStats {
        if self.filled == 0 {
            return FrameStats::default();
        }
        let last = self.deltas[(self.index + WINDOW - 1) % WINDOW];
        let sum: f32 = self.deltas.iter().take(self.filled).sum();
        FrameStats {
            fps: if last > 0.0 {
                (1.0 / last).round() as u32
            } else {
                0
            },
            latency: last,
            avg_latency: sum / self.filled as f32,
        }
    }
}

/// Fires every `interval_ms` of wall-clock time
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval_ms: f64,
    next_ms: Option<f64>,
}

impl IntervalTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            next_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Arm the timer; the first firing is one interval after `now_ms`
    pub fn start(&mut self, now_ms: f64) {
        self.next_ms = Some(now_ms + self.interval_ms);
    }

    /// Number of intervals elapsed since the last poll. Unarmed timers and
    /// non-positive intervals never fire.
    pub fn poll(&mut self, now_ms: f64) -> u32 {
        let Some(mut next) = self.next_ms else {
            return 0;
        };
        if self.interval_ms <= 0.0 {
            return 0;
        }
        let mut fired = 0;
        while now_ms >= next {
            fired += 1;
            next += self.interval_ms;
        }
        self.next_ms = Some(next);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_nominal() {
        let mut clock = FrameClock::new();
        let dt = clock.tick(1_000.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(clock.stats().fps, 60);
    }

    #[test]
    fn test_delta_from_timestamps() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        let dt = clock.tick(20.0);
        assert!((dt - 0.02).abs() < 1e-6);
        assert_eq!(clock.stats().fps, 50);
    }

    #[test]
    fn test_backwards_clock() {
        let mut clock = FrameClock::new();
        clock.tick(100.0);
        assert_eq!(clock.tick(50.0), 0.0);
        assert_eq!(clock.stats().fps, 0);
    }

    #[test]
    fn test_rolling_average() {
        let mut clock = FrameClock::new();
        let mut now = 0.0;
        clock.tick(now);
        for _ in 0..100 {
            now += 10.0;
            clock.tick(now);
        }
        // The nominal first frame has rolled out of the window
        assert!((clock.stats().avg_latency - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_interval_timer() {
        let mut timer = IntervalTimer::new(5_000.0);
        assert_eq!(timer.poll(10_000.0), 0);

        timer.start(1_000.0);
        assert_eq!(timer.poll(5_999.0), 0);
        assert_eq!(timer.poll(6_000.0), 1);
        assert_eq!(timer.poll(6_001.0), 0);
        // A stalled host catches up on missed intervals
        assert_eq!(timer.poll(21_000.0), 3);
    }
}
