//! Wall-clock-derived simulation time with pause accounting.
//!
//! Simulated time is wall time minus the round start minus every paused
//! interval, so pausing never advances it. Timestamps are seconds on any
//! monotonic wall clock chosen by the caller.

use island_core::constants::FRAME_RATE_INTERVAL;

/// Simulated time and the step since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub t: f64,
    pub dt: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SimulationClock {
    start: Option<f64>,
    stopped_at: Option<f64>,
    paused_total: f64,
    running: bool,
    halted: bool,
    last_t: Option<f64>,

    // --- Frame rate ---
    frames: u32,
    last_rate_t: f64,
    frame_rate: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin counting from `now`. Ignored once started.
    pub fn start(&mut self, now: f64) {
        if self.start.is_some() {
            return;
        }
        self.start = Some(now);
        self.running = true;
    }

    /// Pause if running, resume if paused. Returns whether the clock is
    /// now running. A halted or unstarted clock stays stopped.
    pub fn toggle_pause(&mut self, now: f64) -> bool {
        if self.start.is_none() || self.halted {
            return false;
        }
        if self.running {
            self.stopped_at = Some(now);
            self.running = false;
        } else if let Some(stopped) = self.stopped_at.take() {
            self.paused_total += now - stopped;
            self.running = true;
        }
        self.running
    }

    /// Stop for good. Simulated time freezes where it is.
    pub fn halt(&mut self) {
        self.running = false;
        self.halted = true;
    }

    /// Simulated time at wall time `now`, frozen while paused.
    pub fn sim_time(&self, now: f64) -> f64 {
        let Some(start) = self.start else {
            return 0.0;
        };
        let wall = if self.running {
            now
        } else {
            self.stopped_at.unwrap_or(now)
        };
        match (self.halted, self.last_t) {
            (true, Some(t)) => t,
            _ => wall - self.paused_total - start,
        }
    }

    /// Sample the clock for a new frame. The first sample after start only
    /// primes the clock and returns `None`, as does every sample while
    /// stopped.
    pub fn advance(&mut self, now: f64) -> Option<FrameTime> {
        if !self.running {
            return None;
        }
        let t = self.sim_time(now);
        let Some(last) = self.last_t.replace(t) else {
            self.last_rate_t = t;
            return None;
        };

        self.frames += 1;
        let since_rate = t - self.last_rate_t;
        if since_rate > FRAME_RATE_INTERVAL {
            self.frame_rate = self.frames as f64 / since_rate;
            self.last_rate_t = t;
            self.frames = 0;
        }

        Some(FrameTime { t, dt: t - last })
    }

    /// Frames per simulated second, refreshed every few tenths of a second.
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unstarted_clock_is_idle() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.advance(5.0), None);
        assert!(!clock.toggle_pause(5.0));
        assert_eq!(clock.sim_time(5.0), 0.0);
    }

    #[test]
    fn test_first_frame_primes() {
        let mut clock = SimulationClock::new();
        clock.start(10.0);
        assert_eq!(clock.advance(10.5), None);
        let frame = clock.advance(10.6).unwrap();
        assert!((frame.t - 0.6).abs() < 1e-9);
        assert!((frame.dt - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut clock = SimulationClock::new();
        clock.start(0.0);
        clock.advance(0.0);
        clock.advance(1.0);

        assert!(!clock.toggle_pause(1.0));
        assert_eq!(clock.advance(3.0), None);
        assert!((clock.sim_time(3.0) - 1.0).abs() < 1e-9, "paused time must not advance");

        assert!(clock.toggle_pause(5.0));
        let frame = clock.advance(5.5).unwrap();
        // Four paused seconds are excluded.
        assert!((frame.t - 1.5).abs() < 1e-9);
        assert!((frame.dt - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_halt_is_final() {
        let mut clock = SimulationClock::new();
        clock.start(0.0);
        clock.advance(0.0);
        clock.advance(2.0);
        clock.halt();
        assert_eq!(clock.advance(3.0), None);
        assert!(!clock.toggle_pause(4.0));
        assert_eq!(clock.sim_time(10.0), 2.0);
    }

    #[test]
    fn test_restart_is_ignored() {
        let mut clock = SimulationClock::new();
        clock.start(1.0);
        clock.start(7.0);
        assert!((clock.sim_time(2.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_frame_rate() {
        let mut clock = SimulationClock::new();
        clock.start(0.0);
        clock.advance(0.0);
        for i in 1..=30 {
            clock.advance(i as f64 * 0.01);
        }
        // 20 frames land before the 0.2 s window closes at t = 0.21.
        let rate = clock.frame_rate();
        assert!((rate - 100.0).abs() < 1.0, "rate {rate}");
    }
}
