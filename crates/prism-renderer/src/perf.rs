//! Frame timing over a rolling window.
//!
//! The animation loop advances by a fixed step per tick, so wall-clock
//! frame pacing is observable only here. Feeds the periodic fps log.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Samples kept by default — two seconds of history at 60 fps.
const DEFAULT_WINDOW: usize = 120;

/// Tracks recent frame durations for fps reporting.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    window: usize,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_WINDOW)
    }

    /// Create a timer keeping at most `window` samples.
    pub fn with_window(window: usize) -> Self {
        let window = window.max(1);
        Self {
            frame_times: VecDeque::with_capacity(window),
            last_frame: Instant::now(),
            window,
        }
    }

    /// Record the start of a new frame. Call once per tick.
    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        if self.frame_times.len() == self.window {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(dt);
    }

    /// Average frames per second over the window, 0.0 before any frame.
    pub fn fps(&self) -> f64 {
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds over the window.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().map(|d| d.as_secs_f64()).sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of samples currently held.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_fps_is_zero() {
        let timer = FrameTimer::new();
        assert_eq!(timer.fps(), 0.0);
        assert_eq!(timer.frame_time_ms(), 0.0);
        assert_eq!(timer.sample_count(), 0);
    }

    #[test]
    fn fps_after_frames() {
        let mut timer = FrameTimer::new();
        for _ in 0..10 {
            std::thread::sleep(Duration::from_millis(1));
            timer.begin_frame();
        }
        assert!(timer.fps() > 0.0);
        assert!(timer.frame_time_ms() > 0.0);
        assert_eq!(timer.sample_count(), 10);
    }

    #[test]
    fn window_size_is_respected() {
        let mut timer = FrameTimer::with_window(8);
        for _ in 0..50 {
            timer.begin_frame();
        }
        assert_eq!(timer.sample_count(), 8);
    }

    #[test]
    fn zero_window_is_clamped() {
        let mut timer = FrameTimer::with_window(0);
        timer.begin_frame();
        timer.begin_frame();
        assert_eq!(timer.sample_count(), 1);
    }
}
