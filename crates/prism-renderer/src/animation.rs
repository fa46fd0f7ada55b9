//! The animation loop state machine and time accumulator.
//!
//! Two states: `Running` (ticks advance time) and `Stopped` (terminal).
//! The state is checked at the top of every tick, which makes cancellation
//! observable without a live display. The accumulator is the sole driver
//! of all periodic motion and is never reset.

/// Fixed time advance per tick.
pub const TIME_STEP: f32 = 0.003;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Tick-driven time accumulator with a cancellation state.
#[derive(Debug, Clone)]
pub struct AnimationLoop {
    state: LoopState,
    time: f32,
}

impl AnimationLoop {
    /// A new loop starts `Running` at t = 0.
    pub fn new() -> Self {
        Self {
            state: LoopState::Running,
            time: 0.0,
        }
    }

    /// Advance one tick.
    ///
    /// Returns the new accumulator value, or `None` once stopped — callers
    /// must skip all frame work in that case.
    pub fn tick(&mut self) -> Option<f32> {
        if self.state == LoopState::Stopped {
            return None;
        }
        self.time += TIME_STEP;
        Some(self.time)
    }

    /// Enter the terminal `Stopped` state. Safe to call repeatedly.
    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Current accumulator value.
    pub fn time(&self) -> f32 {
        self.time
    }
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_at_zero() {
        let animation = AnimationLoop::new();
        assert_eq!(animation.state(), LoopState::Running);
        assert!((animation.time() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tick_advances_by_fixed_step() {
        let mut animation = AnimationLoop::new();
        assert_eq!(animation.tick(), Some(TIME_STEP));
        assert_eq!(animation.tick(), Some(TIME_STEP * 2.0));
        assert!((animation.time() - 0.006).abs() < 1e-6);
    }

    #[test]
    fn time_is_monotonic() {
        let mut animation = AnimationLoop::new();
        let mut last = 0.0;
        for _ in 0..1000 {
            let t = animation.tick().unwrap();
            assert!(t > last);
            last = t;
        }
    }

    #[test]
    fn stopped_loop_does_not_tick() {
        let mut animation = AnimationLoop::new();
        animation.tick();
        let frozen = animation.time();

        animation.stop();
        assert_eq!(animation.state(), LoopState::Stopped);
        assert_eq!(animation.tick(), None);
        assert_eq!(animation.tick(), None);
        assert!((animation.time() - frozen).abs() < f32::EPSILON);
    }

    #[test]
    fn stop_is_idempotent_and_terminal() {
        let mut animation = AnimationLoop::new();
        animation.stop();
        animation.stop();
        assert!(!animation.is_running());
        assert_eq!(animation.tick(), None);
    }

    #[test]
    fn stop_before_first_tick() {
        let mut animation = AnimationLoop::new();
        animation.stop();
        assert_eq!(animation.tick(), None);
        assert!((animation.time() - 0.0).abs() < f32::EPSILON);
    }
}
