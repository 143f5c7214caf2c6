//! Step Countdown Timer
//!
//! State machine for a per-instruction-step countdown. Each rendered step
//! with a timer duration owns exactly one instance; instances are fully
//! isolated from each other. The host drives the machine with one `tick()`
//! per elapsed second while it reports `Running`, and owns the scheduled
//! tick handle: every transition out of `Running` tells the host whether
//! the pending tick must be cancelled.
//!
//! All transitions are total: illegal ones (e.g. `start` while `Completed`)
//! are no-ops, never errors.

use serde::{Deserialize, Serialize};

/// Timer lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerState {
    /// Full duration remaining, not counting down
    Idle,
    /// Counting down, one tick per second
    Running,
    /// Halted with time remaining
    Paused,
    /// Reached zero; terminal until an explicit reset
    Completed,
}

/// One-time signal emitted when the countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Completed,
}

/// Countdown state for a single instruction step.
///
/// Invariant: `remaining_seconds` is in `[0, total_seconds]`, non-increasing
/// while `Running`, and reaches 0 exactly once per run, at which point the
/// state becomes `Completed` until `reset()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    state: TimerState,
}

impl StepTimer {
    /// Create an idle timer for the given duration.
    /// Durations are clamped to at least one second.
    pub fn new(total_seconds: u32) -> Self {
        let total = total_seconds.max(1);
        Self {
            total_seconds: total,
            remaining_seconds: total,
            state: TimerState::Idle,
        }
    }

    /// Create a timer from a duration in minutes. Recipe steps carry
    /// fractional minutes (0.5 for "30 seconds"), so the duration is
    /// rounded to whole seconds.
    pub fn from_minutes(minutes: f64) -> Self {
        Self::new((minutes * 60.0).round() as u32)
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_completed(&self) -> bool {
        self.state == TimerState::Completed
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Begin or resume the countdown. Returns `true` if the timer actually
    /// transitioned into `Running` and the host must schedule a tick.
    /// No-op while already `Running` (no duplicate ticks) or `Completed`
    /// (only `reset` re-arms a finished timer).
    pub fn start(&mut self) -> bool {
        match self.state {
            TimerState::Idle | TimerState::Paused => {
                self.state = TimerState::Running;
                true
            }
            TimerState::Running | TimerState::Completed => false,
        }
    }

    /// Halt the countdown, preserving the remaining time. Returns `true` if
    /// the timer left `Running` and the host must cancel its pending tick.
    pub fn pause(&mut self) -> bool {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
            true
        } else {
            false
        }
    }

    /// Return to `Idle` with the full duration remaining, from any state.
    /// The host must cancel any pending tick.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.state = TimerState::Idle;
    }

    /// Apply one elapsed second. Only decrements while `Running`; a tick
    /// that lands after a pause or reset is a no-op. Returns
    /// `Some(TimerEvent::Completed)` exactly once, on the tick that reaches
    /// zero, at which point the state becomes `Completed`.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.state = TimerState::Completed;
            Some(TimerEvent::Completed)
        } else {
            None
        }
    }

    /// Remaining time as `MM:SS`, both zero-padded. Minutes are total
    /// minutes, not wrapped at 59.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }

    /// Elapsed fraction in `[0, 1]`, non-decreasing while running.
    pub fn progress(&self) -> f64 {
        f64::from(self.total_seconds - self.remaining_seconds) / f64::from(self.total_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_from_minutes() {
        let timer = StepTimer::from_minutes(10.0);
        assert_eq!(timer.total_seconds(), 600);
        assert_eq!(timer.remaining_seconds(), 600);
        assert_eq!(timer.display(), "10:00");
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_fractional_minutes() {
        let timer = StepTimer::from_minutes(0.5);
        assert_eq!(timer.total_seconds(), 30);
        assert_eq!(timer.display(), "00:30");
    }

    #[test]
    fn test_zero_duration_clamped_to_one_second() {
        let timer = StepTimer::new(0);
        assert_eq!(timer.total_seconds(), 1);
    }

    #[test]
    fn test_full_run_completes_with_single_emission() {
        let mut timer = StepTimer::from_minutes(10.0);
        assert!(timer.start());

        let mut emissions = 0;
        for _ in 0..600 {
            if timer.tick() == Some(TimerEvent::Completed) {
                emissions += 1;
            }
        }

        assert_eq!(emissions, 1);
        assert_eq!(timer.state(), TimerState::Completed);
        assert_eq!(timer.remaining_seconds(), 0);
        assert_eq!(timer.display(), "00:00");
        assert_eq!(timer.progress(), 1.0);

        // Stray ticks after completion change nothing and re-emit nothing
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_pause_preserves_remaining() {
        let mut timer = StepTimer::new(60);
        timer.start();
        for _ in 0..5 {
            timer.tick();
        }
        assert!(timer.pause());
        assert_eq!(timer.state(), TimerState::Paused);

        // Ticks landing while paused are no-ops
        for _ in 0..5 {
            assert_eq!(timer.tick(), None);
        }
        assert_eq!(timer.remaining_seconds(), 55);
    }

    #[test]
    fn test_resume_from_paused() {
        let mut timer = StepTimer::new(60);
        timer.start();
        timer.tick();
        timer.pause();
        assert!(timer.start());
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 58);
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn test_start_is_idempotent_while_running() {
        let mut timer = StepTimer::new(60);
        assert!(timer.start());
        // Second start must not request another scheduled tick
        assert!(!timer.start());
        assert_eq!(timer.state(), TimerState::Running);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut timer = StepTimer::new(60);
        timer.start();
        timer.pause();
        assert!(!timer.pause());
        assert_eq!(timer.state(), TimerState::Paused);

        // Pausing an idle timer does nothing
        let mut idle = StepTimer::new(60);
        assert!(!idle.pause());
        assert_eq!(idle.state(), TimerState::Idle);
    }

    #[test]
    fn test_start_after_completed_is_noop() {
        let mut timer = StepTimer::new(2);
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.state(), TimerState::Completed);

        assert!(!timer.start());
        assert_eq!(timer.state(), TimerState::Completed);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut timer = StepTimer::new(10);
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);

        timer.start();
        timer.tick();
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_seconds(), 10);

        timer.start();
        timer.tick();
        timer.pause();
        timer.reset();
        assert_eq!(timer.remaining_seconds(), 10);

        timer.start();
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.state(), TimerState::Completed);
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_seconds(), 10);

        // A re-armed timer can complete (and emit) again
        timer.start();
        let mut emissions = 0;
        for _ in 0..10 {
            if timer.tick().is_some() {
                emissions += 1;
            }
        }
        assert_eq!(emissions, 1);
    }

    #[test]
    fn test_display_does_not_wrap_minutes_at_59() {
        let timer = StepTimer::new(3_900);
        assert_eq!(timer.display(), "65:00");
    }

    #[test]
    fn test_progress_monotonic_while_running() {
        let mut timer = StepTimer::new(30);
        timer.start();
        let mut last = timer.progress();
        while timer.is_running() {
            timer.tick();
            let progress = timer.progress();
            assert!(progress >= last);
            assert!((0.0..=1.0).contains(&progress));
            last = progress;
        }
    }
}
