//! Timer data structures for the fixed activity list

use serde::{Deserialize, Serialize};

/// Countdown budget shared by every timer: 30 minutes
pub const INITIAL_TIME_SECONDS: u32 = 30 * 60;

/// Immutable display metadata for one tracked activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    pub id: u32,
    pub title: String,
    pub description: String,
}

/// Lifecycle phase of a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerPhase {
    /// Stopped with budget remaining
    Idle,
    /// Counting down
    Running,
    /// Budget exhausted; there is no re-arm path
    Expired,
}

/// One countdown timer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    pub config: TimerConfig,
    /// Whether the timer is currently counting down
    pub is_running: bool,
    /// Seconds remaining, always in [0, INITIAL_TIME_SECONDS]
    pub time_left: u32,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            is_running: false,
            time_left: INITIAL_TIME_SECONDS,
        }
    }

    pub fn id(&self) -> u32 {
        self.config.id
    }

    pub fn phase(&self) -> TimerPhase {
        if self.time_left == 0 {
            TimerPhase::Expired
        } else if self.is_running {
            TimerPhase::Running
        } else {
            TimerPhase::Idle
        }
    }

    /// Seconds consumed so far this session
    pub fn seconds_elapsed(&self) -> u32 {
        INITIAL_TIME_SECONDS - self.time_left
    }

    /// Whether this timer was ever started
    pub fn was_used(&self) -> bool {
        self.time_left < INITIAL_TIME_SECONDS
    }

    /// One-second advance. Only a Running timer changes; a timer reaching
    /// zero stops in the same step, so `time_left` never goes negative.
    pub(crate) fn ticked(&self) -> Self {
        if !self.is_running || self.time_left == 0 {
            return self.clone();
        }
        let time_left = self.time_left - 1;
        Self {
            config: self.config.clone(),
            is_running: time_left > 0,
            time_left,
        }
    }

    /// Start/pause flip, `time_left` untouched. Expired timers stay expired.
    pub(crate) fn toggled(&self) -> Self {
        if self.time_left == 0 {
            return self.clone();
        }
        Self {
            config: self.config.clone(),
            is_running: !self.is_running,
            time_left: self.time_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_timer() -> Timer {
        Timer::new(TimerConfig {
            id: 1,
            title: "Fanpage: IELTS Listening 8.5".to_string(),
            description: "Create a new post for the fanpage.".to_string(),
        })
    }

    #[test]
    fn test_tick_decrements_running_timer() {
        let mut timer = test_timer();
        timer.is_running = true;

        let ticked = timer.ticked();
        assert_eq!(ticked.time_left, INITIAL_TIME_SECONDS - 1);
        assert!(ticked.is_running);
        assert_eq!(ticked.phase(), TimerPhase::Running);
    }

    #[test]
    fn test_tick_ignores_idle_timer() {
        let timer = test_timer();
        let ticked = timer.ticked();
        assert_eq!(ticked, timer);
    }

    #[test]
    fn test_auto_stop_on_last_second() {
        let mut timer = test_timer();
        timer.is_running = true;
        timer.time_left = 1;

        let ticked = timer.ticked();
        assert_eq!(ticked.time_left, 0);
        assert!(!ticked.is_running);
        assert_eq!(ticked.phase(), TimerPhase::Expired);
    }

    #[test]
    fn test_expired_timer_never_goes_negative() {
        let mut timer = test_timer();
        timer.is_running = true;
        timer.time_left = 1;

        let mut ticked = timer.ticked();
        for _ in 0..10 {
            ticked = ticked.ticked();
        }
        assert_eq!(ticked.time_left, 0);
        assert!(!ticked.is_running);
    }

    #[test]
    fn test_toggle_flips_without_touching_time() {
        let mut timer = test_timer();
        timer.time_left = 900;

        let started = timer.toggled();
        assert!(started.is_running);
        assert_eq!(started.time_left, 900);

        let paused = started.toggled();
        assert!(!paused.is_running);
        assert_eq!(paused.time_left, 900);
    }

    #[test]
    fn test_toggle_on_expired_is_noop() {
        let mut timer = test_timer();
        timer.time_left = 0;

        let toggled = timer.toggled();
        assert_eq!(toggled, timer);
        assert_eq!(toggled.phase(), TimerPhase::Expired);
    }
}
