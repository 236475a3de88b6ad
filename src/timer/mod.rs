//! Countdown timers for the fixed activity list

mod data;
pub mod loader;

pub use data::{Timer, TimerConfig, TimerPhase, INITIAL_TIME_SECONDS};

use log::debug;
use std::error::Error;

/// The full collection of session timers
///
/// Created once at startup from the activity config list; never grows or
/// shrinks at runtime. Every mutation replaces the collection wholesale, so
/// a tick is one atomic batch and no timer ever observes a partially
/// updated sibling.
#[derive(Debug, Clone)]
pub struct TimerSet {
    timers: Vec<Timer>,
}

impl TimerSet {
    pub fn new(configs: Vec<TimerConfig>) -> Self {
        Self {
            timers: configs.into_iter().map(Timer::new).collect(),
        }
    }

    /// Build the set from the shipped 12-activity list
    pub fn with_default_activities() -> Result<Self, Box<dyn Error>> {
        Ok(Self::new(loader::load_default_activities()?))
    }

    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    pub fn get(&self, id: u32) -> Option<&Timer> {
        self.timers.iter().find(|t| t.id() == id)
    }

    /// True iff at least one timer is counting down. The caller's periodic
    /// tick must be scheduled exactly while this holds.
    pub fn any_running(&self) -> bool {
        self.timers.iter().any(|t| t.is_running)
    }

    /// Advance every Running timer by one second in a single batch.
    /// A no-op when nothing is running.
    pub fn tick(&mut self) {
        if !self.any_running() {
            return;
        }
        self.timers = self.timers.iter().map(Timer::ticked).collect();
    }

    /// Flip one timer between running and paused. Returns true if any state
    /// actually changed; expired timers cannot be re-armed and unknown ids
    /// change nothing.
    pub fn toggle(&mut self, id: u32) -> bool {
        let Some(idx) = self.timers.iter().position(|t| t.id() == id) else {
            return false;
        };

        let updated = self.timers[idx].toggled();
        if updated == self.timers[idx] {
            return false;
        }

        debug!(
            "timer {} -> {}",
            id,
            if updated.is_running { "running" } else { "paused" }
        );

        let mut next = self.timers.clone();
        next[idx] = updated;
        self.timers = next;
        true
    }

    /// Force every timer to paused, `time_left` untouched
    pub fn stop_all(&mut self) {
        if !self.any_running() {
            return;
        }
        self.timers = self
            .timers
            .iter()
            .map(|t| Timer {
                config: t.config.clone(),
                is_running: false,
                time_left: t.time_left,
            })
            .collect();
    }

    /// Total seconds consumed across timers that were actually used.
    /// Timers still at the full budget are excluded from the sum.
    pub fn total_seconds_elapsed(&self) -> u32 {
        self.timers
            .iter()
            .filter(|t| t.was_used())
            .map(Timer::seconds_elapsed)
            .sum()
    }
}
