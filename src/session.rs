//! Single-session state container
//!
//! Owns the timer collection plus the cached earnings and projection
//! results, and enforces the invalidation rules between them. One session
//! per process, single-threaded; every operation completes synchronously.

use crate::earnings::EarningsReport;
use crate::projection::{ProjectedValue, ProjectionEngine, ProjectionError, ProjectionInput};
use crate::timer::TimerSet;
use chrono::{DateTime, Local};
use log::{debug, info};

/// Outcome of the most recent projection request: the exact value, or the
/// value-too-large sentinel rendered to the user in its place
pub type ProjectionOutcome = Result<ProjectedValue, ProjectionError>;

pub struct Session {
    timers: TimerSet,
    engine: ProjectionEngine,
    earnings: Option<EarningsReport>,
    projection: Option<ProjectionOutcome>,
    started_at: DateTime<Local>,
}

impl Session {
    pub fn new(timers: TimerSet) -> Self {
        Self::with_engine(timers, ProjectionEngine::default())
    }

    pub fn with_engine(timers: TimerSet, engine: ProjectionEngine) -> Self {
        Self {
            timers,
            engine,
            earnings: None,
            projection: None,
            started_at: Local::now(),
        }
    }

    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn earnings(&self) -> Option<&EarningsReport> {
        self.earnings.as_ref()
    }

    pub fn projection(&self) -> Option<&ProjectionOutcome> {
        self.projection.as_ref()
    }

    /// True iff the caller's one-second tick must be scheduled. The loop
    /// driving [`Session::tick`] runs exactly while this holds: torn down
    /// the instant the last timer stops, re-established on the next start.
    pub fn tick_required(&self) -> bool {
        self.timers.any_running()
    }

    /// One-second advance of every running timer; a no-op otherwise
    pub fn tick(&mut self) {
        self.timers.tick();
    }

    /// Start or pause one timer. Any real change after a calculation was
    /// shown discards that calculation and its projection.
    pub fn toggle(&mut self, id: u32) -> bool {
        let changed = self.timers.toggle(id);
        if changed && self.earnings.is_some() {
            debug!("timer {} toggled after calculation; discarding cached results", id);
            self.earnings = None;
            self.projection = None;
        }
        changed
    }

    /// Stop every timer and convert the session's total elapsed time into
    /// earnings at the fixed per-minute rate. Clears any prior projection.
    pub fn stop_all_and_calculate(&mut self) -> &EarningsReport {
        self.timers.stop_all();
        let report = EarningsReport::from_seconds(self.timers.total_seconds_elapsed());
        info!(
            "session earnings: {} seconds -> {} minor units",
            report.total_seconds, report.amount
        );
        self.projection = None;
        &*self.earnings.insert(report)
    }

    /// Project the current earnings figure as a daily contribution over the
    /// given horizon. Returns `None` when there is no positive earnings
    /// figure to project; otherwise caches and returns the outcome.
    pub fn project(&mut self, years: u32, daily_rate_percent: f64) -> Option<&ProjectionOutcome> {
        let principal = self.earnings.as_ref().map(|e| e.amount)?;
        if principal <= 0.0 {
            return None;
        }

        let outcome = self.engine.project(&ProjectionInput {
            principal,
            daily_rate_percent,
            years,
        });
        Some(&*self.projection.insert(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerConfig;
    use approx::assert_relative_eq;

    fn test_session() -> Session {
        let configs = (1..=12)
            .map(|id| TimerConfig {
                id,
                title: format!("Activity {}", id),
                description: String::new(),
            })
            .collect();
        Session::new(TimerSet::new(configs))
    }

    #[test]
    fn test_round_trip_earnings() {
        let mut session = test_session();
        session.toggle(1);
        for _ in 0..90 {
            session.tick();
        }

        let report = session.stop_all_and_calculate();
        assert_eq!(report.total_seconds, 90);
        assert_relative_eq!(report.amount, 15_000.0);
    }

    #[test]
    fn test_tick_without_running_timers_changes_nothing() {
        let mut session = test_session();
        session.tick();
        assert_eq!(session.timers().total_seconds_elapsed(), 0);
    }

    #[test]
    fn test_tick_lifecycle_is_exact() {
        let mut session = test_session();
        assert!(!session.tick_required());

        session.toggle(3);
        assert!(session.tick_required());

        session.toggle(3);
        assert!(!session.tick_required());
    }

    #[test]
    fn test_toggle_invalidates_cached_results() {
        let mut session = test_session();
        session.toggle(1);
        for _ in 0..60 {
            session.tick();
        }
        session.stop_all_and_calculate();
        session.project(1, 0.1);
        assert!(session.earnings().is_some());
        assert!(session.projection().is_some());

        session.toggle(2);
        assert!(session.earnings().is_none());
        assert!(session.projection().is_none());
    }

    #[test]
    fn test_recalculate_clears_prior_projection() {
        let mut session = test_session();
        session.toggle(1);
        for _ in 0..60 {
            session.tick();
        }
        session.stop_all_and_calculate();
        session.project(1, 0.1);

        session.stop_all_and_calculate();
        assert!(session.projection().is_none());
    }

    #[test]
    fn test_project_requires_positive_earnings() {
        let mut session = test_session();
        assert!(session.project(15, 0.1).is_none());

        // Calculating with nothing elapsed yields zero earnings
        session.stop_all_and_calculate();
        assert!(session.project(15, 0.1).is_none());
    }

    #[test]
    fn test_project_caches_outcome() {
        let mut session = test_session();
        session.toggle(1);
        for _ in 0..60 {
            session.tick();
        }
        session.stop_all_and_calculate();

        // 10 000 minor units earned, the reference case
        let outcome = session.project(1, 0.1).unwrap();
        assert_eq!(outcome.as_ref().unwrap().digits(), "4402513");
        assert_eq!(
            session.projection().unwrap().as_ref().unwrap().digits(),
            "4402513"
        );
    }

    #[test]
    fn test_overflow_is_a_reported_outcome_not_a_crash() {
        let mut session = test_session();
        session.toggle(1);
        for _ in 0..60 {
            session.tick();
        }
        session.stop_all_and_calculate();

        let outcome = session.project(10_000_000, 1.0).unwrap();
        assert_eq!(outcome.as_ref().unwrap_err(), &ProjectionError::ValueTooLarge);
    }
}
