//! Growth Engine - work-session tracking with exact wealth projection
//!
//! This library provides:
//! - A fixed set of 30-minute activity countdown timers with a one-shot
//!   budget per activity
//! - Earnings aggregation of tracked time at a fixed per-minute rate
//! - An exact big-integer projection of daily compounded growth
//! - Batch scenario sweeps across rate/horizon grids

pub mod earnings;
pub mod projection;
pub mod scenario;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use earnings::{EarningsReport, RATE_PER_MINUTE};
pub use projection::{
    ProjectedValue, ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionInput,
};
pub use scenario::ScenarioRunner;
pub use session::Session;
pub use timer::{Timer, TimerConfig, TimerPhase, TimerSet, INITIAL_TIME_SECONDS};
