//! Exact future-value projection of daily compounded contributions

mod engine;
pub mod format;

pub use engine::{
    ProjectedValue, ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionInput,
    DAYS_PER_YEAR, RATE_SCALE,
};
