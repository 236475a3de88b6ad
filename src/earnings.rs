//! Earnings aggregation at the fixed per-minute rate

use chrono::{DateTime, Local};
use serde::Serialize;

/// Currency minor units (VND) earned per minute of tracked work
pub const RATE_PER_MINUTE: f64 = 10_000.0;

/// Result of one stop-all-and-calculate pass
#[derive(Debug, Clone, Serialize)]
pub struct EarningsReport {
    /// Total seconds elapsed across all used timers
    pub total_seconds: u32,
    /// Elapsed time in minutes, fractional part kept
    pub minutes: f64,
    /// Earned amount in currency minor units
    pub amount: f64,
    pub computed_at: DateTime<Local>,
}

impl EarningsReport {
    /// Convert elapsed seconds to earnings. Fractional minutes are paid,
    /// not truncated: 90 seconds is 1.5 minutes of pay.
    pub fn from_seconds(total_seconds: u32) -> Self {
        let minutes = f64::from(total_seconds) / 60.0;
        Self {
            total_seconds,
            minutes,
            amount: minutes * RATE_PER_MINUTE,
            computed_at: Local::now(),
        }
    }
}
