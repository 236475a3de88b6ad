//! Batch projection over a grid of rate/horizon scenarios
//!
//! One engine, many configurations: project a fixed daily principal across
//! every (rate, years) pair without rebuilding the engine per request.

use crate::projection::{
    format, ProjectedValue, ProjectionConfig, ProjectionEngine, ProjectionError, ProjectionInput,
};
use serde::Serialize;

/// One grid cell result
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub daily_rate_percent: f64,
    pub years: u32,
    /// Exact digit string, absent when the value overflowed
    pub value: Option<String>,
    /// Formatted value, or the plain-language overflow message
    pub display: String,
}

/// Pre-configured runner for batch projections
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::default(),
        }
    }

    pub fn with_config(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectedValue, ProjectionError> {
        self.engine.project(input)
    }

    /// Project `principal` across every (rate, years) pair, row-major over
    /// rates. Overflowing cells carry the sentinel message instead of a value.
    pub fn run_grid(&self, principal: f64, rates: &[f64], years: &[u32]) -> Vec<ScenarioResult> {
        let mut results = Vec::with_capacity(rates.len() * years.len());
        for &daily_rate_percent in rates {
            for &horizon in years {
                let input = ProjectionInput {
                    principal,
                    daily_rate_percent,
                    years: horizon,
                };
                let result = match self.engine.project(&input) {
                    Ok(value) => ScenarioResult {
                        daily_rate_percent,
                        years: horizon,
                        display: format::format_projected(&value),
                        value: Some(value.digits()),
                    },
                    Err(err) => ScenarioResult {
                        daily_rate_percent,
                        years: horizon,
                        value: None,
                        display: err.to_string(),
                    },
                };
                results.push(result);
            }
        }
        results
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
