//! Exact future-value engine for daily compounded contributions
//!
//! Computes `FV = P * ((1+r)^n - 1) / r` for an ordinary annuity paying `P`
//! per day over `n = years * 365` days. The whole computation runs in scaled
//! integer arithmetic: f64 cannot carry `(1+r)^n` once `n` reaches the
//! thousands, and `S^n` vastly exceeds 128 bits, so the powers are exact
//! `BigUint`s and the single truncating division happens at the very end.

use log::debug;
use num_bigint::BigUint;
use num_traits::Pow;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Fixed-point scale for the daily rate: 8 fractional decimal digits
pub const RATE_SCALE: u64 = 100_000_000;

/// Compounding periods per year
pub const DAYS_PER_YEAR: u64 = 365;

/// Principal is carried in cents (2 fractional decimal digits)
const PRINCIPAL_SCALE: f64 = 100.0;

/// Largest principal whose cents value is still exact in an f64 (2^53 / 100)
const MAX_EXACT_PRINCIPAL: f64 = 9.0e13;

/// Failure modes of the projection engine. Everything else in the crate is
/// a total function over well-formed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The projected value would exceed renderable size
    #[error("projected value is too large to display")]
    ValueTooLarge,

    /// Caller violated the documented input contract
    #[error("invalid projection input: {0}")]
    InvalidInput(String),
}

/// Inputs for one projection request; constructed fresh per request
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectionInput {
    /// Daily contribution in whole currency units (may be fractional)
    pub principal: f64,
    /// Daily rate as a percentage, e.g. 0.1 means 0.1%/day
    pub daily_rate_percent: f64,
    /// Horizon in years; must be >= 1
    pub years: u32,
}

/// Exact projected future value: an unbounded non-negative integer count of
/// whole currency units. No fractional remainder is preserved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProjectedValue(BigUint);

impl ProjectedValue {
    /// The exact base-10 digit string
    pub fn digits(&self) -> String {
        self.0.to_string()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl fmt::Display for ProjectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ProjectedValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Guard rails for the engine
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Reject requests whose result would exceed this many decimal digits
    pub max_result_digits: usize,

    /// Reject horizons with more compounding periods than this
    pub max_periods: u64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            max_result_digits: 5_000,
            max_periods: 1_000_000,
        }
    }
}

/// The projection engine: a pure function of its inputs plus guard config
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project the future value of `principal` contributed daily over the
    /// given horizon at the given daily rate.
    ///
    /// A rate of zero, or one too small to register at 8-digit fixed-point
    /// resolution, degrades to the plain sum `round(principal) * n`. Requests
    /// whose result cannot be rendered return
    /// [`ProjectionError::ValueTooLarge`]; the engine never panics past its
    /// boundary.
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectedValue, ProjectionError> {
        self.validate(input)?;

        let n = u64::from(input.years) * DAYS_PER_YEAR;
        let rate_scaled = scale_rate(input.daily_rate_percent);

        if rate_scaled == 0 {
            let per_day = BigUint::from(input.principal.round() as u64);
            return Ok(ProjectedValue(per_day * n));
        }

        self.check_magnitude(input.principal, rate_scaled, n)?;
        debug!(
            "projecting: n={} rate_scaled={} principal={}",
            n, rate_scaled, input.principal
        );

        // check_magnitude bounds n well below u32::MAX
        let exponent = n as u32;
        let scale = BigUint::from(RATE_SCALE);
        let base = &scale + BigUint::from(rate_scaled);

        // base^n / S^n is (1+r)^n. Numerator and denominator stay apart so
        // every multiplication happens before the one integer division.
        let base_pow: BigUint = Pow::pow(&base, exponent);
        let scale_pow: BigUint = Pow::pow(&scale, exponent);

        let principal_scaled =
            BigUint::from((input.principal * PRINCIPAL_SCALE).round() as u64);
        let numerator = principal_scaled * (&base_pow - &scale_pow) * &scale;
        let denominator = scale_pow * BigUint::from(100u32) * BigUint::from(rate_scaled);

        Ok(ProjectedValue(numerator / denominator))
    }

    fn validate(&self, input: &ProjectionInput) -> Result<(), ProjectionError> {
        if !input.principal.is_finite() || input.principal < 0.0 {
            return Err(ProjectionError::InvalidInput(
                "principal must be a non-negative finite number".to_string(),
            ));
        }
        if input.principal > MAX_EXACT_PRINCIPAL {
            return Err(ProjectionError::InvalidInput(
                "principal exceeds exact cents range".to_string(),
            ));
        }
        if !input.daily_rate_percent.is_finite() || input.daily_rate_percent < 0.0 {
            return Err(ProjectionError::InvalidInput(
                "daily rate must be a non-negative finite percentage".to_string(),
            ));
        }
        if input.years == 0 {
            return Err(ProjectionError::InvalidInput(
                "years must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Refuse requests before exponentiation when the result could not be
    /// rendered anyway. The digit estimate is float-based but only gates;
    /// every accepted request is still computed exactly.
    fn check_magnitude(
        &self,
        principal: f64,
        rate_scaled: u64,
        n: u64,
    ) -> Result<(), ProjectionError> {
        if n > self.config.max_periods || n > u64::from(u32::MAX) {
            return Err(ProjectionError::ValueTooLarge);
        }

        let growth_per_day = (1.0 + rate_scaled as f64 / RATE_SCALE as f64).log10();
        // Slack covers the cents scale and the final 1/r factor (r >= 1e-8)
        let estimated_digits = principal.max(1.0).log10() + n as f64 * growth_per_day + 12.0;
        if estimated_digits > self.config.max_result_digits as f64 {
            return Err(ProjectionError::ValueTooLarge);
        }
        Ok(())
    }
}

/// Fixed-point representation of a percentage-per-day rate. Exact for any
/// rate with at most 5 significant decimal digits.
fn scale_rate(daily_rate_percent: f64) -> u64 {
    ((daily_rate_percent / 100.0) * RATE_SCALE as f64).round() as u64
}
