//! Parameter sweep generation.
//!
//! Evenly or logarithmically spaced values along one axis of the diagram.
//! Shared by the curve samplers and the isotherm/isobar sweeps.

use crate::units::{Quantity, UnitError, parse_quantity};
use pw_core::ensure_finite;
use std::fmt;
use thiserror::Error;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Error in sweep configuration or execution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{which} value error: {source}")]
    Bound {
        which: &'static str,
        #[source]
        source: UnitError,
    },
}

/// `i`-th of `n` values from `start` to `end`.
///
/// The first and last values are exactly `start` and `end`. Logarithmic
/// spacing falls back to linear when either bound is not positive.
pub fn spaced_value(start: f64, end: f64, n: usize, i: usize, sweep_type: SweepType) -> f64 {
    if n <= 1 || i == 0 {
        return start;
    }
    if i >= n - 1 {
        return end;
    }
    let frac = i as f64 / (n - 1) as f64;
    match sweep_type {
        SweepType::Logarithmic if start > 0.0 && end > 0.0 => {
            let (log_start, log_end) = (start.ln(), end.ln());
            (log_start + frac * (log_end - log_start)).exp()
        }
        _ => start + frac * (end - start),
    }
}

/// Definition of a single parameter sweep.
///
/// Stores the original user-specified bounds next to the canonical values
/// (kelvin or atm).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    /// Quantity being swept
    pub quantity: Quantity,
    /// Start value in canonical units
    pub start: f64,
    /// User input for start (preserved for re-editing)
    pub start_raw: String,
    /// End value in canonical units
    pub end: f64,
    /// User input for end (preserved for re-editing)
    pub end_raw: String,
    /// Number of points to generate
    pub num_points: usize,
    /// Spacing type
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a sweep from canonical values.
    pub fn new(
        quantity: Quantity,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        let start = ensure_finite(start, "sweep start")
            .map_err(|e| SweepError::InvalidConfiguration(e.to_string()))?;
        let end = ensure_finite(end, "sweep end")
            .map_err(|e| SweepError::InvalidConfiguration(e.to_string()))?;

        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        let unit = quantity.canonical_unit();
        Ok(SweepDefinition {
            quantity,
            start,
            start_raw: format!("{start} {unit}"),
            end,
            end_raw: format!("{end} {unit}"),
            num_points,
            sweep_type,
        })
    }

    /// Create a sweep from user text inputs.
    pub fn from_text(
        start_raw: impl Into<String>,
        end_raw: impl Into<String>,
        quantity: Quantity,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        let start_text = start_raw.into();
        let end_text = end_raw.into();

        let start = parse_quantity(&start_text, quantity).map_err(|source| SweepError::Bound {
            which: "Start",
            source,
        })?;
        let end = parse_quantity(&end_text, quantity).map_err(|source| SweepError::Bound {
            which: "End",
            source,
        })?;

        let mut sweep = Self::new(quantity, start, end, num_points, sweep_type)?;
        sweep.start_raw = start_text;
        sweep.end_raw = end_text;
        Ok(sweep)
    }

    /// Value of the `i`-th point.
    pub fn value_at(&self, i: usize) -> f64 {
        spaced_value(self.start, self.end, self.num_points, i, self.sweep_type)
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        (0..self.num_points).map(|i| self.value_at(i)).collect()
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.quantity, self.start_raw, self.end_raw, self.num_points, self.sweep_type
        )
    }
}
