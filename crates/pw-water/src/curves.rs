//! Boundary curves and lazy sampling for plotting.

use crate::constants::WATER;
use crate::error::WaterError;
use crate::fusion::ice_liquid_boundary_atm;
use crate::point::Point;
use crate::sublimation::sublimation_pressure_atm;
use crate::sweeps::{SweepType, spaced_value};
use crate::vapor::vapor_pressure_atm;
use pw_core::units::{Pressure, Temperature, atm, to_k};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// Lower temperature of the plotted diagram [K].
pub const PLOT_MIN_TEMPERATURE_K: f64 = 200.0;

/// One of the three analytic phase boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryCurve {
    /// Solid-gas
    Sublimation,
    /// Liquid-gas
    Vaporization,
    /// Solid-liquid
    Fusion,
}

impl BoundaryCurve {
    pub const ALL: [BoundaryCurve; 3] = [Self::Sublimation, Self::Vaporization, Self::Fusion];

    /// Equilibrium pressure [atm] on this curve at `t_k`.
    pub fn pressure_atm(self, t_k: f64) -> f64 {
        match self {
            Self::Sublimation => sublimation_pressure_atm(t_k),
            Self::Vaporization => vapor_pressure_atm(t_k),
            Self::Fusion => ice_liquid_boundary_atm(t_k),
        }
    }

    pub fn pressure(self, t: Temperature) -> Pressure {
        atm(self.pressure_atm(to_k(t)))
    }

    /// Temperature range [K] over which the curve is defined.
    ///
    /// The fusion line has no natural end with `a = c = 1`; it runs nearly
    /// flat from 0.006 to 0.014 atm, so [T_triple, T_critical] is only a
    /// sampling window.
    pub fn domain(self) -> (f64, f64) {
        match self {
            Self::Sublimation => (f64::MIN_POSITIVE, WATER.triple_temperature_k),
            Self::Vaporization | Self::Fusion => {
                (WATER.triple_temperature_k, WATER.critical_temperature_k)
            }
        }
    }

    /// Temperature range [K] drawn on the diagram.
    pub fn plot_range(self) -> (f64, f64) {
        match self {
            Self::Sublimation => (PLOT_MIN_TEMPERATURE_K, WATER.triple_temperature_k),
            Self::Vaporization | Self::Fusion => self.domain(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sublimation => "sublimation",
            Self::Vaporization => "vaporization",
            Self::Fusion => "fusion",
        }
    }

    /// Sample `count` points between `t_start` and `t_end`, clipped to the
    /// curve's domain. A range entirely outside the domain yields nothing.
    pub fn samples(self, t_start: f64, t_end: f64, count: usize, spacing: SweepType) -> CurveSamples {
        let (d_min, d_max) = self.domain();
        let (lo, hi) = (t_start.min(t_end), t_start.max(t_end));
        let disjoint = hi < d_min || lo > d_max || t_start.is_nan() || t_end.is_nan();
        let clip = |t: f64| t.clamp(d_min, d_max);

        CurveSamples {
            curve: self,
            start_k: clip(t_start),
            end_k: clip(t_end),
            count: if disjoint { 0 } else { count },
            spacing,
            index: 0,
        }
    }

    /// Sample `count` points over [`plot_range`](Self::plot_range).
    pub fn default_samples(self, count: usize) -> CurveSamples {
        let (start, end) = self.plot_range();
        self.samples(start, end, count, SweepType::Linear)
    }
}

impl fmt::Display for BoundaryCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BoundaryCurve {
    type Err = WaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sublimation" | "solid-gas" => Ok(Self::Sublimation),
            "vaporization" | "vapor" | "liquid-gas" => Ok(Self::Vaporization),
            "fusion" | "melting" | "solid-liquid" => Ok(Self::Fusion),
            other => Err(WaterError::UnknownCurve(other.to_string())),
        }
    }
}

/// Lazy, finite sequence of points along a [`BoundaryCurve`].
///
/// Cloning or calling [`restart`](Self::restart) replays the same points.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    curve: BoundaryCurve,
    start_k: f64,
    end_k: f64,
    count: usize,
    spacing: SweepType,
    index: usize,
}

impl CurveSamples {
    pub fn curve(&self) -> BoundaryCurve {
        self.curve
    }

    /// Clipped temperature range [K].
    pub fn range(&self) -> (f64, f64) {
        (self.start_k, self.end_k)
    }

    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl Iterator for CurveSamples {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.index >= self.count {
            return None;
        }
        let t_k = spaced_value(self.start_k, self.end_k, self.count, self.index, self.spacing);
        self.index += 1;
        Some(Point::new(t_k, self.curve.pressure_atm(t_k)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSamples {}

impl FusedIterator for CurveSamples {}
