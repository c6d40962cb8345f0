//! Canvas mapping and vector path output for sampled curves.

use crate::error::{WaterError, WaterResult};
use crate::point::Point;
use std::fmt::Write;

/// Maps diagram coordinates onto a canvas with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    pub t_min: f64,
    pub t_max: f64,
    pub p_min: f64,
    pub p_max: f64,
    pub width: f64,
    pub height: f64,
    /// Pressure axis on a log10 scale
    pub log_pressure: bool,
}

impl PlotFrame {
    pub fn new(
        (t_min, t_max): (f64, f64),
        (p_min, p_max): (f64, f64),
        (width, height): (f64, f64),
        log_pressure: bool,
    ) -> WaterResult<Self> {
        if !(t_min < t_max) {
            return Err(WaterError::InvalidArg {
                what: "temperature axis must be increasing",
            });
        }
        if !(p_min < p_max) {
            return Err(WaterError::InvalidArg {
                what: "pressure axis must be increasing",
            });
        }
        if log_pressure && p_min <= 0.0 {
            return Err(WaterError::OutOfRange {
                what: "log pressure axis minimum",
            });
        }
        if !(width > 0.0 && height > 0.0) {
            return Err(WaterError::InvalidArg {
                what: "canvas size must be positive",
            });
        }
        Ok(Self {
            t_min,
            t_max,
            p_min,
            p_max,
            width,
            height,
            log_pressure,
        })
    }

    /// Canvas x for a temperature.
    pub fn x(&self, t_k: f64) -> f64 {
        (t_k - self.t_min) / (self.t_max - self.t_min) * self.width
    }

    /// Canvas y for a pressure.
    pub fn y(&self, p_atm: f64) -> f64 {
        let frac = if self.log_pressure {
            (p_atm.log10() - self.p_min.log10()) / (self.p_max.log10() - self.p_min.log10())
        } else {
            (p_atm - self.p_min) / (self.p_max - self.p_min)
        };
        self.height * (1.0 - frac)
    }

    pub fn project(&self, point: Point) -> (f64, f64) {
        (self.x(point.temperature_k), self.y(point.pressure_atm))
    }
}

/// Path data (`M x y L x y ...`) through the projected points.
///
/// Points with a non-finite projection are skipped.
pub fn svg_path(points: impl IntoIterator<Item = Point>, frame: &PlotFrame) -> String {
    let mut path = String::new();
    for (x, y) in points
        .into_iter()
        .map(|p| frame.project(p))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
    {
        let cmd = if path.is_empty() { 'M' } else { 'L' };
        if !path.is_empty() {
            path.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(path, "{cmd} {x:.2} {y:.2}");
    }
    path
}
