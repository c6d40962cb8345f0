//! Settings schema definitions.

use pw_water::{InputLimits, PlotFrame, Quantity, SweepType, WaterResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagramSettings {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub limits: LimitsDef,
    #[serde(default)]
    pub axes: AxesDef,
    #[serde(default)]
    pub curves: CurvesDef,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: "Water".to_string(),
            limits: LimitsDef::default(),
            axes: AxesDef::default(),
            curves: CurvesDef::default(),
        }
    }
}

impl DiagramSettings {
    pub fn temperature_limits(&self) -> InputLimits {
        self.limits.temperature.to_limits(Quantity::Temperature)
    }

    pub fn pressure_limits(&self) -> InputLimits {
        self.limits.pressure.to_limits(Quantity::Pressure)
    }

    pub fn plot_frame(&self) -> WaterResult<PlotFrame> {
        let a = &self.axes;
        PlotFrame::new(
            (a.t_min_k, a.t_max_k),
            (a.p_min_atm, a.p_max_atm),
            (a.width, a.height),
            a.log_pressure,
        )
    }
}

/// Accepted ranges for typed entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsDef {
    pub temperature: AxisLimitDef,
    pub pressure: AxisLimitDef,
}

impl Default for LimitsDef {
    fn default() -> Self {
        Self {
            temperature: AxisLimitDef::from(InputLimits::TEMPERATURE),
            pressure: AxisLimitDef::from(InputLimits::PRESSURE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisLimitDef {
    pub min: f64,
    pub max: f64,
    pub max_decimals: usize,
}

impl AxisLimitDef {
    pub fn to_limits(&self, quantity: Quantity) -> InputLimits {
        InputLimits {
            quantity,
            min: self.min,
            max: self.max,
            max_decimals: self.max_decimals,
        }
    }
}

impl From<InputLimits> for AxisLimitDef {
    fn from(limits: InputLimits) -> Self {
        Self {
            min: limits.min,
            max: limits.max,
            max_decimals: limits.max_decimals,
        }
    }
}

/// Plot axes and canvas size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxesDef {
    pub t_min_k: f64,
    pub t_max_k: f64,
    pub p_min_atm: f64,
    pub p_max_atm: f64,
    #[serde(default = "default_true")]
    pub log_pressure: bool,
    pub width: f64,
    pub height: f64,
}

impl Default for AxesDef {
    fn default() -> Self {
        Self {
            t_min_k: 200.0,
            t_max_k: 700.0,
            p_min_atm: 1e-9,
            p_max_atm: 1000.0,
            log_pressure: true,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Curve sampling for plotting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurvesDef {
    pub samples: usize,
    #[serde(default)]
    pub spacing: SpacingDef,
}

impl Default for CurvesDef {
    fn default() -> Self {
        Self {
            samples: 200,
            spacing: SpacingDef::Linear,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpacingDef {
    #[default]
    Linear,
    Logarithmic,
}

impl From<SpacingDef> for SweepType {
    fn from(spacing: SpacingDef) -> Self {
        match spacing {
            SpacingDef::Linear => SweepType::Linear,
            SpacingDef::Logarithmic => SweepType::Logarithmic,
        }
    }
}

fn default_true() -> bool {
    true
}
