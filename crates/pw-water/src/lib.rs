//! pw-water: phase determination for water on a pressure-temperature diagram.
//!
//! Provides:
//! - Physical constants (triple point, critical point)
//! - Analytic boundary models: Wagner vapor pressure, sublimation fit,
//!   Simon-Glatzel fusion line
//! - Piecewise decision boundaries and the phase classifier
//! - Lazy curve sampling, isotherm/isobar sweeps and canvas paths for plotting
//! - Unit-aware parsing and validation of typed entries
//!
//! # Two notions of vapor pressure
//!
//! [`vapor_pressure_atm`] is the accurate correlation used to draw the
//! analytic curve. [`classify_phase`] instead compares against
//! [`vaporization_decision_atm`], a piecewise-linear line through fixed anchor
//! points that matches the boundary drawn on the diagram. Both are part of the
//! contract; classification does not call the analytic models above 250 K.
//!
//! # Example
//!
//! ```
//! use pw_water::{BoundaryCurve, Phase, classify_phase};
//!
//! assert_eq!(classify_phase(373.15, 0.5), Phase::Gas);
//! assert_eq!(classify_phase(647.096, 217.75), Phase::Supercritical);
//!
//! let points: Vec<_> = BoundaryCurve::Vaporization.default_samples(100).collect();
//! assert_eq!(points.len(), 100);
//! ```

pub mod classify;
pub mod constants;
pub mod curves;
pub mod decision;
pub mod error;
pub mod fusion;
pub mod input;
pub mod phase;
pub mod point;
pub mod render;
pub mod sublimation;
pub mod sweep_executor;
pub mod sweeps;
pub mod units;
pub mod vapor;

// Re-exports for ergonomics
pub use classify::{classify, classify_phase, classify_quantities};
pub use constants::{PhysicalConstants, WATER};
pub use curves::{BoundaryCurve, CurveSamples};
pub use decision::{decision_anchors, sublimation_decision_atm, vaporization_decision_atm};
pub use error::{WaterError, WaterResult};
pub use fusion::{ice_liquid_boundary, ice_liquid_boundary_atm};
pub use input::{InputError, InputLimits, parse_entry, validate_entry};
pub use phase::{Phase, PhaseChange};
pub use point::Point;
pub use render::{PlotFrame, svg_path};
pub use sublimation::{sublimation_pressure, sublimation_pressure_atm};
pub use sweep_executor::{PhaseSweep, PhaseTransition, execute_isobar, execute_isotherm};
pub use sweeps::{SweepDefinition, SweepError, SweepType};
pub use units::{Quantity, UnitError, UnitValue, parse_quantity};
pub use vapor::{vapor_pressure, vapor_pressure_atm};
