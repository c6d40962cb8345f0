//! Sweep execution along isotherms and isobars.
//!
//! Connects sweep definitions with the classifier to report which phase each
//! point falls in and where the path crosses a boundary.

use crate::classify::classify_phase;
use crate::phase::{Phase, PhaseChange};
use crate::point::Point;
use crate::sweeps::{SweepDefinition, SweepError};
use crate::units::Quantity;
use tracing::{debug, warn};

/// A boundary crossing between consecutive sweep points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTransition {
    /// Index of the first point in the new phase
    pub index: usize,
    pub from: Phase,
    pub to: Phase,
    /// Named change, `None` for supercritical crossovers
    pub change: Option<PhaseChange>,
}

/// Result of classifying every point along a sweep.
#[derive(Debug, Clone)]
pub struct PhaseSweep {
    /// Quantity that was swept
    pub swept: Quantity,
    /// Value of the other axis, held fixed (K or atm)
    pub fixed_value: f64,
    /// Independent variable values (the sweep parameter)
    pub independent_values: Vec<f64>,
    /// Phase at each value
    pub phases: Vec<Phase>,
    /// Crossings in sweep order
    pub transitions: Vec<PhaseTransition>,
    /// Number of points the classifier could not label
    pub num_unknown: usize,
}

impl PhaseSweep {
    /// Diagram points in sweep order.
    pub fn points(&self) -> Vec<Point> {
        self.independent_values
            .iter()
            .map(|&v| match self.swept {
                Quantity::Temperature => Point::new(v, self.fixed_value),
                Quantity::Pressure => Point::new(self.fixed_value, v),
            })
            .collect()
    }

    /// Named phase changes in sweep order.
    pub fn changes(&self) -> Vec<PhaseChange> {
        self.transitions.iter().filter_map(|t| t.change).collect()
    }

    /// Distinct phases in the order they are first visited.
    pub fn visited(&self) -> Vec<Phase> {
        let mut seen = Vec::new();
        for phase in &self.phases {
            if !seen.contains(phase) {
                seen.push(*phase);
            }
        }
        seen
    }
}

/// Classify along a pressure sweep at fixed temperature [K].
pub fn execute_isotherm(
    temperature_k: f64,
    sweep_def: &SweepDefinition,
) -> Result<PhaseSweep, SweepError> {
    if sweep_def.quantity != Quantity::Pressure {
        return Err(SweepError::InvalidConfiguration(
            "Isotherm sweep definition must be for Pressure quantity".to_string(),
        ));
    }
    Ok(run(sweep_def, temperature_k, |p| classify_phase(temperature_k, p)))
}

/// Classify along a temperature sweep at fixed pressure [atm].
pub fn execute_isobar(
    pressure_atm: f64,
    sweep_def: &SweepDefinition,
) -> Result<PhaseSweep, SweepError> {
    if sweep_def.quantity != Quantity::Temperature {
        return Err(SweepError::InvalidConfiguration(
            "Isobar sweep definition must be for Temperature quantity".to_string(),
        ));
    }
    Ok(run(sweep_def, pressure_atm, |t| classify_phase(t, pressure_atm)))
}

fn run(sweep_def: &SweepDefinition, fixed_value: f64, classify: impl Fn(f64) -> Phase) -> PhaseSweep {
    let values = sweep_def.generate_points();
    let mut phases = Vec::with_capacity(values.len());
    let mut transitions = Vec::new();
    let mut num_unknown = 0;

    for (index, &value) in values.iter().enumerate() {
        let phase = classify(value);
        if !phase.is_known() {
            warn!(value, fixed_value, "classifier returned Unknown");
            num_unknown += 1;
        }
        if let Some(&prev) = phases.last() {
            if prev != phase {
                transitions.push(PhaseTransition {
                    index,
                    from: prev,
                    to: phase,
                    change: PhaseChange::between(prev, phase),
                });
            }
        }
        phases.push(phase);
    }

    debug!(
        sweep = %sweep_def,
        fixed_value,
        transitions = transitions.len(),
        "phase sweep complete"
    );

    PhaseSweep {
        swept: sweep_def.quantity,
        fixed_value,
        independent_values: values,
        phases,
        transitions,
        num_unknown,
    }
}
