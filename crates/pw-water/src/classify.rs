//! Phase classification of a (temperature, pressure) point.
//!
//! The decision tree checks the supercritical corner first, then splits on
//! temperature: below the triple point the solid-gas decision boundary
//! applies, at or above the critical temperature only the critical pressure
//! matters, and in between the piecewise liquid-gas boundary applies.
//!
//! Inputs are trusted. Non-finite or non-positive temperatures are a caller
//! error; NaN falls through every branch and comes back as [`Phase::Unknown`].

use crate::constants::WATER;
use crate::decision::{sublimation_decision_atm, vaporization_decision_atm};
use crate::phase::Phase;
use crate::point::Point;
use pw_core::units::{Pressure, Temperature};

/// Classify the phase of water at `t_k` [K] and `p_atm` [atm].
pub fn classify_phase(t_k: f64, p_atm: f64) -> Phase {
    let c = &WATER;

    if t_k >= c.critical_temperature_k && p_atm >= c.critical_pressure_atm {
        return Phase::Supercritical;
    }

    if t_k < c.triple_temperature_k {
        let boundary = sublimation_decision_atm(t_k);
        return if p_atm < boundary {
            Phase::Gas
        } else {
            Phase::Solid
        };
    }

    if t_k >= c.critical_temperature_k {
        return if p_atm < c.critical_pressure_atm {
            Phase::Gas
        } else {
            Phase::Supercritical
        };
    }

    if t_k >= c.triple_temperature_k && t_k < c.critical_temperature_k {
        let boundary = vaporization_decision_atm(t_k);
        return if p_atm < boundary {
            Phase::Gas
        } else if t_k >= c.triple_temperature_k && p_atm >= c.triple_pressure_atm {
            Phase::Liquid
        } else {
            Phase::Solid
        };
    }

    Phase::Unknown
}

/// Classify a diagram point.
pub fn classify(point: Point) -> Phase {
    classify_phase(point.temperature_k, point.pressure_atm)
}

/// Classify from unit-carrying quantities.
pub fn classify_quantities(t: Temperature, p: Pressure) -> Phase {
    classify(Point::from_quantities(t, p))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::constants::WATER;
    use proptest::prelude::*;

    fn log_pressures(n: usize) -> Vec<f64> {
        let (lo, hi) = (0.001_f64.ln(), 300.0_f64.ln());
        (0..n)
            .map(|i| (lo + (hi - lo) * i as f64 / (n - 1) as f64).exp())
            .collect()
    }

    proptest! {
        #[test]
        fn deterministic(t in 200.0_f64..=700.0, p in 0.001_f64..=300.0) {
            let first = classify_phase(t, p);
            for _ in 0..4 {
                prop_assert_eq!(classify_phase(t, p), first);
            }
        }

        #[test]
        fn never_unknown_in_domain(t in 200.0_f64..=700.0, p in 0.001_f64..=300.0) {
            prop_assert!(classify_phase(t, p).is_known());
        }

        #[test]
        fn single_flip_from_gas_along_isotherm(t in 200.0_f64..647.0) {
            prop_assume!(t < WATER.critical_temperature_k);
            let phases: Vec<Phase> = log_pressures(400)
                .into_iter()
                .map(|p| classify_phase(t, p))
                .collect();
            let flips = phases.windows(2).filter(|w| w[0] != w[1]).count();
            prop_assert!(flips <= 1, "{} flips at {} K", flips, t);
            if flips == 1 {
                prop_assert_eq!(phases[0], Phase::Gas);
            }
        }

        #[test]
        fn exactly_one_flip_between_triple_and_critical(t in 273.16_f64..647.0) {
            let phases: Vec<Phase> = log_pressures(400)
                .into_iter()
                .map(|p| classify_phase(t, p))
                .collect();
            let flips = phases.windows(2).filter(|w| w[0] != w[1]).count();
            prop_assert_eq!(flips, 1, "at {} K", t);
            prop_assert_eq!(phases[0], Phase::Gas);
            prop_assert_eq!(phases[phases.len() - 1], Phase::Liquid);
        }
    }
}
