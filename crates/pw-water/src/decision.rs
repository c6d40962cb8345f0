//! Piecewise decision boundaries used for region classification.
//!
//! These are coarser than the analytic models in [`crate::vapor`] and
//! [`crate::sublimation`]. They are built from the same fixed anchor points as
//! the curve drawn on the diagram, so a point shown on one side of the drawn
//! line is classified on that side. Classification must go through these
//! functions, never through the analytic models directly.

use crate::constants::{NORMAL_BOILING_PRESSURE_ATM, NORMAL_BOILING_TEMPERATURE_K, WATER};
use crate::point::Point;
use crate::sublimation::sublimation_pressure_atm;
use pw_core::numeric::{inverse_lerp, lerp};

/// Below this temperature the sublimation fit is used as-is.
pub const SUBLIMATION_BLEND_START_K: f64 = 250.0;

/// Intermediate vapor anchor temperature [K].
pub const VAPOR_ANCHOR_TEMPERATURE_K: f64 = 300.0;

/// Intermediate vapor anchor pressure [atm].
pub const VAPOR_ANCHOR_PRESSURE_ATM: f64 = 0.03;

/// Solid-gas decision pressure [atm] for `t_k` below the triple point.
///
/// Up to 250 K this is the sublimation fit. Between 250 K and the triple point
/// the pressure is interpolated linearly from the fit's 250 K value to the
/// triple-point pressure.
pub fn sublimation_decision_atm(t_k: f64) -> f64 {
    if t_k <= SUBLIMATION_BLEND_START_K {
        return sublimation_pressure_atm(t_k);
    }
    let t = inverse_lerp(SUBLIMATION_BLEND_START_K, WATER.triple_temperature_k, t_k);
    lerp(
        sublimation_pressure_atm(SUBLIMATION_BLEND_START_K),
        WATER.triple_pressure_atm,
        t,
    )
}

/// Liquid-gas decision pressure [atm] for `t_k` between the triple and
/// critical temperatures.
///
/// Straight segments through (T_triple, P_triple), (300 K, 0.03 atm),
/// (373.15 K, 1 atm) and (T_critical, P_critical).
pub fn vaporization_decision_atm(t_k: f64) -> f64 {
    if t_k <= VAPOR_ANCHOR_TEMPERATURE_K {
        let t = inverse_lerp(WATER.triple_temperature_k, VAPOR_ANCHOR_TEMPERATURE_K, t_k);
        lerp(WATER.triple_pressure_atm, VAPOR_ANCHOR_PRESSURE_ATM, t)
    } else if t_k <= NORMAL_BOILING_TEMPERATURE_K {
        let t = inverse_lerp(VAPOR_ANCHOR_TEMPERATURE_K, NORMAL_BOILING_TEMPERATURE_K, t_k);
        lerp(VAPOR_ANCHOR_PRESSURE_ATM, NORMAL_BOILING_PRESSURE_ATM, t)
    } else {
        let t = inverse_lerp(NORMAL_BOILING_TEMPERATURE_K, WATER.critical_temperature_k, t_k);
        lerp(NORMAL_BOILING_PRESSURE_ATM, WATER.critical_pressure_atm, t)
    }
}

/// Anchor polyline of the liquid-gas decision boundary, triple to critical.
pub fn vaporization_anchors() -> [Point; 4] {
    [
        Point::new(WATER.triple_temperature_k, WATER.triple_pressure_atm),
        Point::new(VAPOR_ANCHOR_TEMPERATURE_K, VAPOR_ANCHOR_PRESSURE_ATM),
        Point::new(NORMAL_BOILING_TEMPERATURE_K, NORMAL_BOILING_PRESSURE_ATM),
        Point::new(WATER.critical_temperature_k, WATER.critical_pressure_atm),
    ]
}

/// Anchor points of the full decision outline: the blend start on the
/// sublimation side followed by the vaporization anchors.
pub fn decision_anchors() -> Vec<Point> {
    let mut anchors = Vec::with_capacity(5);
    anchors.push(Point::new(
        SUBLIMATION_BLEND_START_K,
        sublimation_pressure_atm(SUBLIMATION_BLEND_START_K),
    ));
    anchors.extend(vaporization_anchors());
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sublimation_decision_is_continuous_at_blend_start() {
        let below = sublimation_decision_atm(SUBLIMATION_BLEND_START_K);
        let above = sublimation_decision_atm(SUBLIMATION_BLEND_START_K + 1e-9);
        assert!((below - above).abs() < 1e-9);
    }

    #[test]
    fn sublimation_decision_reaches_triple_pressure() {
        let p = sublimation_decision_atm(WATER.triple_temperature_k);
        assert!((p - WATER.triple_pressure_atm).abs() < 1e-15);
    }

    #[test]
    fn vaporization_decision_hits_anchors_exactly() {
        for anchor in vaporization_anchors() {
            assert_eq!(
                vaporization_decision_atm(anchor.temperature_k),
                anchor.pressure_atm,
                "anchor at {} K",
                anchor.temperature_k
            );
        }
    }

    #[test]
    fn vaporization_decision_is_monotone() {
        let mut last = 0.0;
        let mut t = WATER.triple_temperature_k;
        while t < WATER.critical_temperature_k {
            let p = vaporization_decision_atm(t);
            assert!(p >= last, "decreasing at {t} K");
            last = p;
            t += 0.5;
        }
    }

    #[test]
    fn outline_starts_on_the_sublimation_side() {
        let anchors = decision_anchors();
        assert_eq!(anchors.len(), 5);
        assert_eq!(anchors[0].temperature_k, SUBLIMATION_BLEND_START_K);
        assert_eq!(anchors[1].temperature_k, WATER.triple_temperature_k);
    }
}
