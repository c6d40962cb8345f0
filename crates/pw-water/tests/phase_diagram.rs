//! Phase diagram integration tests.
//!
//! Reference points, boundary agreement between the sampled curves and the
//! classifier, and the guarantees the diagram screen relies on.

use pw_water::{
    BoundaryCurve, Phase, SweepType, WATER, classify_phase, sublimation_pressure_atm,
    vaporization_decision_atm,
};

#[test]
fn reference_points() {
    assert_eq!(classify_phase(647.096, 217.75), Phase::Supercritical);
    assert_eq!(classify_phase(373.15, 1.0), Phase::Liquid);
    assert_eq!(classify_phase(373.15, 0.5), Phase::Gas);
    assert_eq!(classify_phase(298.15, 1.0), Phase::Liquid);
    assert_eq!(classify_phase(500.0, 0.01), Phase::Gas);
    assert_eq!(classify_phase(230.0, 1.0), Phase::Solid);
}

#[test]
fn triple_point_label_is_stable() {
    let first = classify_phase(WATER.triple_temperature_k, WATER.triple_pressure_atm);
    assert_eq!(first, Phase::Liquid);
    for _ in 0..100 {
        assert_eq!(
            classify_phase(WATER.triple_temperature_k, WATER.triple_pressure_atm),
            first
        );
    }
}

#[test]
fn continuity_at_250k() {
    let p = sublimation_pressure_atm(250.0);
    for eps in [1e-9, 1e-10, 1e-11] {
        assert_eq!(classify_phase(250.0, p - eps), Phase::Gas);
        assert_eq!(classify_phase(250.0, p + eps), Phase::Solid);
    }
}

#[test]
fn full_domain_grid_has_no_unknown() {
    for i in 0..=500 {
        let t = 200.0 + i as f64;
        for j in 0..=120 {
            let p = 10f64.powf(-3.0 + j as f64 * (300f64.log10() + 3.0) / 120.0);
            let phase = classify_phase(t, p.min(300.0));
            assert!(phase.is_known(), "Unknown at ({t}, {p})");
        }
    }
}

#[test]
fn sampled_vapor_curve_straddles_the_liquid_gas_boundary() {
    let samples = BoundaryCurve::Vaporization.samples(
        WATER.triple_temperature_k,
        WATER.critical_temperature_k - 0.5,
        200,
        SweepType::Linear,
    );

    for point in samples {
        let t = point.temperature_k;
        let p = point.pressure_atm;
        let decision = vaporization_decision_atm(t);

        // The piecewise decision line and the analytic curve stay within
        // 20% below and one decade above each other.
        assert!(decision >= p / 1.2, "decision line too far below curve at {t} K");
        assert!(decision <= p * 10.0, "decision line too far above curve at {t} K");

        let below = p.min(decision) * 0.99;
        let above = p.max(decision) * 1.01;
        assert_eq!(classify_phase(t, below), Phase::Gas, "below at {t} K");
        assert_eq!(classify_phase(t, above), Phase::Liquid, "above at {t} K");
    }
}

#[test]
fn decision_line_tracks_the_analytic_curve_at_the_anchors() {
    for t in [WATER.triple_temperature_k, 373.15] {
        let analytic = BoundaryCurve::Vaporization.pressure_atm(t);
        let decision = vaporization_decision_atm(t);
        assert!((analytic - decision).abs() / decision < 0.01, "at {t} K");

        let delta = 0.01;
        assert_eq!(classify_phase(t, analytic * (1.0 - delta)), Phase::Gas);
        assert_eq!(classify_phase(t, analytic * (1.0 + delta)), Phase::Liquid);
    }
}

#[test]
fn sublimation_samples_sit_on_the_solid_gas_boundary_below_250k() {
    for point in BoundaryCurve::Sublimation.samples(200.0, 250.0, 26, SweepType::Linear) {
        let (t, p) = (point.temperature_k, point.pressure_atm);
        assert_eq!(classify_phase(t, p * 0.99), Phase::Gas);
        assert_eq!(classify_phase(t, p * 1.01), Phase::Solid);
    }
}
