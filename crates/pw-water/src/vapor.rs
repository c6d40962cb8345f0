//! Saturation vapor pressure over liquid water (Wagner correlation, IAPWS-95 form).
//!
//! ```text
//! tau = 1 - T / Tc
//! ln(P / Pc) = (Tc / T) * sum(a_i * tau^p_i)
//! ```

use crate::constants::{CRITICAL_PRESSURE_PA, WATER};
use pw_core::constants::pa_to_atm;
use pw_core::units::{Pressure, Temperature, atm, to_k};

const WAGNER_A: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];

const WAGNER_P: [f64; 6] = [1.0, 1.5, 3.0, 3.5, 4.0, 7.5];

/// Saturation vapor pressure [Pa] at `t_k`.
///
/// Defined for `0 < t_k <= Tc`. `t_k == 0` is a precondition violation: the
/// exponent diverges to minus infinity and the result is 0, which carries no
/// physical meaning.
pub fn vapor_pressure_pa(t_k: f64) -> f64 {
    let tc = WATER.critical_temperature_k;
    let tau = 1.0 - t_k / tc;
    let sum: f64 = WAGNER_A
        .iter()
        .zip(WAGNER_P.iter())
        .map(|(a, p)| a * tau.powf(*p))
        .sum();
    CRITICAL_PRESSURE_PA * ((tc / t_k) * sum).exp()
}

/// Saturation vapor pressure [atm] at `t_k`.
pub fn vapor_pressure_atm(t_k: f64) -> f64 {
    pa_to_atm(vapor_pressure_pa(t_k))
}

/// Typed form of [`vapor_pressure_atm`].
pub fn vapor_pressure(t: Temperature) -> Pressure {
    atm(vapor_pressure_atm(to_k(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_core::units::{k, to_atm};

    #[test]
    fn normal_boiling_point_is_one_atmosphere() {
        let p = vapor_pressure_atm(373.15);
        assert!((p - 1.0).abs() < 0.01, "p = {p}");
    }

    #[test]
    fn triple_point_pressure() {
        let p = vapor_pressure_atm(WATER.triple_temperature_k);
        assert!((p - WATER.triple_pressure_atm).abs() < 1e-4, "p = {p}");
    }

    #[test]
    fn critical_point_recovers_reference() {
        let p = vapor_pressure_pa(WATER.critical_temperature_k);
        assert!((p - CRITICAL_PRESSURE_PA).abs() < 1e-3);
    }

    #[test]
    fn increases_with_temperature() {
        let mut last = 0.0;
        for t in [275.0, 300.0, 350.0, 400.0, 500.0, 600.0, 640.0] {
            let p = vapor_pressure_atm(t);
            assert!(p > last, "not monotone at {t} K");
            last = p;
        }
    }

    #[test]
    fn typed_matches_scalar() {
        let p = vapor_pressure(k(350.0));
        assert!((to_atm(p) - vapor_pressure_atm(350.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_kelvin_collapses_to_zero() {
        assert_eq!(vapor_pressure_atm(0.0), 0.0);
    }
}
