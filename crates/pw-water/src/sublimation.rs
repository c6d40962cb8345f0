//! Solid-gas equilibrium pressure from an empirical log-linear fit.

use pw_core::constants::pa_to_atm;
use pw_core::units::{Pressure, Temperature, atm, to_k};

const A: f64 = 22.5107;
const B: f64 = 6143.7;
const C: f64 = 0.0001;
const D: f64 = 1e-7;

/// Sublimation pressure [Pa]: `ln(P) = A - B/T - C ln(T) - D T`.
///
/// Meant for temperatures below the triple point. `t_k == 0` is a
/// precondition violation.
pub fn sublimation_pressure_pa(t_k: f64) -> f64 {
    (A - B / t_k - C * t_k.ln() - D * t_k).exp()
}

/// Sublimation pressure [atm].
pub fn sublimation_pressure_atm(t_k: f64) -> f64 {
    pa_to_atm(sublimation_pressure_pa(t_k))
}

/// Typed form of [`sublimation_pressure_atm`].
pub fn sublimation_pressure(t: Temperature) -> Pressure {
    atm(sublimation_pressure_atm(to_k(t)))
}
