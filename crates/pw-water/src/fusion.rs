//! Solid-liquid boundary (Simon-Glatzel form).
//!
//! `P = P_triple * (1 + a * ((T / T_triple)^c - 1))` with `a = c = 1`, which
//! collapses to a line through the triple point. The diagram draws this exact
//! shape, so the simplified coefficients stay.

use crate::constants::WATER;
use pw_core::units::{Pressure, Temperature, atm, to_k};

const SIMON_A: f64 = 1.0;
const SIMON_C: f64 = 1.0;

/// Fusion boundary pressure [atm] at `t_k`.
pub fn ice_liquid_boundary_atm(t_k: f64) -> f64 {
    let reduced = t_k / WATER.triple_temperature_k;
    WATER.triple_pressure_atm * (1.0 + SIMON_A * (reduced.powf(SIMON_C) - 1.0))
}

/// Typed form of [`ice_liquid_boundary_atm`].
pub fn ice_liquid_boundary(t: Temperature) -> Pressure {
    atm(ice_liquid_boundary_atm(to_k(t)))
}
