//! A (temperature, pressure) location on the phase diagram.

use pw_core::units::{Pressure, Temperature, atm, k, to_atm, to_k};
use std::fmt;

/// Temperature [K] and pressure [atm].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub temperature_k: f64,
    pub pressure_atm: f64,
}

impl Point {
    pub const fn new(temperature_k: f64, pressure_atm: f64) -> Self {
        Self {
            temperature_k,
            pressure_atm,
        }
    }

    pub fn from_quantities(t: Temperature, p: Pressure) -> Self {
        Self::new(to_k(t), to_atm(p))
    }

    pub fn temperature(&self) -> Temperature {
        k(self.temperature_k)
    }

    pub fn pressure(&self) -> Pressure {
        atm(self.pressure_atm)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2} K, {:.5} atm)", self.temperature_k, self.pressure_atm)
    }
}
