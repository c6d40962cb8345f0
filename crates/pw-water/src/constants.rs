//! Physical constants for water.

use pw_core::units::{Pressure, Temperature, atm, k};

/// Fixed reference record for a single-component phase diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Triple-point temperature [K]
    pub triple_temperature_k: f64,
    /// Triple-point pressure [atm]
    pub triple_pressure_atm: f64,
    /// Critical-point temperature [K]
    pub critical_temperature_k: f64,
    /// Critical-point pressure [atm]
    pub critical_pressure_atm: f64,
}

impl PhysicalConstants {
    pub fn triple_temperature(&self) -> Temperature {
        k(self.triple_temperature_k)
    }

    pub fn triple_pressure(&self) -> Pressure {
        atm(self.triple_pressure_atm)
    }

    pub fn critical_temperature(&self) -> Temperature {
        k(self.critical_temperature_k)
    }

    pub fn critical_pressure(&self) -> Pressure {
        atm(self.critical_pressure_atm)
    }

    /// Triple point strictly below the critical point on both axes.
    pub fn is_ordered(&self) -> bool {
        self.triple_temperature_k < self.critical_temperature_k
            && self.triple_pressure_atm < self.critical_pressure_atm
    }
}

/// Water.
pub const WATER: PhysicalConstants = PhysicalConstants {
    triple_temperature_k: 273.16,
    triple_pressure_atm: 0.00604,
    critical_temperature_k: 647.096,
    critical_pressure_atm: 217.75,
};

/// Normal boiling point of water [K].
pub const NORMAL_BOILING_TEMPERATURE_K: f64 = 373.15;

/// Pressure at the normal boiling point [atm].
pub const NORMAL_BOILING_PRESSURE_ATM: f64 = 1.0;

/// Critical pressure used as the Wagner reference [Pa].
pub const CRITICAL_PRESSURE_PA: f64 = 22.064e6;
