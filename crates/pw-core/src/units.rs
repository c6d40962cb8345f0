// pw-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};
use uom::si::pressure::{atmosphere, pascal};
use uom::si::thermodynamic_temperature::kelvin;

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn atm(v: f64) -> Pressure {
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    Temperature::new::<kelvin>(v)
}

/// Pressure value in standard atmospheres.
#[inline]
pub fn to_atm(p: Pressure) -> f64 {
    p.get::<atmosphere>()
}

/// Pressure value in pascals.
#[inline]
pub fn to_pa(p: Pressure) -> f64 {
    p.get::<pascal>()
}

/// Temperature value in kelvin.
#[inline]
pub fn to_k(t: Temperature) -> f64 {
    t.get::<kelvin>()
}

pub mod constants {
    use super::*;

    pub const PA_PER_ATM: f64 = 101_325.0;

    #[inline]
    pub fn standard_atmosphere() -> Pressure {
        pa(PA_PER_ATM)
    }

    #[inline]
    pub fn pa_to_atm(v_pa: f64) -> f64 {
        v_pa / PA_PER_ATM
    }

    #[inline]
    pub fn atm_to_pa(v_atm: f64) -> f64 {
        v_atm * PA_PER_ATM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _p_atm = atm(1.0);
        let _t = k(300.0);
        let _p0 = constants::standard_atmosphere();
    }

    #[test]
    fn atm_roundtrip() {
        let p = atm(2.0);
        assert!((to_pa(p) - 202_650.0).abs() < 1e-6);
        assert!((to_atm(pa(101_325.0)) - 1.0).abs() < 1e-12);
        assert!((constants::pa_to_atm(constants::atm_to_pa(0.5)) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn kelvin_roundtrip() {
        assert!((to_k(k(273.16)) - 273.16).abs() < 1e-12);
    }
}
