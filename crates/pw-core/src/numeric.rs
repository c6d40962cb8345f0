use crate::PwError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PwError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PwError::NonFinite { what, value: v })
    }
}

/// Linear interpolation between `a` (t = 0) and `b` (t = 1).
///
/// Written as a weighted sum so both endpoints are reproduced exactly.
#[inline]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a * (1.0 - t) + b * t
}

/// Fraction of the way `x` lies from `x0` to `x1`.
#[inline]
pub fn inverse_lerp(x0: Real, x1: Real, x: Real) -> Real {
    (x - x0) / (x1 - x0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(lerp(0.03, 1.0, 1.0), 1.0);
        assert_eq!(lerp(0.00604, 0.03, 0.0), 0.00604);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }

    #[test]
    fn inverse_lerp_basic() {
        assert_eq!(inverse_lerp(300.0, 373.15, 373.15), 1.0);
        assert_eq!(inverse_lerp(250.0, 260.0, 255.0), 0.5);
    }

    proptest! {
        #[test]
        fn lerp_stays_between_endpoints(a in -1e3_f64..1e3, b in -1e3_f64..1e3, t in 0.0_f64..=1.0) {
            let v = lerp(a, b, t);
            let lo = a.min(b);
            let hi = a.max(b);
            let tol = Tolerances::default();
            prop_assert!(v >= lo || nearly_equal(v, lo, tol));
            prop_assert!(v <= hi || nearly_equal(v, hi, tol));
        }
    }
}
