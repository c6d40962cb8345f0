//! Caller-side validation of typed diagram entries.
//!
//! The classifier trusts its inputs. Text fields feeding it accept a plain
//! decimal number with a bounded number of fractional digits inside the
//! diagram range; anything else is rejected with a message for display and
//! never forwarded.

use crate::units::{Quantity, UnitError, has_unit_suffix, parse_quantity, split_number_text};
use thiserror::Error;

/// Accepted range and precision for one diagram axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    pub quantity: Quantity,
    pub min: f64,
    pub max: f64,
    pub max_decimals: usize,
}

impl InputLimits {
    /// 200 to 700 K, two decimals.
    pub const TEMPERATURE: InputLimits = InputLimits {
        quantity: Quantity::Temperature,
        min: 200.0,
        max: 700.0,
        max_decimals: 2,
    };

    /// 0.001 to 300 atm, three decimals.
    pub const PRESSURE: InputLimits = InputLimits {
        quantity: Quantity::Pressure,
        min: 0.001,
        max: 300.0,
        max_decimals: 3,
    };

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn check_range(&self, value: f64) -> Result<f64, InputError> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                quantity: self.quantity,
                unit: self.quantity.canonical_unit(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Please enter a value")]
    Empty,

    #[error("'{0}' is not a plain decimal number")]
    Malformed(String),

    #[error("Use at most {max} decimal places")]
    TooManyDecimals { max: usize },

    #[error("{quantity} must be between {min} and {max} {unit}, got {value}")]
    OutOfRange {
        quantity: Quantity,
        unit: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Validate a plain numeric entry (`123`, `123.`, `.5`, `123.45`).
///
/// Signs, exponents and unit suffixes are rejected.
pub fn validate_entry(text: &str, limits: &InputLimits) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    check_plain_decimal(trimmed, trimmed, limits.max_decimals)?;

    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::Malformed(trimmed.to_string()))?;
    limits.check_range(value)
}

/// Accept either a plain entry or a unit-tagged value converted to the
/// canonical unit, then range-check it.
///
/// The number in a tagged value follows the plain-entry rules, except that a
/// leading minus sign is allowed (`-10C`).
pub fn parse_entry(text: &str, limits: &InputLimits) -> Result<f64, InputError> {
    if !has_unit_suffix(text) {
        return validate_entry(text, limits);
    }

    let (number, _) = split_number_text(text);
    let digits = number.strip_prefix('-').unwrap_or(number);
    check_plain_decimal(digits, text.trim(), limits.max_decimals)?;

    let value = parse_quantity(text, limits.quantity)?;
    limits.check_range(value)
}

fn check_plain_decimal(number: &str, entry: &str, max_decimals: usize) -> Result<(), InputError> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty()) {
        return Err(InputError::Malformed(entry.to_string()));
    }

    if fraction.len() > max_decimals {
        return Err(InputError::TooManyDecimals { max: max_decimals });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_numbers() {
        let t = InputLimits::TEMPERATURE;
        assert_eq!(validate_entry("300", &t).unwrap(), 300.0);
        assert_eq!(validate_entry("373.15", &t).unwrap(), 373.15);
        assert_eq!(validate_entry("250.", &t).unwrap(), 250.0);
        assert_eq!(validate_entry(" 700 ", &t).unwrap(), 700.0);

        let p = InputLimits::PRESSURE;
        assert_eq!(validate_entry(".5", &p).unwrap(), 0.5);
        assert_eq!(validate_entry("0.001", &p).unwrap(), 0.001);
    }

    #[test]
    fn rejects_too_many_decimals() {
        assert_eq!(
            validate_entry("300.125", &InputLimits::TEMPERATURE),
            Err(InputError::TooManyDecimals { max: 2 })
        );
        assert_eq!(
            validate_entry("0.0015", &InputLimits::PRESSURE),
            Err(InputError::TooManyDecimals { max: 3 })
        );
    }

    #[test]
    fn rejects_malformed() {
        let t = InputLimits::TEMPERATURE;
        for text in ["-300", "3e2", "1.2.3", ".", "abc", "300K"] {
            assert!(
                matches!(validate_entry(text, &t), Err(InputError::Malformed(_))),
                "accepted {text}"
            );
        }
        assert_eq!(validate_entry("   ", &t), Err(InputError::Empty));
    }

    #[test]
    fn rejects_out_of_range_with_message() {
        let err = validate_entry("150", &InputLimits::TEMPERATURE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Temperature must be between 200 and 700 K, got 150"
        );
        assert!(validate_entry("300.5", &InputLimits::PRESSURE).is_err());
        assert!(validate_entry("0.000", &InputLimits::PRESSURE).is_err());
    }

    #[test]
    fn parse_entry_accepts_units() {
        let t = parse_entry("100C", &InputLimits::TEMPERATURE).unwrap();
        assert!((t - 373.15).abs() < 1e-9);
        let p = parse_entry("101.325 kPa", &InputLimits::PRESSURE).unwrap();
        assert!((p - 1.0).abs() < 1e-12);
        assert!(matches!(
            parse_entry("-100C", &InputLimits::TEMPERATURE),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_entry("5 psi", &InputLimits::PRESSURE),
            Err(InputError::Unit(UnitError::AmbiguousUnit { .. }))
        ));
    }

    #[test]
    fn tagged_entries_follow_the_plain_number_rules() {
        let t = InputLimits::TEMPERATURE;
        assert_eq!(
            parse_entry("373.15123 K", &t),
            Err(InputError::TooManyDecimals { max: 2 })
        );
        assert!(matches!(
            parse_entry("1e2 atm", &InputLimits::PRESSURE),
            Err(InputError::Malformed(_))
        ));
        assert!(matches!(
            parse_entry("+300 K", &t),
            Err(InputError::Malformed(_))
        ));

        let below_freezing = parse_entry("-10.5C", &t).unwrap();
        assert!((below_freezing - 262.65).abs() < 1e-9);
        assert_eq!(parse_entry("373.15 K", &t).unwrap(), 373.15);
    }
}
