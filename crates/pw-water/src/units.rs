//! Unit-aware numeric input.
//!
//! Text such as `25C`, `14.7 psia` or `300` is parsed into the diagram's
//! canonical units: kelvin for temperature and standard atmospheres for
//! pressure. A bare number is taken to already be in the canonical unit.

use pw_core::constants::PA_PER_ATM;
use std::fmt;

/// Axis quantity for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Temperature (canonical: K)
    Temperature,
    /// Absolute pressure (canonical: atm)
    Pressure,
}

impl Quantity {
    pub fn canonical_unit(self) -> &'static str {
        match self {
            Self::Temperature => "K",
            Self::Pressure => "atm",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Pressure"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: String },
    /// Unit not allowed for this quantity (e.g., gauge pressure)
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., negative absolute temperature)
    OutOfRange { value: f64, reason: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{}' for {}", unit, quantity)
            }
            Self::AmbiguousUnit { unit, reason } => {
                write!(f, "Ambiguous unit '{}': {}", unit, reason)
            }
            Self::OutOfRange { value, reason } => {
                write!(f, "Value {} out of range: {}", value, reason)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Stores a value with its original user input and canonical representation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitValue {
    /// Raw text as the user entered it (e.g., "25C", "0.5 atm")
    pub raw_text: String,
    /// Canonical value (K or atm)
    pub canonical: f64,
    /// Associated quantity type
    pub quantity: Quantity,
}

impl UnitValue {
    /// Parse raw text and keep both forms.
    pub fn from_text(raw_text: impl Into<String>, quantity: Quantity) -> Result<Self, UnitError> {
        let text = raw_text.into();
        let canonical = parse_quantity(&text, quantity)?;
        Ok(Self {
            raw_text: text,
            canonical,
            quantity,
        })
    }

    pub fn value(&self) -> f64 {
        self.canonical
    }

    /// Replace the raw text and re-parse, returning error if parsing fails.
    pub fn update_text(&mut self, new_text: impl Into<String>) -> Result<(), UnitError> {
        let text = new_text.into();
        let canonical = parse_quantity(&text, self.quantity)?;
        self.raw_text = text;
        self.canonical = canonical;
        Ok(())
    }
}

/// Parse a quantity value from user input text into canonical units.
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
    }
}

/// True when the text carries a unit suffix after the number.
pub fn has_unit_suffix(raw_text: &str) -> bool {
    split_value_and_unit(raw_text)
        .map(|(_, unit)| !unit.is_empty())
        .unwrap_or(false)
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "k" | "kelvin" | "" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: "Temperature".to_string(),
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

/// Parse absolute pressure in various units, return atm.
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let atm = match unit.to_lowercase().as_str() {
        "atm" | "" => value,
        "pa" | "pascal" => value / PA_PER_ATM,
        "kpa" => value * 1e3 / PA_PER_ATM,
        "mpa" => value * 1e6 / PA_PER_ATM,
        "bar" => value * 1e5 / PA_PER_ATM,
        "mbar" | "millibar" => value * 100.0 / PA_PER_ATM,
        "torr" | "mmhg" => value / 760.0,
        "psia" => value * 6_894.76 / PA_PER_ATM,
        "psi" | "psig" | "barg" => {
            return Err(UnitError::AmbiguousUnit {
                unit: unit.to_string(),
                reason: "The diagram uses absolute pressure; use 'psia', 'bar' or 'atm'"
                    .to_string(),
            });
        }
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: "Pressure".to_string(),
            });
        }
    };

    if atm < 0.0 {
        return Err(UnitError::OutOfRange {
            value: atm,
            reason: "Absolute pressure cannot be negative".to_string(),
        });
    }

    Ok(atm)
}

/// Split text into its leading numeric part and the trailing unit, both
/// trimmed and unparsed.
pub(crate) fn split_number_text(input: &str) -> (&str, &str) {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    (num_part.trim(), unit_part.trim())
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "25C" -> (25.0, "C")
/// - "14.7 psia" -> (14.7, "psia")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let (num_part, unit_part) = split_number_text(input);

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kelvin() {
        assert_eq!(parse_temperature("300 K").unwrap(), 300.0);
        assert_eq!(parse_temperature("300K").unwrap(), 300.0);
        assert_eq!(parse_temperature("300").unwrap(), 300.0);
    }

    #[test]
    fn parse_celsius() {
        let c0 = parse_temperature("0C").unwrap();
        assert!((c0 - 273.15).abs() < 0.01);
        let c100 = parse_temperature("100 °C").unwrap();
        assert!((c100 - 373.15).abs() < 1e-9);
    }

    #[test]
    fn parse_fahrenheit() {
        let f32 = parse_temperature("32F").unwrap();
        assert!((f32 - 273.15).abs() < 1.0);
    }

    #[test]
    fn reject_non_positive_temperature() {
        assert!(parse_temperature("-100K").is_err());
        assert!(parse_temperature("0").is_err());
    }

    #[test]
    fn parse_pressure_units() {
        assert_eq!(parse_pressure("1").unwrap(), 1.0);
        assert!((parse_pressure("101325 Pa").unwrap() - 1.0).abs() < 1e-12);
        assert!((parse_pressure("760 torr").unwrap() - 1.0).abs() < 1e-12);
        assert!((parse_pressure("22.064 MPa").unwrap() - 217.755).abs() < 1e-3);
        let bar = parse_pressure("1 bar").unwrap();
        assert!((bar - 0.986_923).abs() < 1e-6);
    }

    #[test]
    fn reject_gauge_units() {
        assert!(matches!(
            parse_pressure("14.7 psi"),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
        assert!(matches!(parse_pressure("2 barg"), Err(UnitError::AmbiguousUnit { .. })));
    }

    #[test]
    fn reject_unknown_unit() {
        assert!(matches!(
            parse_quantity("3 furlongs", Quantity::Pressure),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn reject_garbage() {
        assert!(matches!(
            parse_quantity("abc", Quantity::Temperature),
            Err(UnitError::ParseError(_))
        ));
    }

    #[test]
    fn unit_suffix_detection() {
        assert!(has_unit_suffix("25C"));
        assert!(has_unit_suffix("0.5 atm"));
        assert!(!has_unit_suffix("300.25"));
        assert!(!has_unit_suffix("x"));
    }

    #[test]
    fn unit_value_roundtrip() {
        let mut uv = UnitValue::from_text("25C", Quantity::Temperature).unwrap();
        assert_eq!(uv.raw_text, "25C");
        assert!((uv.value() - 298.15).abs() < 1e-9);
        uv.update_text("300").unwrap();
        assert_eq!(uv.value(), 300.0);
        assert!(uv.update_text("nope").is_err());
        assert_eq!(uv.raw_text, "300");
    }
}
