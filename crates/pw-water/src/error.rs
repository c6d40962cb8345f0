//! Engine errors.
//!
//! The pressure models and the classifier never fail; these cover the
//! surrounding helpers (name lookups, constant checks, sampling requests).

use pw_core::PwError;
use thiserror::Error;

/// Result type for engine helpers.
pub type WaterResult<T> = Result<T, WaterError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaterError {
    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Value out of valid range.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Name does not match a boundary curve.
    #[error("Unknown boundary curve '{0}' (expected sublimation, vaporization or fusion)")]
    UnknownCurve(String),
}

impl From<WaterError> for PwError {
    fn from(err: WaterError) -> Self {
        match err {
            WaterError::InvalidArg { what } => PwError::InvalidArg { what },
            WaterError::OutOfRange { what } => PwError::InvalidArg { what },
            WaterError::UnknownCurve(_) => PwError::InvalidArg {
                what: "unknown boundary curve",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = WaterError::OutOfRange { what: "temperature" };
        assert!(err.to_string().contains("temperature"));

        let err = WaterError::UnknownCurve("melting".into());
        assert!(err.to_string().contains("melting"));
    }

    #[test]
    fn error_to_pw_error() {
        let err: PwError = WaterError::InvalidArg { what: "count" }.into();
        assert!(matches!(err, PwError::InvalidArg { what: "count" }));
    }
}
