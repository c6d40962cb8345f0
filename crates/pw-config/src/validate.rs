//! Settings validation logic.

use crate::schema::{AxisLimitDef, DiagramSettings};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_settings(settings: &DiagramSettings) -> Result<(), ValidationError> {
    if settings.version == 0 || settings.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: settings.version,
        });
    }

    validate_limit("limits.temperature", &settings.limits.temperature, true)?;
    validate_limit("limits.pressure", &settings.limits.pressure, false)?;

    if settings.curves.samples < 2 {
        return Err(invalid(
            "curves.samples",
            settings.curves.samples,
            "need at least 2 samples",
        ));
    }

    settings
        .plot_frame()
        .map_err(|e| invalid("axes", "frame", &e.to_string()))?;

    Ok(())
}

fn validate_limit(
    field: &str,
    limit: &AxisLimitDef,
    strictly_positive: bool,
) -> Result<(), ValidationError> {
    if !limit.min.is_finite() || !limit.max.is_finite() {
        return Err(invalid(field, format!("{}..{}", limit.min, limit.max), "must be finite"));
    }
    if limit.min >= limit.max {
        return Err(invalid(
            field,
            format!("{}..{}", limit.min, limit.max),
            "min must be below max",
        ));
    }
    let floor_ok = if strictly_positive {
        limit.min > 0.0
    } else {
        limit.min >= 0.0
    };
    if !floor_ok {
        return Err(invalid(field, limit.min, "below the physical floor"));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
