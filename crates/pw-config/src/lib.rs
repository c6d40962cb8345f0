//! pw-config: diagram settings file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_settings};

use tracing::debug;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ConfigResult<DiagramSettings> {
    let content = std::fs::read_to_string(path)?;
    let settings: DiagramSettings = serde_yaml::from_str(&content)?;
    validate_settings(&settings)?;
    debug!(path = %path.display(), name = %settings.name, "loaded diagram settings");
    Ok(settings)
}

pub fn save_yaml(path: &std::path::Path, settings: &DiagramSettings) -> ConfigResult<()> {
    validate_settings(settings)?;
    let content = serde_yaml::to_string(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ConfigResult<DiagramSettings> {
    let content = std::fs::read_to_string(path)?;
    let settings: DiagramSettings = serde_json::from_str(&content)?;
    validate_settings(&settings)?;
    debug!(path = %path.display(), name = %settings.name, "loaded diagram settings");
    Ok(settings)
}

pub fn save_json(path: &std::path::Path, settings: &DiagramSettings) -> ConfigResult<()> {
    validate_settings(settings)?;
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> ConfigResult<DiagramSettings> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}
