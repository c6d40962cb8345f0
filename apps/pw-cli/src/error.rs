//! Error type for the command-line front end.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Settings error: {0}")]
    Config(#[from] pw_config::ConfigError),

    #[error("{0}")]
    Input(#[from] pw_water::InputError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] pw_water::SweepError),

    #[error("{0}")]
    Water(#[from] pw_water::WaterError),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type AppResult<T> = Result<T, AppError>;
