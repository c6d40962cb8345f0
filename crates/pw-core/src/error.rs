use thiserror::Error;

pub type PwResult<T> = Result<T, PwError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PwError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
