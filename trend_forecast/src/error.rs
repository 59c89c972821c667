//! Error types for the trend_forecast crate

use thiserror::Error;

/// Custom error types for the trend_forecast crate
///
/// Insufficient or numerically unusable data is not an error here: the
/// forecast operations report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error in configuration values or files
    #[error("Config error: {0}")]
    ConfigError(String),

    /// Error parsing a date or number
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error from trend math operations
    #[error("Math error: {0}")]
    MathError(#[from] trend_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV reading
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<std::num::ParseFloatError> for ForecastError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ForecastError::ParseError(err.to_string())
    }
}
