//! # Trend Math
//!
//! Numeric building blocks for trend forecasting.
//! This crate provides an ordinary least-squares line fit over explicit
//! `(x, y)` points and the summary statistics used to size uncertainty bands.

use thiserror::Error;

pub mod regression;
pub mod stats;

pub use regression::LinearFit;

/// Errors that can occur in trend calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
