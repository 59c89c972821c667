//! # Trend Forecast
//!
//! Short-range linear trend projections for dashboard series such as clicks,
//! impressions or average ranking position.
//!
//! ## Features
//!
//! - Cleaning of raw `(date, value)` observations into a date-ordered series
//! - Least-squares trend over calendar-day ordinals
//! - Projections stepped by whole calendar months from the last observation
//! - An anchor point repeating the last actual value, so the projection joins
//!   the history without a gap
//! - A symmetric uncertainty band sized from the in-sample residuals
//! - Loading two-column `date,value` CSV exports
//!
//! ## Best-effort Results
//!
//! A forecast is an overlay on the history, never a reason to fail:
//!
//! - Fewer than two valid observations give `None`
//! - Observations that all share one date project their mean as a flat line
//! - Non-finite intermediate results give `None`
//!
//! Only invalid settings (a zero horizon, a negative band multiplier) are errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use trend_forecast::{forecast, HistoricalSeries, Observation};
//!
//! let date = |m| NaiveDate::from_ymd_opt(2026, m, 1).unwrap();
//! let series = HistoricalSeries::new(vec![
//!     Observation::new(date(1), 100.0),
//!     Observation::new(date(2), 110.0),
//!     Observation::new(date(3), 120.0),
//! ]);
//!
//! let projection = forecast(&series, 3)?.expect("three observations are enough");
//!
//! // The first point repeats the last observation
//! assert_eq!(projection.anchor().date, date(3));
//! assert_eq!(projection.anchor().predicted, 120.0);
//!
//! // Followed by one point per month
//! assert_eq!(projection.projected().len(), 3);
//! assert_eq!(projection.projected()[2].date, date(6));
//! # Ok::<(), trend_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod forecast;
pub mod logger;
pub mod metrics;
pub mod models;
pub mod stitch;
pub mod utils;

// Re-export commonly used types
pub use crate::config::{
    ForecastConfig, DEFAULT_BAND_MULTIPLIER, DEFAULT_HORIZON, MIN_OBSERVATIONS,
};
pub use crate::data::{CsvSeriesSource, DataLoader, HistoricalSeries, Observation, SeriesSource};
pub use crate::error::ForecastError;
pub use crate::forecast::{forecast, ForecastPoint, ForecastSeries, Forecaster};
pub use crate::metrics::FitDiagnostics;
pub use crate::models::{ForecastModel, Projection, TrainedForecastModel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
