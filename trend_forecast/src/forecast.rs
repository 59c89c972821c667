//! Forecast series and the forecast operation
//!
//! Forecasting is best-effort: series that are too short, or that produce
//! non-finite numbers, yield `None` instead of an error so callers can still
//! render their history. Only invalid settings are reported as errors.

use crate::config::ForecastConfig;
use crate::data::{HistoricalSeries, Observation, SeriesSource};
use crate::error::Result;
use crate::metrics::FitDiagnostics;
use crate::models::linear_trend::LinearTrend;
use crate::models::{ForecastModel, TrainedForecastModel};
use crate::stitch::Stitcher;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::fmt;

/// One point of a forecast series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Calendar date of the point
    pub date: NaiveDate,
    /// Point estimate
    pub predicted: f64,
    /// Lower bound of the uncertainty band
    pub lower: f64,
    /// Upper bound of the uncertainty band
    pub upper: f64,
}

impl ForecastPoint {
    /// A zero-width point repeating an actual observation
    pub fn anchor(observation: &Observation) -> Self {
        Self {
            date: observation.date,
            predicted: observation.value,
            lower: observation.value,
            upper: observation.value,
        }
    }
}

/// An anchor point followed by the projected points, in date order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
    half_width: f64,
}

impl ForecastSeries {
    pub(crate) fn new(points: Vec<ForecastPoint>, half_width: f64) -> Self {
        debug_assert!(!points.is_empty(), "forecast series needs an anchor");
        Self { points, half_width }
    }

    /// The point duplicating the last actual observation
    pub fn anchor(&self) -> &ForecastPoint {
        &self.points[0]
    }

    /// The extrapolated points after the anchor
    pub fn projected(&self) -> &[ForecastPoint] {
        &self.points[1..]
    }

    /// All points, anchor first
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of points including the anchor
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a forecast series holds at least its anchor
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of projected months
    pub fn horizon(&self) -> usize {
        self.points.len() - 1
    }

    /// Distance from each projected value to its bounds
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Iterate over all points, anchor first
    pub fn iter(&self) -> std::slice::Iter<'_, ForecastPoint> {
        self.points.iter()
    }

    /// Serialize for a chart renderer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a ForecastPoint;
    type IntoIter = std::slice::Iter<'a, ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for ForecastSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:>12} {:>12} {:>12}",
            "Date", "Predicted", "Lower", "Upper"
        )?;
        for (i, point) in self.points.iter().enumerate() {
            write!(
                f,
                "{:<12} {:>12.2} {:>12.2} {:>12.2}",
                point.date.to_string(),
                point.predicted,
                point.lower,
                point.upper
            )?;
            if i == 0 {
                write!(f, "  (last actual)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Fits a trend model and stitches its projections onto the history
#[derive(Debug, Clone)]
pub struct Forecaster<M: ForecastModel = LinearTrend> {
    model: M,
    config: ForecastConfig,
    stitcher: Stitcher,
}

impl Forecaster<LinearTrend> {
    /// Create a linear trend forecaster
    pub fn new(config: ForecastConfig) -> Result<Self> {
        Self::with_model(LinearTrend::new(), config)
    }
}

impl<M: ForecastModel> Forecaster<M> {
    /// Create a forecaster around any model
    pub fn with_model(model: M, config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let stitcher = Stitcher::new(config.band_multiplier)?;

        Ok(Self {
            model,
            config,
            stitcher,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Get the underlying model
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Forecast `horizon` months past the end of `series`
    ///
    /// Returns `None` when the series has fewer than two valid observations
    /// or the computation produces unusable numbers.
    pub fn forecast(&self, series: &HistoricalSeries) -> Option<ForecastSeries> {
        let trained = self.model.train(series)?;

        let result = trained
            .project(self.config.horizon)
            .and_then(|projections| self.stitcher.stitch(series, &trained, &projections));

        match result {
            Ok(forecast) => Some(forecast),
            Err(e) => {
                debug!("{}: no forecast produced: {}", self.model.name(), e);
                None
            }
        }
    }

    /// Load a series from `source` and forecast it
    ///
    /// Load failures are returned as errors; forecast failures as `Ok(None)`.
    pub fn forecast_from<S: SeriesSource>(&self, source: &S) -> Result<Option<ForecastSeries>> {
        let series = source.load()?;
        Ok(self.forecast(&series))
    }

    /// In-sample fit quality, with the same `None` cases as [`Forecaster::forecast`]
    pub fn diagnose(&self, series: &HistoricalSeries) -> Option<FitDiagnostics> {
        let trained = self.model.train(series)?;

        match FitDiagnostics::compute(series, &trained) {
            Ok(diagnostics) => Some(diagnostics),
            Err(e) => {
                debug!("{}: no diagnostics produced: {}", self.model.name(), e);
                None
            }
        }
    }
}

/// Forecast `horizon` months with the default linear trend settings
///
/// # Errors
///
/// Returns [`crate::ForecastError::InvalidParameter`] when `horizon` is zero.
/// Series that cannot be forecast give `Ok(None)`.
pub fn forecast(series: &HistoricalSeries, horizon: usize) -> Result<Option<ForecastSeries>> {
    let forecaster = Forecaster::new(ForecastConfig::default().with_horizon(horizon))?;
    Ok(forecaster.forecast(series))
}
