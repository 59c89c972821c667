//! Trend models for historical series

use crate::data::HistoricalSeries;
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A raw model prediction for a future date, before any band is attached
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Projected calendar date
    pub date: NaiveDate,
    /// Predicted value
    pub value: f64,
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Evaluate the model at a date
    fn predict_at(&self, date: NaiveDate) -> f64;

    /// Raw predictions for `horizon` future months after the last observation
    fn project(&self, horizon: usize) -> Result<Vec<Projection>>;

    /// In-sample residuals (actual minus predicted) over a series
    fn residuals(&self, series: &HistoricalSeries) -> Vec<f64> {
        series
            .observations()
            .iter()
            .map(|obs| obs.value - self.predict_at(obs.date))
            .collect()
    }

    /// Change in predicted value per calendar day
    fn slope_per_day(&self) -> f64;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on a historical series
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model, or `None` when the series cannot support a fit
    fn train(&self, series: &HistoricalSeries) -> Option<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod linear_trend;
