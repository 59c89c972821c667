//! Linear trend over calendar-day ordinals

use crate::config::MIN_OBSERVATIONS;
use crate::data::{HistoricalSeries, Observation};
use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, Projection, TrainedForecastModel};
use crate::utils::{date_ordinal, future_dates};
use chrono::NaiveDate;
use log::debug;
use trend_math::LinearFit;

/// Least-squares line of value against day ordinal
#[derive(Debug, Clone)]
pub struct LinearTrend {
    /// Name of the model
    name: String,
}

/// Trained linear trend
#[derive(Debug, Clone)]
pub struct TrainedLinearTrend {
    /// Name of the model
    name: String,
    /// Fitted line over day ordinals
    fit: LinearFit,
    /// Last observation in date order
    last: Observation,
}

impl LinearTrend {
    /// Create a new linear trend model
    pub fn new() -> Self {
        Self {
            name: "Linear Trend".to_string(),
        }
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastModel for LinearTrend {
    type Trained = TrainedLinearTrend;

    fn train(&self, series: &HistoricalSeries) -> Option<Self::Trained> {
        if series.len() < MIN_OBSERVATIONS {
            debug!(
                "{}: {} valid observation(s), need at least {}",
                self.name,
                series.len(),
                MIN_OBSERVATIONS
            );
            return None;
        }

        if !series.has_time_variance() {
            debug!(
                "{}: all observations share one date, projecting the mean",
                self.name
            );
        }

        let fit = match LinearFit::fit(&series.ordinals(), &series.values()) {
            Ok(fit) => fit,
            Err(e) => {
                debug!("{}: fit failed: {}", self.name, e);
                return None;
            }
        };

        Some(TrainedLinearTrend {
            name: self.name.clone(),
            fit,
            last: *series.last()?,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedLinearTrend {
    /// The fitted line
    pub fn fit(&self) -> &LinearFit {
        &self.fit
    }

    /// Last observation the model was trained on
    pub fn last_observation(&self) -> &Observation {
        &self.last
    }
}

impl TrainedForecastModel for TrainedLinearTrend {
    fn predict_at(&self, date: NaiveDate) -> f64 {
        self.fit.predict(date_ordinal(date) as f64)
    }

    fn project(&self, horizon: usize) -> Result<Vec<Projection>> {
        future_dates(self.last.date, horizon)?
            .into_iter()
            .map(|date| {
                let value = self.predict_at(date);
                if value.is_finite() {
                    Ok(Projection { date, value })
                } else {
                    Err(ForecastError::DataError(format!(
                        "Non-finite projection for {}",
                        date
                    )))
                }
            })
            .collect()
    }

    fn slope_per_day(&self) -> f64 {
        self.fit.slope()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
