//! In-sample fit diagnostics for a trained trend

use crate::data::HistoricalSeries;
use crate::error::{ForecastError, Result};
use crate::models::TrainedForecastModel;
use serde::Serialize;
use trend_math::stats;

/// Average days per calendar month, for reporting the trend per month
const DAYS_PER_MONTH: f64 = 365.2425 / 12.0;

/// How well a trained trend describes the series it was fitted on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitDiagnostics {
    /// Number of observations used
    pub observations: usize,
    /// Change in the predicted value per day
    pub slope_per_day: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Population standard deviation of the residuals
    pub residual_std: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

impl FitDiagnostics {
    /// Compute diagnostics from the residuals of `model` over `series`
    pub fn compute<T: TrainedForecastModel>(series: &HistoricalSeries, model: &T) -> Result<Self> {
        if series.is_empty() {
            return Err(ForecastError::DataError(
                "Cannot diagnose a fit on an empty series".to_string(),
            ));
        }

        let residuals = model.residuals(series);
        let r_squared = stats::r_squared(&series.values(), &residuals)?;

        let diagnostics = Self {
            observations: series.len(),
            slope_per_day: model.slope_per_day(),
            r_squared,
            residual_std: stats::population_std_dev(&residuals)?,
            mae: stats::mean_absolute(&residuals)?,
            rmse: stats::root_mean_square(&residuals)?,
        };

        if !diagnostics.r_squared.is_finite() || !diagnostics.slope_per_day.is_finite() {
            return Err(ForecastError::DataError(
                "Fit diagnostics are not finite".to_string(),
            ));
        }

        Ok(diagnostics)
    }

    /// Trend expressed per average calendar month
    pub fn slope_per_month(&self) -> f64 {
        self.slope_per_day * DAYS_PER_MONTH
    }
}

impl std::fmt::Display for FitDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Trend Fit Diagnostics:")?;
        writeln!(f, "  Observations:  {}", self.observations)?;
        writeln!(f, "  Trend/month:   {:.4}", self.slope_per_month())?;
        writeln!(f, "  R-squared:     {:.4}", self.r_squared)?;
        writeln!(f, "  Residual SD:   {:.4}", self.residual_std)?;
        writeln!(f, "  MAE:           {:.4}", self.mae)?;
        writeln!(f, "  RMSE:          {:.4}", self.rmse)?;
        Ok(())
    }
}
