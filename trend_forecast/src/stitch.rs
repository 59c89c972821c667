//! Anchoring projections onto history and sizing the uncertainty band

use crate::data::HistoricalSeries;
use crate::error::{ForecastError, Result};
use crate::forecast::{ForecastPoint, ForecastSeries};
use crate::models::{Projection, TrainedForecastModel};
use trend_math::stats;

/// Symmetric band around each projected value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyBand {
    half_width: f64,
}

impl UncertaintyBand {
    /// Size the band from in-sample residuals
    ///
    /// The half-width is the population standard deviation of the residuals
    /// times `multiplier`. Fewer than two residuals give a zero-width band.
    pub fn from_residuals(residuals: &[f64], multiplier: f64) -> Result<Self> {
        let spread = if residuals.len() < 2 {
            0.0
        } else {
            stats::population_std_dev(residuals)?
        };

        let half_width = spread * multiplier;
        if !half_width.is_finite() || half_width < 0.0 {
            return Err(ForecastError::DataError(format!(
                "Unusable band half-width {}",
                half_width
            )));
        }

        Ok(Self { half_width })
    }

    /// Distance from the prediction to either bound
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Lower and upper bounds around `value`
    pub fn bounds(&self, value: f64) -> (f64, f64) {
        (value - self.half_width, value + self.half_width)
    }
}

/// Joins raw projections to the last actual observation
#[derive(Debug, Clone, Copy)]
pub struct Stitcher {
    band_multiplier: f64,
}

impl Stitcher {
    /// Create a stitcher with the given band multiplier
    pub fn new(band_multiplier: f64) -> Result<Self> {
        if !band_multiplier.is_finite() || band_multiplier < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Band multiplier must be a non-negative finite number, got {}",
                band_multiplier
            )));
        }

        Ok(Self { band_multiplier })
    }

    /// Build the forecast series
    ///
    /// The first point repeats the last observation of `series` with zero
    /// width; every projection after it carries the residual band of `model`.
    pub fn stitch<T: TrainedForecastModel>(
        &self,
        series: &HistoricalSeries,
        model: &T,
        projections: &[Projection],
    ) -> Result<ForecastSeries> {
        let last = series.last().ok_or_else(|| {
            ForecastError::DataError("Cannot anchor a forecast on an empty series".to_string())
        })?;

        let residuals = model.residuals(series);
        let band = UncertaintyBand::from_residuals(&residuals, self.band_multiplier)?;

        let mut points = Vec::with_capacity(projections.len() + 1);
        points.push(ForecastPoint::anchor(last));

        let mut previous = last.date;
        for projection in projections {
            if projection.date <= previous {
                return Err(ForecastError::DataError(format!(
                    "Projection date {} does not follow {}",
                    projection.date, previous
                )));
            }
            if !projection.value.is_finite() {
                return Err(ForecastError::DataError(format!(
                    "Non-finite projection for {}",
                    projection.date
                )));
            }

            let (lower, upper) = band.bounds(projection.value);
            points.push(ForecastPoint {
                date: projection.date,
                predicted: projection.value,
                lower,
                upper,
            });
            previous = projection.date;
        }

        Ok(ForecastSeries::new(points, band.half_width()))
    }
}
