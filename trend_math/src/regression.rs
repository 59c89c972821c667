//! Ordinary least-squares line fitting
//!
//! Fits `y = slope * x + intercept` to explicit `(x, y)` points. When every `x`
//! is identical the line collapses to the mean of `y`, so callers always get a
//! usable fit once they have at least two points.

use crate::stats;
use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Sum of squared x deviations below which the x values count as identical
const MIN_X_SPREAD: f64 = 1e-10;

/// A fitted straight line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    slope: f64,
    intercept: f64,
    /// Mean of the x values the line was fitted on
    x_mean: f64,
    /// Mean of the y values the line was fitted on
    y_mean: f64,
    degenerate: bool,
}

impl LinearFit {
    /// Fit a least-squares line through the given points
    ///
    /// `xs` and `ys` must be the same length, contain at least two points and
    /// hold only finite values. If the x values have no spread the fit is a
    /// flat line at the mean of `ys` and [`LinearFit::is_degenerate`] reports it.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::InvalidInput(format!(
                "x and y lengths differ ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(MathError::InsufficientData(
                "Not enough data for a linear fit. Need at least 2 points.".to_string(),
            ));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(MathError::InvalidInput(
                "Linear fit input contains non-finite values".to_string(),
            ));
        }

        let x_mean = stats::mean(xs)?;
        let y_mean = stats::mean(ys)?;

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (&x, &y) in xs.iter().zip(ys.iter()) {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < MIN_X_SPREAD {
            return Ok(Self {
                slope: 0.0,
                intercept: y_mean,
                x_mean,
                y_mean,
                degenerate: true,
            });
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(MathError::CalculationError(format!(
                "Linear fit produced non-finite coefficients (slope={}, intercept={})",
                slope, intercept
            )));
        }

        Ok(Self {
            slope,
            intercept,
            x_mean,
            y_mean,
            degenerate: false,
        })
    }

    /// Slope of the fitted line
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Intercept of the fitted line (value at `x = 0`)
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Whether the x values had no spread and the line fell back to the mean
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Evaluate the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        // Centered form keeps precision when x is a large day count
        self.y_mean + self.slope * (x - self.x_mean)
    }

    /// Actual minus predicted for each point
    pub fn residuals(&self, xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
        if xs.len() != ys.len() {
            return Err(MathError::InvalidInput(format!(
                "x and y lengths differ ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }

        Ok(xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| y - self.predict(x))
            .collect())
    }
}
