//! Summary statistics over residuals and observed values

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Arithmetic mean of the values
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty slice".to_string(),
        ));
    }

    finite(values.iter().mean(), "mean")
}

/// Population standard deviation (divides by n)
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the standard deviation of an empty slice".to_string(),
        ));
    }
    if values.len() == 1 {
        return Ok(0.0);
    }

    finite(values.iter().population_std_dev(), "standard deviation")
}

/// Mean of the absolute values
pub fn mean_absolute(values: &[f64]) -> Result<f64> {
    let magnitudes: Vec<f64> = values.iter().map(|v| v.abs()).collect();
    mean(&magnitudes)
}

/// Square root of the mean of the squared values
pub fn root_mean_square(values: &[f64]) -> Result<f64> {
    let squares: Vec<f64> = values.iter().map(|v| v * v).collect();
    Ok(mean(&squares)?.sqrt())
}

/// Coefficient of determination of a fit, from the observed values and the
/// fit's residuals over them
///
/// Constant observations report 1.0 when the fit reproduces them exactly and
/// 0.0 otherwise.
pub fn r_squared(actual: &[f64], residuals: &[f64]) -> Result<f64> {
    if actual.len() != residuals.len() {
        return Err(MathError::InvalidInput(format!(
            "Values and residuals lengths differ ({} vs {})",
            actual.len(),
            residuals.len()
        )));
    }

    let actual_mean = mean(actual)?;
    let ss_res: f64 = residuals.iter().map(|r| r * r).sum();
    let ss_tot: f64 = actual.iter().map(|y| (y - actual_mean).powi(2)).sum();

    if ss_tot.abs() < f64::EPSILON {
        return Ok(if ss_res.abs() < f64::EPSILON { 1.0 } else { 0.0 });
    }

    finite(1.0 - ss_res / ss_tot, "r-squared")
}

fn finite(value: f64, what: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::CalculationError(format!(
            "Non-finite {} ({})",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean() {
        assert_abs_diff_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_population_std_dev() {
        // Classic example: population sd of this set is exactly 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(population_std_dev(&values).unwrap(), 2.0, epsilon = 1e-12);

        assert_eq!(population_std_dev(&[3.5]).unwrap(), 0.0);
        assert_eq!(population_std_dev(&[1.0, 1.0, 1.0]).unwrap(), 0.0);
        assert!(population_std_dev(&[]).is_err());
    }

    #[test]
    fn test_error_summaries() {
        let residuals = [1.0, -1.0, 3.0, -3.0];
        assert_abs_diff_eq!(mean_absolute(&residuals).unwrap(), 2.0);
        assert_abs_diff_eq!(root_mean_square(&residuals).unwrap(), 5.0_f64.sqrt());
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        assert!(matches!(
            mean(&[1.0, f64::NAN]),
            Err(MathError::CalculationError(_))
        ));
        assert!(population_std_dev(&[f64::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_r_squared() {
        // ss_tot = 20, ss_res = 2
        let actual = [1.0, 3.0, 5.0, 7.0];
        let residuals = [1.0, -1.0, 0.0, 0.0];
        assert_abs_diff_eq!(r_squared(&actual, &residuals).unwrap(), 0.9, epsilon = 1e-12);

        assert_eq!(r_squared(&[4.0, 4.0], &[0.0, 0.0]).unwrap(), 1.0);
        assert_eq!(r_squared(&[4.0, 4.0], &[1.0, -1.0]).unwrap(), 0.0);
        assert!(r_squared(&[1.0, 2.0], &[0.0]).is_err());
        assert!(r_squared(&[], &[]).is_err());
    }
}
