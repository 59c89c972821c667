//! # Rank Lens
//!
//! `rank_lens_workspace` bundles the forecasting crates behind the search
//! performance dashboard into a single dependency.
//!
//! - [`trend_forecast`]: series cleaning, the linear trend model, anchored
//!   projections with uncertainty bands and CSV loading
//! - [`trend_math`]: the least-squares fit and residual statistics underneath
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rank_lens_workspace::{forecast, HistoricalSeries, Observation};
//!
//! let series = HistoricalSeries::new(vec![
//!     Observation::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 50.0),
//! ]);
//!
//! // One observation is not enough for a trend
//! assert!(forecast(&series, 3).unwrap().is_none());
//! ```

pub use trend_forecast;
pub use trend_math;

pub use trend_forecast::{
    forecast, FitDiagnostics, ForecastConfig, ForecastError, ForecastPoint, ForecastSeries,
    Forecaster, HistoricalSeries, Observation, SeriesSource,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn month(m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, m, 1).unwrap()
    }

    #[test]
    fn test_reexported_forecast() {
        let series = HistoricalSeries::new(vec![
            Observation::new(month(1), 5.0),
            Observation::new(month(2), 5.0),
        ]);

        let result = forecast(&series, 4).unwrap().unwrap();
        assert_eq!(result.len(), 5);
        assert!(result.projected().iter().all(|p| p.predicted == 5.0));
    }

    #[test]
    fn test_reexported_math() {
        let fit = trend_math::LinearFit::fit(&[0.0, 2.0], &[1.0, 5.0]).unwrap();
        assert_eq!(fit.predict(1.0), 3.0);
    }
}
