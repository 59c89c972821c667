//! Forecast configuration

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of future months projected when none is configured
pub const DEFAULT_HORIZON: usize = 3;

/// Residual standard deviations covered by each side of the uncertainty band.
///
/// An empirical setting, not a confidence-interval z-score.
pub const DEFAULT_BAND_MULTIPLIER: f64 = 1.2;

/// Fewest valid observations that can produce a forecast
pub const MIN_OBSERVATIONS: usize = 2;

/// Settings for a forecast run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastConfig {
    /// Number of future months to project
    pub horizon: usize,
    /// Multiplier applied to the residual standard deviation
    pub band_multiplier: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
            band_multiplier: DEFAULT_BAND_MULTIPLIER,
        }
    }
}

impl ForecastConfig {
    /// Set the forecast horizon
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the band multiplier
    pub fn with_band_multiplier(mut self, band_multiplier: f64) -> Self {
        self.band_multiplier = band_multiplier;
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be positive".to_string(),
            ));
        }

        if !self.band_multiplier.is_finite() || self.band_multiplier < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Band multiplier must be a non-negative finite number, got {}",
                self.band_multiplier
            )));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ForecastError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Serialize the configuration as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
