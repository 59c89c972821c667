//! Historical series handling for forecasting

use crate::error::{ForecastError, Result};
use crate::utils::{date_ordinal, date_parser};
use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A single dated value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Observed value
    pub value: f64,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Whether the value can take part in a fit
    pub fn is_valid(&self) -> bool {
        self.value.is_finite()
    }
}

/// Cleaned, date-ordered observations used to fit a trend
///
/// Invalid values are dropped on construction and the remaining observations
/// are stable-sorted by date. Observations sharing a date are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoricalSeries {
    observations: Vec<Observation>,
}

impl HistoricalSeries {
    /// Create a series from observations, dropping non-finite values
    pub fn new(observations: Vec<Observation>) -> Self {
        let total = observations.len();
        let mut observations: Vec<Observation> =
            observations.into_iter().filter(Observation::is_valid).collect();

        if observations.len() < total {
            debug!(
                "Dropped {} observation(s) with non-finite values",
                total - observations.len()
            );
        }

        observations.sort_by_key(|obs| obs.date);
        Self { observations }
    }

    /// Create a series from possibly-missing dates and values
    ///
    /// Entries missing either half are dropped before any other cleaning.
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = (Option<NaiveDate>, Option<f64>)>,
    {
        let mut missing = 0usize;
        let observations: Vec<Observation> = raw
            .into_iter()
            .filter_map(|entry| match entry {
                (Some(date), Some(value)) => Some(Observation::new(date, value)),
                _ => {
                    missing += 1;
                    None
                }
            })
            .collect();

        if missing > 0 {
            debug!("Dropped {} observation(s) missing a date or value", missing);
        }

        Self::new(observations)
    }

    /// Create a series from parallel date and value vectors
    pub fn from_pairs(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::DataError(format!(
                "Dates length ({}) doesn't match values length ({})",
                dates.len(),
                values.len()
            )));
        }

        Ok(Self::new(
            dates
                .into_iter()
                .zip(values)
                .map(|(date, value)| Observation::new(date, value))
                .collect(),
        ))
    }

    /// Get the observations in date order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent observation (last in date order)
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Day ordinals of the observation dates, as regression inputs
    pub fn ordinals(&self) -> Vec<f64> {
        self.observations
            .iter()
            .map(|obs| date_ordinal(obs.date) as f64)
            .collect()
    }

    /// Observed values in date order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|obs| obs.value).collect()
    }

    /// Whether at least two observations fall on different dates
    pub fn has_time_variance(&self) -> bool {
        match (self.observations.first(), self.observations.last()) {
            (Some(first), Some(last)) => first.date != last.date,
            _ => false,
        }
    }
}

impl FromIterator<Observation> for HistoricalSeries {
    fn from_iter<T: IntoIterator<Item = Observation>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Anything that can supply a historical series to forecast
pub trait SeriesSource {
    /// Load the series
    fn load(&self) -> Result<HistoricalSeries>;
}

impl SeriesSource for HistoricalSeries {
    fn load(&self) -> Result<HistoricalSeries> {
        Ok(self.clone())
    }
}

/// Loader for two-column `date,value` CSV exports
///
/// The first row is a header. The first column is parsed as a date and the
/// second as a number; further columns are ignored. Rows that fail to parse
/// are skipped with a warning.
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a historical series from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<HistoricalSeries> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a historical series from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<HistoricalSeries> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = csv_reader.byte_headers()?.len();
        if columns < 2 {
            return Err(ForecastError::DataError(format!(
                "Expected a date column and a value column, found {} column(s)",
                columns
            )));
        }

        let mut raw = Vec::new();
        for (index, record) in csv_reader.byte_records().enumerate() {
            let record = record?;
            // Header is line 1
            let line = index + 2;

            let date = text_field(&record, 0, line).and_then(|field| {
                date_parser::parse_date(field)
                    .map_err(|e| warn!("Skipping line {}: {}", line, e))
                    .ok()
            });
            let value = text_field(&record, 1, line).and_then(|field| {
                parse_value(field)
                    .map_err(|e| warn!("Skipping line {}: {}", line, e))
                    .ok()
            });

            raw.push((date, value));
        }

        Ok(HistoricalSeries::from_raw(raw))
    }
}

/// Decode one cell of a raw record, warning when it is not valid UTF-8
fn text_field(record: &csv::ByteRecord, column: usize, line: usize) -> Option<&str> {
    let bytes = record.get(column)?;
    std::str::from_utf8(bytes)
        .map_err(|e| warn!("Skipping line {}: column {} is not UTF-8: {}", line, column + 1, e))
        .ok()
}

/// Parse a numeric cell, tolerating thousands separators
fn parse_value(field: &str) -> Result<f64> {
    let cleaned: String = field.chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(ForecastError::ParseError("Empty value".to_string()));
    }

    Ok(cleaned.parse::<f64>()?)
}

/// A CSV file on disk as a series source
#[derive(Debug, Clone)]
pub struct CsvSeriesSource {
    path: PathBuf,
}

impl CsvSeriesSource {
    /// Create a source reading from `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path the source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for CsvSeriesSource {
    fn load(&self) -> Result<HistoricalSeries> {
        debug!("Loading series from {}", self.path.display());
        DataLoader::from_csv(&self.path)
    }
}
