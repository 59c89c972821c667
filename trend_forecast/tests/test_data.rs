use chrono::NaiveDate;
use std::io::Write;
use tempfile::NamedTempFile;
use trend_forecast::{DataLoader, ForecastError, HistoricalSeries, Observation};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_data_loader_from_csv() {
    // Create a temporary CSV file
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,impressions,ctr").unwrap();
    writeln!(file, "2023-01-01,1000,0.02").unwrap();
    writeln!(file, "01/02/2023,1200,0.03").unwrap();
    writeln!(file, "2023-01-03T00:00:00,1500,0.01").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.values(), vec![1000.0, 1200.0, 1500.0]);
    assert_eq!(series.last().unwrap().date, ymd(2023, 1, 3));
}

#[test]
fn test_historical_series_operations() {
    let dates = vec![ymd(2023, 1, 3), ymd(2023, 1, 1), ymd(2023, 1, 2)];
    let values = vec![106.0, 100.0, 103.0];

    let series = HistoricalSeries::from_pairs(dates, values).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.values(), vec![100.0, 103.0, 106.0]);
    assert!(series.has_time_variance());

    let ordinals = series.ordinals();
    assert_eq!(ordinals[1] - ordinals[0], 1.0);
    assert_eq!(ordinals[2] - ordinals[0], 2.0);

    let mismatched = HistoricalSeries::from_pairs(vec![ymd(2023, 1, 1)], vec![]);
    assert!(matches!(mismatched, Err(ForecastError::DataError(_))));
}

#[test]
fn test_observation_validity() {
    assert!(Observation::new(ymd(2023, 1, 1), 0.0).is_valid());
    assert!(!Observation::new(ymd(2023, 1, 1), f64::NAN).is_valid());
    assert!(!Observation::new(ymd(2023, 1, 1), f64::NEG_INFINITY).is_valid());
}

#[test]
fn test_data_loader_error_handling() {
    // Test with non-existent file
    let result = DataLoader::from_csv("nonexistent_file.csv");
    assert!(result.is_err());

    // A single column cannot hold both a date and a value
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date").unwrap();
    writeln!(file, "2023-01-01").unwrap();

    let result = DataLoader::from_csv(file.path());
    assert!(matches!(result, Err(ForecastError::DataError(_))));

    // Header only is a valid, empty export
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "date,value").unwrap();

    let series = DataLoader::from_csv(file.path()).unwrap();
    assert!(series.is_empty());
}

#[test]
fn test_data_loader_skips_non_utf8_rows() {
    let input: &[u8] = b"date,value\n2026-01-01,1\n2026-02-01,\xff\xfe\n2026-03-01,3\n2026-04-01,4\n";

    let series = DataLoader::from_reader(input).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(series.values(), vec![1.0, 3.0, 4.0]);
    assert_eq!(series.observations()[1].date, ymd(2026, 3, 1));
}
