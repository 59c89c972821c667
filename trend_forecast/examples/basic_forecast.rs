use chrono::NaiveDate;
use trend_forecast::{ForecastConfig, Forecaster, HistoricalSeries};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Monthly clicks for one keyword, with a gap and an unusable row
    let raw = vec![
        (NaiveDate::from_ymd_opt(2025, 9, 1), Some(820.0)),
        (NaiveDate::from_ymd_opt(2025, 10, 1), Some(870.0)),
        (NaiveDate::from_ymd_opt(2025, 11, 1), None),
        (NaiveDate::from_ymd_opt(2025, 12, 1), Some(940.0)),
        (NaiveDate::from_ymd_opt(2026, 1, 1), Some(905.0)),
        (NaiveDate::from_ymd_opt(2026, 2, 1), Some(990.0)),
    ];
    let series = HistoricalSeries::from_raw(raw);
    println!("Using {} valid observations", series.len());

    let forecaster = Forecaster::new(ForecastConfig::default().with_horizon(4))?;

    match forecaster.forecast(&series) {
        Some(forecast) => {
            println!("{}", forecast);
            if let Some(diagnostics) = forecaster.diagnose(&series) {
                println!("{}", diagnostics);
            }
        }
        None => println!("Not enough data to forecast"),
    }

    Ok(())
}
