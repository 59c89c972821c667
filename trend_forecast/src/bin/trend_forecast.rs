//! # trend-forecast
//!
//! Project a `date,value` CSV export a few months ahead.

use clap::Parser;
use log::info;
use std::path::PathBuf;
use trend_forecast::logger::initialize_logger;
use trend_forecast::{CsvSeriesSource, ForecastConfig, Forecaster, SeriesSource};

#[derive(Parser)]
#[command(name = "trend-forecast")]
#[command(about = "Linear trend projection for dated series", long_about = None)]
struct Cli {
    /// Input CSV with a date column followed by a value column
    #[arg(short, long)]
    input: PathBuf,

    /// JSON configuration file (horizon, band_multiplier)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of months to project, overriding the configuration
    #[arg(long)]
    horizon: Option<usize>,

    /// Residual standard deviations per side of the band, overriding the configuration
    #[arg(long)]
    band_multiplier: Option<f64>,

    /// Print the forecast as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ForecastConfig::from_json_file(path)?,
        None => ForecastConfig::default(),
    };
    if let Some(horizon) = cli.horizon {
        config = config.with_horizon(horizon);
    }
    if let Some(multiplier) = cli.band_multiplier {
        config = config.with_band_multiplier(multiplier);
    }

    let forecaster = Forecaster::new(config)?;
    let series = CsvSeriesSource::new(&cli.input).load()?;
    info!(
        "Loaded {} observation(s) from {}",
        series.len(),
        cli.input.display()
    );

    match forecaster.forecast(&series) {
        Some(forecast) if cli.json => println!("{}", forecast.to_json()?),
        Some(forecast) => {
            println!("{}", forecast);
            if let Some(diagnostics) = forecaster.diagnose(&series) {
                println!("{}", diagnostics);
            }
        }
        None => println!("No forecast available: need at least 2 valid observations"),
    }

    Ok(())
}
