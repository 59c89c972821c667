//! Calendar utilities for the trend_forecast crate
//!
//! Dates are calendar dates with no time of day or timezone. The regression
//! feature is the proleptic Gregorian day ordinal, and projections step forward
//! by whole calendar months.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Months, NaiveDate};

/// Day ordinal of a date: 0001-01-01 is day 1 and every later day adds one
pub fn date_ordinal(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// Add `months` calendar months to a date
///
/// Days past the end of the target month clamp to its last day, so
/// January 31 plus one month is February 28 (or 29). Returns `None` when the
/// result is outside the supported date range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Create the projection dates that follow `last_date`
///
/// Step `k` is `last_date` plus `k` months, always measured from `last_date`
/// rather than from the previous step. A month-end anchor therefore keeps
/// landing on month ends: Jan 31 projects to Feb 28, Mar 31, Apr 30.
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Result<Vec<NaiveDate>> {
    (1..=horizon)
        .map(|step| {
            u32::try_from(step)
                .ok()
                .and_then(|months| add_months(last_date, months))
                .ok_or_else(|| {
                    ForecastError::DataError(format!(
                        "Cannot project {} month(s) past {}",
                        step, last_date
                    ))
                })
        })
        .collect()
}

/// Lenient parsing of the date formats found in spreadsheet exports
pub mod date_parser {
    use crate::error::{ForecastError, Result};
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%d.%m.%Y"];
    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    /// Parse a date, discarding any time of day
    pub fn parse_date(input: &str) -> Result<NaiveDate> {
        let trimmed = input.trim();

        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(date);
            }
        }

        for format in DATETIME_FORMATS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(datetime.date());
            }
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(datetime.date_naive());
        }

        Err(ForecastError::ParseError(format!(
            "Unrecognized date: '{}'",
            input
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_ordinal() {
        assert_eq!(date_ordinal(ymd(1, 1, 1)), 1);
        assert_eq!(date_ordinal(ymd(1970, 1, 1)), 719_163);
        assert_eq!(
            date_ordinal(ymd(2026, 2, 1)) - date_ordinal(ymd(2026, 1, 1)),
            31
        );
    }

    #[rstest]
    #[case(ymd(2026, 1, 15), 1, ymd(2026, 2, 15))]
    #[case(ymd(2026, 1, 31), 1, ymd(2026, 2, 28))]
    #[case(ymd(2024, 1, 31), 1, ymd(2024, 2, 29))]
    #[case(ymd(2026, 11, 30), 3, ymd(2027, 2, 28))]
    #[case(ymd(2026, 3, 1), 12, ymd(2027, 3, 1))]
    fn test_add_months(#[case] start: NaiveDate, #[case] months: u32, #[case] expected: NaiveDate) {
        assert_eq!(add_months(start, months), Some(expected));
    }

    #[test]
    fn test_future_dates_are_measured_from_the_anchor() {
        let dates = future_dates(ymd(2026, 1, 31), 3).unwrap();
        assert_eq!(dates, vec![ymd(2026, 2, 28), ymd(2026, 3, 31), ymd(2026, 4, 30)]);
    }

    #[test]
    fn test_future_dates_edge_cases() {
        assert!(future_dates(ymd(2026, 3, 1), 0).unwrap().is_empty());
        assert!(future_dates(NaiveDate::MAX, 1).is_err());
    }

    #[rstest]
    #[case("2023-01-15")]
    #[case("01/15/2023")]
    #[case("2023/01/15")]
    #[case("15.01.2023")]
    #[case(" 2023-01-15 ")]
    #[case("2023-01-15T14:30:45")]
    #[case("2023-01-15 14:30:45")]
    #[case("2023-01-15T14:30:45.250")]
    #[case("2023-01-15T14:30:45+02:00")]
    fn test_parse_date(#[case] input: &str) {
        assert_eq!(date_parser::parse_date(input).unwrap(), ymd(2023, 1, 15));
    }

    #[rstest]
    #[case("not-a-date")]
    #[case("")]
    #[case("2023-02-30")]
    fn test_parse_date_rejects(#[case] input: &str) {
        assert!(matches!(
            date_parser::parse_date(input),
            Err(ForecastError::ParseError(_))
        ));
    }
}
