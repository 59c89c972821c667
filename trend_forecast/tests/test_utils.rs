use chrono::NaiveDate;
use rstest::rstest;
use trend_forecast::utils::{add_months, date_ordinal, date_parser, future_dates};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_date_ordinal_is_monotonic() {
    let mut previous = date_ordinal(ymd(2023, 12, 30));
    let mut date = ymd(2023, 12, 31);
    for _ in 0..400 {
        let current = date_ordinal(date);
        assert_eq!(current, previous + 1);
        previous = current;
        date = date.succ_opt().unwrap();
    }
}

#[rstest]
#[case(ymd(2024, 2, 29), 12, ymd(2025, 2, 28))]
#[case(ymd(2024, 8, 31), 1, ymd(2024, 9, 30))]
#[case(ymd(2024, 12, 15), 1, ymd(2025, 1, 15))]
fn test_add_months_clamps(#[case] start: NaiveDate, #[case] months: u32, #[case] expected: NaiveDate) {
    assert_eq!(add_months(start, months).unwrap(), expected);
}

#[test]
fn test_future_dates() {
    let dates = future_dates(ymd(2026, 3, 1), 4).unwrap();
    assert_eq!(
        dates,
        vec![ymd(2026, 4, 1), ymd(2026, 5, 1), ymd(2026, 6, 1), ymd(2026, 7, 1)]
    );

    // Leap day anchors keep their day where it exists
    let dates = future_dates(ymd(2024, 2, 29), 2).unwrap();
    assert_eq!(dates, vec![ymd(2024, 3, 29), ymd(2024, 4, 29)]);
}

#[test]
fn test_date_parser() {
    // Test various date formats
    let parsed_iso = date_parser::parse_date("2023-01-15").unwrap();
    assert_eq!(parsed_iso.to_string(), "2023-01-15");

    let parsed_us = date_parser::parse_date("01/15/2023").unwrap();
    assert_eq!(parsed_us, parsed_iso);

    let parsed_datetime = date_parser::parse_date("2023-01-15T14:30:45").unwrap();
    assert_eq!(parsed_datetime, parsed_iso);

    // Test invalid date
    assert!(date_parser::parse_date("not-a-date").is_err());
}
