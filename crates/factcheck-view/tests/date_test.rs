//! DateFormatter parsing and formatting.

use factcheck_core::config::DisplayConfig;
use factcheck_view::date::{parse_date, DEFAULT_DATE_FORMAT};
use factcheck_view::DateFormatter;

#[test]
fn iso_date_formats_day_month_year() {
    assert_eq!(DateFormatter::default().format(Some("2024-01-15")), "15/01/2024");
}

#[test]
fn invalid_and_absent_dates_are_empty() {
    let formatter = DateFormatter::default();
    assert_eq!(formatter.format(Some("not-a-date")), "");
    assert_eq!(formatter.format(Some("")), "");
    assert_eq!(formatter.format(Some("2024-02-30")), "");
    assert_eq!(formatter.format(None), "");
}

#[test]
fn timestamps_keep_their_own_calendar_date() {
    let formatter = DateFormatter::default();
    assert_eq!(formatter.format(Some("2024-01-15T23:30:00+02:00")), "15/01/2024");
    assert_eq!(formatter.format(Some("2024-01-15T10:00:00Z")), "15/01/2024");
    assert_eq!(formatter.format(Some("2024-01-15T10:00:00.123")), "15/01/2024");
    assert_eq!(formatter.format(Some("2024-01-15 08:05:00")), "15/01/2024");
    assert_eq!(formatter.format(Some("2024-01-15T10:00Z")), "15/01/2024");
    assert_eq!(formatter.format(Some("2024-01-15T10:00:00+0200")), "15/01/2024");
}

#[test]
fn other_common_shapes_parse() {
    let formatter = DateFormatter::default();
    assert_eq!(formatter.format(Some("Mon, 15 Jan 2024 10:00:00 GMT")), "15/01/2024");
    assert_eq!(formatter.format(Some("2024/01/15")), "15/01/2024");
    assert_eq!(formatter.format(Some("15/01/2024")), "15/01/2024");
    assert_eq!(formatter.format(Some("January 15, 2024")), "15/01/2024");
    assert_eq!(formatter.format(Some("  2024-01-15  ")), "15/01/2024");
}

#[test]
fn caller_owns_the_output_pattern() {
    let formatter = DateFormatter::from_config(&DisplayConfig {
        date_format: "%Y-%m-%d".to_string(),
        ..DisplayConfig::default()
    });
    assert_eq!(formatter.format(Some("15/01/2024")), "2024-01-15");
}

#[test]
fn unusable_pattern_falls_back_to_default() {
    assert_eq!(DateFormatter::new("%Q").pattern(), DEFAULT_DATE_FORMAT);
    assert_eq!(DateFormatter::new("").pattern(), DEFAULT_DATE_FORMAT);
    assert_eq!(DateFormatter::new("%d.%m.%Y").pattern(), "%d.%m.%Y");
}

#[test]
fn time_specifiers_fall_back_to_default() {
    let formatter = DateFormatter::new("%d/%m/%Y %H:%M");
    assert_eq!(formatter.pattern(), DEFAULT_DATE_FORMAT);
    assert_eq!(formatter.format(Some("2024-01-15")), "15/01/2024");

    let formatter = DateFormatter::from_config(&DisplayConfig {
        date_format: "%Y-%m-%d %z".to_string(),
        ..DisplayConfig::default()
    });
    assert_eq!(formatter.format(Some("2024-01-15T10:00:00+02:00")), "15/01/2024");
}

#[test]
fn parse_date_returns_calendar_date() {
    let date = parse_date("2024-01-15").unwrap();
    assert_eq!(date.to_string(), "2024-01-15");
    assert!(parse_date("yesterday").is_none());
}
