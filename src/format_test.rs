use std::time::Duration;

use super::*;

#[test]
fn duration_under_an_hour() {
    assert_eq!(duration(Duration::from_secs(150)), "2:30");
    assert_eq!(duration(Duration::from_secs(59)), "0:59");
    assert_eq!(duration(Duration::from_secs(0)), "0:00");
}

#[test]
fn duration_over_an_hour() {
    assert_eq!(duration(Duration::from_secs(3661)), "1:01:01");
    assert_eq!(duration(Duration::from_secs(3600)), "1:00:00");
    assert_eq!(duration(Duration::from_secs(36_000 + 123)), "10:02:03");
}

#[test]
fn iso8601_minutes_and_seconds() {
    assert_eq!(parse_iso8601_duration("PT2M30S"), Some(Duration::from_secs(150)));
    assert_eq!(parse_iso8601_duration("PT1H1M1S"), Some(Duration::from_secs(3661)));
    assert_eq!(parse_iso8601_duration("PT45S"), Some(Duration::from_secs(45)));
}

#[test]
fn iso8601_days_and_bare_markers() {
    assert_eq!(parse_iso8601_duration("P1DT2H"), Some(Duration::from_secs(93_600)));
    // Live streams report a zero-day duration.
    assert_eq!(parse_iso8601_duration("P0D"), Some(Duration::ZERO));
    assert_eq!(parse_iso8601_duration("PT"), Some(Duration::ZERO));
}

#[test]
fn iso8601_rejects_malformed_input() {
    assert_eq!(parse_iso8601_duration("2M30S"), None);
    assert_eq!(parse_iso8601_duration("PT2X"), None);
    assert_eq!(parse_iso8601_duration("PT30"), None);
    assert_eq!(parse_iso8601_duration("P2M"), None); // months unsupported
    assert_eq!(parse_iso8601_duration(""), None);
}

#[test]
fn count_inserts_thousands_separators() {
    assert_eq!(count(1_000_000), "1,000,000");
    assert_eq!(count(0), "0");
    assert_eq!(count(999), "999");
    assert_eq!(count(1_000), "1,000");
    assert_eq!(count(12_345_678), "12,345,678");
}

#[test]
fn rating_rounds_to_one_decimal() {
    assert_eq!(rating(7.66), "7.7");
    assert_eq!(rating(8.0), "8.0");
    assert_eq!(rating(0.04), "0.0");
}
