//! Unit tests for sheet row decoding.
//!
//! Run with: cargo test --test readings_test

use chrono::{Datelike, Timelike};

use sheetboard::readings::{Reading, ReadingError, parse_timestamp};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| (*c).to_string()).collect()
}

#[test]
fn parses_zero_padded_timestamps() {
    let ts = parse_timestamp("31/01/2024 09:05:00").unwrap();
    assert_eq!(
        (ts.day(), ts.month(), ts.year()),
        (31, 1, 2024)
    );
    assert_eq!((ts.hour(), ts.minute(), ts.second()), (9, 5, 0));
}

#[test]
fn parses_unpadded_timestamps() {
    let ts = parse_timestamp("1/3/2024 8:00:00").unwrap();
    assert_eq!((ts.day(), ts.month(), ts.year()), (1, 3, 2024));
    assert_eq!(ts.hour(), 8);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert!(parse_timestamp(" 01/03/2024 08:00:00 ").is_ok());
}

#[test]
fn rejects_malformed_timestamps() {
    for raw in [
        "not-a-date",
        "01/03/2024",
        "08:00:00",
        "01-03-2024 08:00:00",
        "2024/03/01 08:00:00",
        "32/01/2024 08:00:00",
        "01/13/2024 08:00:00",
        "01/03/2024 08:00:00 extra",
        "",
    ] {
        assert!(
            matches!(
                parse_timestamp(raw),
                Err(ReadingError::MalformedTimestamp(_))
            ),
            "expected failure for {raw:?}"
        );
    }
}

#[test]
fn decodes_positional_row() {
    let r = Reading::from_row(&row(&["15/03/2024 08:00:00", "25", "60"])).unwrap();
    assert_eq!(r.temperature, 25.0);
    assert_eq!(r.humidity, 60.0);
    assert_eq!(r.timestamp.date().day(), 15);
}

#[test]
fn decodes_fractional_measures() {
    let r = Reading::from_row(&row(&["15/03/2024 08:00:00", "25.4", "59.9"])).unwrap();
    assert_eq!(r.temperature, 25.4);
    assert_eq!(r.humidity, 59.9);
}

#[test]
fn extra_cells_are_ignored() {
    let r = Reading::from_row(&row(&["15/03/2024 08:00:00", "25", "60", "note"])).unwrap();
    assert_eq!(r.humidity, 60.0);
}

#[test]
fn short_rows_are_rejected() {
    let err = Reading::from_row(&row(&["15/03/2024 08:00:00", "25"])).unwrap_err();
    assert!(matches!(err, ReadingError::ShortRow(2)));
}

#[test]
fn non_numeric_measures_are_rejected() {
    let err = Reading::from_row(&row(&["15/03/2024 08:00:00", "warm", "60"])).unwrap_err();
    assert!(matches!(
        err,
        ReadingError::MalformedValue {
            field: "temperature",
            ..
        }
    ));

    let err = Reading::from_row(&row(&["15/03/2024 08:00:00", "25", "humid"])).unwrap_err();
    assert!(matches!(
        err,
        ReadingError::MalformedValue { field: "humidity", .. }
    ));
}
