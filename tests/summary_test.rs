//! Unit tests for per-bucket summary statistics.
//!
//! Run with: cargo test --test summary_test

use chrono::NaiveDate;

use sheetboard::period::{PeriodKind, filter_by_period};
use sheetboard::readings::{Reading, parse_timestamp};
use sheetboard::routes::summary::summarize;

fn reading(ts: &str, temperature: f64, humidity: f64) -> Reading {
    Reading {
        timestamp: parse_timestamp(ts).unwrap(),
        temperature,
        humidity,
    }
}

#[test]
fn summarize_computes_min_avg_max() {
    let s = summarize(&[20.0, 25.0, 18.0]);
    assert_eq!(s.min, Some(18.0));
    assert_eq!(s.max, Some(25.0));
    assert_eq!(s.avg, Some(21.0));
}

#[test]
fn summarize_single_value() {
    let s = summarize(&[42.5]);
    assert_eq!(s.min, Some(42.5));
    assert_eq!(s.avg, Some(42.5));
    assert_eq!(s.max, Some(42.5));
}

#[test]
fn summarize_empty_bucket_is_all_null() {
    let s = summarize(&[]);
    assert_eq!(s.min, None);
    assert_eq!(s.avg, None);
    assert_eq!(s.max, None);
}

#[test]
fn bucket_summary_only_covers_filtered_readings() {
    let rs = vec![
        reading("01/03/2024 08:00:00", 20.0, 50.0),
        reading("15/03/2024 08:00:00", 25.0, 60.0),
        reading("01/04/2024 08:00:00", 99.0, 45.0),
    ];

    let anchor = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let filtered = filter_by_period(&rs, PeriodKind::Monthly, anchor);
    let temps: Vec<f64> = filtered.iter().map(|r| r.temperature).collect();

    let s = summarize(&temps);
    assert_eq!(s.min, Some(20.0));
    assert_eq!(s.max, Some(25.0));
    assert_eq!(s.avg, Some(22.5));
}
