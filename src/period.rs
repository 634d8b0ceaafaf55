//! Calendar-bucket selection over the in-memory readings list.
//!
//! A bucket is identified by a [`PeriodKind`] granularity and an anchor
//! date. All functions here are pure: same inputs, same outputs, no shared
//! state. Callers navigate buckets by feeding [`advance_period`] results
//! back in as the next anchor.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::readings::Reading;

/// Bucket granularity for dashboard filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    #[default]
    Daily,
    Monthly,
    Yearly,
}

impl std::fmt::Display for PeriodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

/// Select the readings belonging to the bucket at `anchor`.
///
/// Daily matches on (year, month, day), monthly on (year, month), yearly on
/// year alone. Input order is preserved and an empty result is a normal
/// state, not an error.
#[must_use]
pub fn filter_by_period(readings: &[Reading], kind: PeriodKind, anchor: NaiveDate) -> Vec<Reading> {
    readings
        .iter()
        .filter(|r| {
            let d = r.timestamp.date();
            match kind {
                PeriodKind::Daily => d == anchor,
                PeriodKind::Monthly => d.year() == anchor.year() && d.month() == anchor.month(),
                PeriodKind::Yearly => d.year() == anchor.year(),
            }
        })
        .copied()
        .collect()
}

/// The bucket's most recent reading, falling back to the dataset's global
/// last entry so the dashboard always has something to show, and `None`
/// only when the dataset itself is empty.
#[must_use]
pub fn latest_or_fallback(filtered: &[Reading], all: &[Reading]) -> Option<Reading> {
    filtered.last().or_else(|| all.last()).copied()
}

/// Shift the anchor one bucket forward (`+1`) or backward (`-1`).
///
/// Daily steps cross month and year boundaries via plain calendar
/// arithmetic. Monthly steps clamp the day-of-month to the target month's
/// last day when the anchor day overflows it (Jan 31 -> Feb 28/29). Yearly
/// steps keep month and day, clamping Feb 29 to Feb 28 on non-leap targets.
#[must_use]
pub fn advance_period(anchor: NaiveDate, kind: PeriodKind, direction: i32) -> NaiveDate {
    match kind {
        PeriodKind::Daily => anchor + TimeDelta::days(i64::from(direction)),
        PeriodKind::Monthly => {
            let step = Months::new(direction.unsigned_abs());
            let shifted = if direction >= 0 {
                anchor.checked_add_months(step)
            } else {
                anchor.checked_sub_months(step)
            };
            shifted.unwrap_or(anchor)
        }
        PeriodKind::Yearly => {
            let year = anchor.year() + direction;
            anchor
                .with_year(year)
                .or_else(|| NaiveDate::from_ymd_opt(year, anchor.month(), 28))
                .unwrap_or(anchor)
        }
    }
}

/// Human-readable label for the bucket at `anchor`.
///
/// Daily: "1 March 2024". Monthly: "March 2024". Yearly: "2024".
#[must_use]
pub fn period_label(kind: PeriodKind, anchor: NaiveDate) -> String {
    match kind {
        PeriodKind::Daily => anchor.format("%-d %B %Y").to_string(),
        PeriodKind::Monthly => anchor.format("%B %Y").to_string(),
        PeriodKind::Yearly => anchor.format("%Y").to_string(),
    }
}
