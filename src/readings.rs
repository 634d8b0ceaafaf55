use chrono::{NaiveDateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Textual timestamp layout used by the sheet, e.g. `31/01/2024 10:00:00`.
/// Day and month are 1-based and may be zero-padded or not.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// One sensor observation decoded from a sheet row.
///
/// Timestamps are local wall-clock time as written by the data logger;
/// no timezone normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    /// Degrees; the display layer appends a unit symbol.
    pub temperature: f64,
    /// Percentage points.
    pub humidity: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    #[error("Malformed timestamp: {0:?}")]
    MalformedTimestamp(String),

    #[error("Row has {0} cells, expected timestamp, temperature, humidity")]
    ShortRow(usize),

    #[error("Malformed {field} value: {raw:?}")]
    MalformedValue { field: &'static str, raw: String },
}

/// Parse a sheet timestamp cell.
///
/// # Errors
///
/// Returns `ReadingError::MalformedTimestamp` when `raw` does not decompose
/// into a `DD/MM/YYYY` date and an `HH:MM:SS` time with numeric components.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ReadingError> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| ReadingError::MalformedTimestamp(raw.to_string()))
}

impl Reading {
    /// Decode one positional data row: `[timestamp, temperature, humidity]`.
    ///
    /// Cells beyond the third are ignored; the sheet occasionally carries
    /// trailing annotation columns.
    ///
    /// # Errors
    ///
    /// Returns `ReadingError` when the row is too short, the timestamp does
    /// not parse, or a measure cell is not numeric.
    pub fn from_row(row: &[String]) -> Result<Self, ReadingError> {
        if row.len() < 3 {
            return Err(ReadingError::ShortRow(row.len()));
        }

        let timestamp = parse_timestamp(&row[0])?;
        let temperature: f64 = row[1]
            .trim()
            .parse()
            .map_err(|_| ReadingError::MalformedValue {
                field: "temperature",
                raw: row[1].clone(),
            })?;
        let humidity: f64 = row[2]
            .trim()
            .parse()
            .map_err(|_| ReadingError::MalformedValue {
                field: "humidity",
                raw: row[2].clone(),
            })?;

        Ok(Self {
            timestamp,
            temperature,
            humidity,
        })
    }
}

/// In-memory dataset produced by one poll cycle.
///
/// Replaced wholesale on every successful poll, never patched. `stale` is
/// set when the most recent poll cycle failed and the readings shown are
/// from an earlier cycle.
#[derive(Debug, Clone, Default)]
pub struct ReadingsSnapshot {
    pub readings: Vec<Reading>,
    pub fetched_at: Option<chrono::DateTime<Utc>>,
    pub stale: bool,
    /// Data rows dropped during decoding in the producing cycle.
    pub rows_skipped: usize,
}
