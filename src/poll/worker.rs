use chrono::Utc;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::readings::{Reading, ReadingsSnapshot};

/// Fetch the sheet, decode its data rows, and replace the shared snapshot.
///
/// Rows that fail to decode (malformed timestamp, non-numeric measures,
/// wrong arity) are skipped with a warning; a single bad row never aborts
/// the cycle. The snapshot is only replaced on success, so a failed cycle
/// leaves the previously displayed data intact.
///
/// # Errors
///
/// Returns `AppError::SheetsApi` on transport or decode failures from the
/// collaborator, and `AppError::EmptyDataset` when the sheet has no data
/// rows beyond the header.
pub async fn poll_readings(state: &AppState) -> AppResult<()> {
    let value_range = state.sheets.get_values().await?;

    let Some(rows) = value_range.data_rows() else {
        return Err(AppError::EmptyDataset);
    };

    let mut readings = Vec::with_capacity(rows.len());
    let mut rows_skipped = 0usize;

    for (i, row) in rows.iter().enumerate() {
        match Reading::from_row(row) {
            Ok(reading) => readings.push(reading),
            Err(e) => {
                rows_skipped += 1;
                // Sheet rows are 1-based and row 1 is the header
                tracing::warn!(sheet_row = i + 2, error = %e, "Skipping undecodable row");
            }
        }
    }

    let count = readings.len();
    let snapshot = ReadingsSnapshot {
        readings,
        fetched_at: Some(Utc::now()),
        stale: false,
        rows_skipped,
    };

    *state.snapshot.write().await = snapshot;

    tracing::debug!(readings = count, skipped = rows_skipped, "Snapshot replaced");
    Ok(())
}

/// Flag the current snapshot as stale after a failed poll cycle.
///
/// A snapshot that has never been filled is left untouched; there is
/// nothing stale to report until a first successful fetch.
pub async fn mark_stale(state: &AppState) {
    let mut snapshot = state.snapshot.write().await;
    if snapshot.fetched_at.is_some() && !snapshot.stale {
        snapshot.stale = true;
        tracing::warn!("Serving stale readings until the next successful poll");
    }
}
