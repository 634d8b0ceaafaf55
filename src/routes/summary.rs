use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::common::AppState;
use crate::error::AppResult;
use crate::period::{PeriodKind, filter_by_period, period_label};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SummaryQuery {
    /// Bucket granularity: daily (default), monthly, or yearly
    #[serde(default)]
    #[param(inline)]
    pub period: PeriodKind,
    /// Anchor date (YYYY-MM-DD). Defaults to the date of the most recent
    /// reading, or today when no data has been fetched yet.
    pub anchor: Option<NaiveDate>,
}

/// Min/avg/max over one measure within a bucket. All fields are null when
/// the bucket is empty.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MeasureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub period: PeriodKind,
    pub anchor: NaiveDate,
    pub label: String,
    /// Number of readings in the bucket
    pub count: usize,
    pub temperature: MeasureSummary,
    pub humidity: MeasureSummary,
    pub fetched_at: Option<DateTime<Utc>>,
    pub stale: bool,
}

/// Compute min/avg/max over a slice of measure values.
#[must_use]
pub fn summarize(values: &[f64]) -> MeasureSummary {
    if values.is_empty() {
        return MeasureSummary {
            min: None,
            avg: None,
            max: None,
        };
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
        sum += v;
    }

    MeasureSummary {
        min: Some(min),
        avg: Some(sum / values.len() as f64),
        max: Some(max),
    }
}

/// Summary statistics for one period bucket
///
/// Returns min/avg/max for temperature and humidity over the readings in
/// the selected bucket, computed in memory on every request.
#[utoipa::path(
    get,
    path = "/api/summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Summary retrieved successfully", body = SummaryResponse),
        (status = 400, description = "Invalid period or anchor"),
    ),
    tag = "summary"
)]
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> AppResult<Json<SummaryResponse>> {
    let snapshot = state.snapshot.read().await.clone();

    let kind = query.period;
    let anchor = query
        .anchor
        .or_else(|| snapshot.readings.last().map(|r| r.timestamp.date()))
        .unwrap_or_else(|| Local::now().date_naive());

    let readings = filter_by_period(&snapshot.readings, kind, anchor);

    let temperatures: Vec<f64> = readings.iter().map(|r| r.temperature).collect();
    let humidities: Vec<f64> = readings.iter().map(|r| r.humidity).collect();

    Ok(Json(SummaryResponse {
        period: kind,
        anchor,
        label: period_label(kind, anchor),
        count: readings.len(),
        temperature: summarize(&temperatures),
        humidity: summarize(&humidities),
        fetched_at: snapshot.fetched_at,
        stale: snapshot.stale,
    }))
}
