use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::common::AppState;
use crate::error::AppResult;
use crate::period::{PeriodKind, advance_period, filter_by_period, latest_or_fallback, period_label};
use crate::readings::Reading;

#[derive(Debug, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Bucket granularity: daily (default), monthly, or yearly
    #[serde(default)]
    #[param(inline)]
    pub period: PeriodKind,
    /// Anchor date (YYYY-MM-DD). Defaults to the date of the most recent
    /// reading, or today when no data has been fetched yet.
    pub anchor: Option<NaiveDate>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    /// Granularity the readings were bucketed at
    pub period: PeriodKind,
    /// Anchor date the bucket was selected for
    pub anchor: NaiveDate,
    /// Human-readable bucket label, e.g. "March 2024"
    pub label: String,
    /// Anchor for the previous bucket (echo back to navigate)
    pub prev_anchor: NaiveDate,
    /// Anchor for the next bucket (echo back to navigate)
    pub next_anchor: NaiveDate,
    /// Most recent reading in the bucket, falling back to the dataset's
    /// last entry; null only when no data exists at all
    pub latest: Option<Reading>,
    /// Readings in the selected bucket, in source order
    pub readings: Vec<Reading>,
    /// When the snapshot was fetched (null before the first successful poll)
    pub fetched_at: Option<DateTime<Utc>>,
    /// True when the last poll cycle failed and this data is from an
    /// earlier cycle
    pub stale: bool,
}

/// Dashboard state for one period bucket
///
/// Returns the readings belonging to the bucket at the anchor date, the
/// latest reading to headline, the bucket label, and the prev/next anchors
/// for period navigation. Recomputed from the in-memory snapshot on every
/// request.
#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard state retrieved successfully", body = DashboardResponse),
        (status = 400, description = "Invalid period or anchor"),
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let snapshot = state.snapshot.read().await.clone();

    let kind = query.period;
    let anchor = query
        .anchor
        .or_else(|| snapshot.readings.last().map(|r| r.timestamp.date()))
        .unwrap_or_else(|| Local::now().date_naive());

    let readings = filter_by_period(&snapshot.readings, kind, anchor);
    let latest = latest_or_fallback(&readings, &snapshot.readings);

    Ok(Json(DashboardResponse {
        period: kind,
        anchor,
        label: period_label(kind, anchor),
        prev_anchor: advance_period(anchor, kind, -1),
        next_anchor: advance_period(anchor, kind, 1),
        latest,
        readings,
        fetched_at: snapshot.fetched_at,
        stale: snapshot.stale,
    }))
}
