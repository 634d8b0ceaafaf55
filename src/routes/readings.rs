use axum::{
    Json,
    extract::{Query, State},
    http::header::{self, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::ReceiverStream;
use utoipa::{IntoParams, ToSchema};

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::readings::{Reading, TIMESTAMP_FORMAT};

fn default_format() -> String {
    "json".to_string()
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingsResponse {
    /// Timestamp of the first reading (null if no data)
    pub start: Option<NaiveDateTime>,
    /// Timestamp of the last reading (null if no data)
    pub end: Option<NaiveDateTime>,
    /// Number of readings in the dataset
    pub count: usize,
    /// The full dataset in source order
    pub readings: Vec<Reading>,
    /// Data rows dropped during decoding (malformed timestamps or measures)
    pub rows_skipped: usize,
    /// When the snapshot was fetched (null before the first successful poll)
    pub fetched_at: Option<DateTime<Utc>>,
    /// True when the last poll cycle failed and this data is from an
    /// earlier cycle
    pub stale: bool,
}

fn determine_format(query_format: &str, headers: &HeaderMap) -> String {
    // Query parameter takes precedence
    if query_format != "json" {
        return query_format.to_lowercase();
    }

    // Check Accept header
    if let Some(accept) = headers.get(header::ACCEPT)
        && let Ok(accept_str) = accept.to_str()
    {
        if accept_str.contains("application/x-ndjson") {
            return "ndjson".to_string();
        }
        if accept_str.contains("text/csv") {
            return "csv".to_string();
        }
    }

    "json".to_string()
}

fn build_csv_response(readings: &[Reading]) -> AppResult<Response> {
    let (tx, rx) = tokio::sync::mpsc::channel::<Result<String, std::io::Error>>(100);

    let readings = readings.to_vec();

    tokio::spawn(async move {
        let _ = tx
            .send(Ok("timestamp,temperature,humidity\n".to_string()))
            .await;

        for reading in &readings {
            let row = format!(
                "{},{},{}\n",
                reading.timestamp.format(TIMESTAMP_FORMAT),
                reading.temperature,
                reading.humidity
            );
            if tx.send(Ok(row)).await.is_err() {
                break;
            }
        }
    });

    let stream = ReceiverStream::new(rx);
    let body = axum::body::Body::from_stream(stream);

    Response::builder()
        .header(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"))
        .body(body)
        .map_err(|e| AppError::Internal(e.to_string()))
}

fn build_ndjson_response(readings: &[Reading]) -> AppResult<Response> {
    let (tx, rx) = tokio::sync::mpsc::channel::<Result<String, std::io::Error>>(100);

    let readings = readings.to_vec();

    tokio::spawn(async move {
        for reading in &readings {
            let line = match serde_json::to_string(reading) {
                Ok(json) => format!("{json}\n"),
                Err(_) => continue,
            };
            if tx.send(Ok(line)).await.is_err() {
                break;
            }
        }
    });

    let stream = ReceiverStream::new(rx);
    let body = axum::body::Body::from_stream(stream);

    Response::builder()
        .header(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-ndjson"),
        )
        .body(body)
        .map_err(|e| AppError::Internal(e.to_string()))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReadingsQuery {
    /// Response format: json (default), ndjson, csv
    #[serde(default = "default_format")]
    pub format: String,
}

/// Export the full readings dataset
///
/// Returns every reading in the current snapshot, in source order.
/// Supports JSON, CSV, and NDJSON formats, negotiable via the `format`
/// query parameter or the Accept header.
#[utoipa::path(
    get,
    path = "/api/readings",
    params(ReadingsQuery),
    responses(
        (status = 200, description = "Readings retrieved successfully", body = ReadingsResponse),
        (status = 400, description = "Invalid query parameters"),
    ),
    tag = "readings"
)]
pub async fn get_readings(
    State(state): State<AppState>,
    Query(query): Query<ReadingsQuery>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let snapshot = state.snapshot.read().await.clone();

    let format = determine_format(&query.format, &headers);

    match format.as_str() {
        "csv" => build_csv_response(&snapshot.readings),
        "ndjson" => build_ndjson_response(&snapshot.readings),
        "json" => {
            let response = ReadingsResponse {
                start: snapshot.readings.first().map(|r| r.timestamp),
                end: snapshot.readings.last().map(|r| r.timestamp),
                count: snapshot.readings.len(),
                readings: snapshot.readings,
                rows_skipped: snapshot.rows_skipped,
                fetched_at: snapshot.fetched_at,
                stale: snapshot.stale,
            };
            Ok(Json(response).into_response())
        }
        other => Err(AppError::BadRequest(format!(
            "Unknown format '{other}', expected json, csv, or ndjson"
        ))),
    }
}
