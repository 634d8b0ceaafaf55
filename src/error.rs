use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Sheets API error: {0}")]
    SheetsApi(String),

    #[error("Sheet returned no data rows")]
    EmptyDataset,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Self::SheetsApi(msg) => {
                tracing::error!("Sheets API error: {msg}");
                (StatusCode::BAD_GATEWAY, format!("Sheets API error: {msg}"))
            }
            Self::EmptyDataset => (
                StatusCode::BAD_GATEWAY,
                "Sheet returned no data rows".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
