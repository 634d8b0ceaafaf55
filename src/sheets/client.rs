use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::sheets::models::ValueRange;

pub struct SheetsClient {
    http_client: Client,
    base_url: String,
    sheet_id: String,
    sheet_name: String,
    api_key: String,
}

impl SheetsClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.sheets_base_url.clone(),
            sheet_id: config.sheet_id.clone(),
            sheet_name: config.sheet_name.clone(),
            api_key: config.sheets_api_key.clone(),
        }
    }

    /// Fetch the full cell grid for the configured sheet.
    ///
    /// The API key travels as a query parameter; it is never logged.
    ///
    /// # Errors
    ///
    /// Returns `AppError::SheetsApi` if the request fails or returns an
    /// error status. A 429 is reported distinctly so the poll scheduler
    /// can back off.
    pub async fn get_values(&self) -> AppResult<ValueRange> {
        let url = format!(
            "{}/{}/values/{}",
            self.base_url, self.sheet_id, self.sheet_name
        );

        let response = self
            .http_client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::SheetsApi(format!("Request failed: {e}")))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AppError::SheetsApi("Rate limited (429)".to_string()));
        }

        if !response.status().is_success() {
            return Err(AppError::SheetsApi(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::SheetsApi(format!("Failed to get response text: {e}")))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse sheet values response"
            );
            AppError::SheetsApi(format!("Failed to parse response: {e}"))
        })
    }
}
