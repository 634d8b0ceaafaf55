use serde::{Deserialize, Serialize};

/// Response from `GET /{sheet_id}/values/{sheet_name}`.
///
/// `values` is row-major: row 0 is the header row, data rows follow as
/// positional cell strings. The API omits `values` entirely for an empty
/// sheet, hence the default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default, rename = "majorDimension")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl ValueRange {
    /// Data rows with the header row stripped.
    ///
    /// Returns `None` when the sheet has no data rows beyond the header
    /// (or no rows at all), which callers treat as an empty dataset.
    #[must_use]
    pub fn data_rows(&self) -> Option<&[Vec<String>]> {
        if self.values.len() < 2 {
            return None;
        }
        Some(&self.values[1..])
    }
}
