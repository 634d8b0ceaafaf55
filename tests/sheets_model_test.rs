//! Unit tests for the sheet values response model.
//!
//! Run with: cargo test --test sheets_model_test

use sheetboard::sheets::models::ValueRange;

#[test]
fn deserializes_values_response() {
    let json = r#"{
        "range": "Sheet1!A1:C4",
        "majorDimension": "ROWS",
        "values": [
            ["Timestamp", "Temperature", "Humidity"],
            ["01/03/2024 08:00:00", "20", "50"],
            ["15/03/2024 08:00:00", "25", "60"],
            ["01/04/2024 08:00:00", "18", "45"]
        ]
    }"#;

    let range: ValueRange = serde_json::from_str(json).unwrap();
    assert_eq!(range.range.as_deref(), Some("Sheet1!A1:C4"));

    let rows = range.data_rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "01/03/2024 08:00:00");
}

#[test]
fn missing_values_field_means_no_data() {
    let json = r#"{"range": "Sheet1!A1:C1", "majorDimension": "ROWS"}"#;
    let range: ValueRange = serde_json::from_str(json).unwrap();
    assert!(range.data_rows().is_none());
}

#[test]
fn header_only_sheet_means_no_data() {
    let json = r#"{"values": [["Timestamp", "Temperature", "Humidity"]]}"#;
    let range: ValueRange = serde_json::from_str(json).unwrap();
    assert!(range.data_rows().is_none());
}

#[test]
fn ragged_rows_survive_deserialization() {
    // The API trims trailing empty cells, so rows can be ragged; decoding
    // failures are handled per-row downstream, not here.
    let json = r#"{"values": [
        ["Timestamp", "Temperature", "Humidity"],
        ["01/03/2024 08:00:00", "20"]
    ]}"#;
    let range: ValueRange = serde_json::from_str(json).unwrap();
    let rows = range.data_rows().unwrap();
    assert_eq!(rows[0].len(), 2);
}
