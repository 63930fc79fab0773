use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Column metadata for an uploaded tabular file, as returned by the
/// column-info endpoint.
///
/// The server answers the metadata request with one of two shapes: the
/// column description below, or a bare `{"message": ...}` object when the
/// file could not be analyzed (bad extension, unreadable worksheet, and so
/// on). Both arrive with HTTP 200, so consumers must check [`is_error`]
/// before trusting any other field.
///
/// `column_list` preserves the column order of the file; widgets built from
/// it must keep that order. `column_counts` (distinct values per column) is
/// only populated when the caller asked for the sidecar-template view, and
/// `worksheet_names` only for multi-sheet workbook formats.
///
/// [`is_error`]: ColumnsInfo::is_error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnsInfo {
    /// Name of the file the server analyzed, echoed back.
    pub columns_file: Option<String>,
    /// Column names in file order.
    pub column_list: Option<Vec<String>>,
    /// Count of distinct values observed per column name.
    pub column_counts: Option<HashMap<String, u64>>,
    /// The worksheet actually analyzed (workbook files only).
    pub worksheet_selected: Option<String>,
    /// All worksheet names in the workbook (workbook files only).
    pub worksheet_names: Option<Vec<String>>,
    /// Present when the request logically failed, regardless of HTTP status.
    pub message: Option<String>,
}

impl ColumnsInfo {
    /// True when the server reported a logical failure. The remaining
    /// fields must be treated as absent in that case.
    pub fn is_error(&self) -> bool {
        self.message.is_some()
    }

    /// Column names in file order, empty when the server sent none.
    pub fn columns(&self) -> &[String] {
        self.column_list.as_deref().unwrap_or_default()
    }

    /// Worksheet names, empty for flat text files.
    pub fn worksheets(&self) -> &[String] {
        self.worksheet_names.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_response() {
        let info: ColumnsInfo = serde_json::from_str(
            r#"{
                "columns_file": "events.tsv",
                "column_list": ["onset", "duration", "trial_type"],
                "column_counts": {"onset": 100, "duration": 3, "trial_type": 4},
                "worksheet_selected": null,
                "worksheet_names": null
            }"#,
        )
        .unwrap();
        assert!(!info.is_error());
        assert_eq!(info.columns(), ["onset", "duration", "trial_type"]);
        assert_eq!(info.column_counts.as_ref().unwrap()["trial_type"], 4);
        assert!(info.worksheets().is_empty());
    }

    #[test]
    fn deserializes_workbook_response() {
        let info: ColumnsInfo = serde_json::from_str(
            r#"{
                "column_list": ["a", "b"],
                "worksheet_selected": "Sheet1",
                "worksheet_names": ["Sheet1", "Sheet2"]
            }"#,
        )
        .unwrap();
        assert_eq!(info.worksheets(), ["Sheet1", "Sheet2"]);
        assert_eq!(info.worksheet_selected.as_deref(), Some("Sheet1"));
    }

    #[test]
    fn bare_message_is_an_error() {
        let info: ColumnsInfo =
            serde_json::from_str(r#"{"message": "File extension not recognized"}"#).unwrap();
        assert!(info.is_error());
        assert!(info.columns().is_empty());
        assert!(info.worksheets().is_empty());
    }
}
