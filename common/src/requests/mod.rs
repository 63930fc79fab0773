//! Request shapes for the column-info endpoint.
//!
//! The request itself travels as a multipart form (the file bytes plus a
//! couple of flag fields), so the struct here describes the non-file fields
//! and owns the field-name constants the frontend uses when assembling the
//! form data.

/// Multipart field carrying the uploaded file bytes.
pub const COLUMNS_FILE_FIELD: &str = "columns_file";
/// Multipart flag field; present with value [`CHECKBOX_ON`] when the first
/// row holds column names, absent otherwise.
pub const HAS_COLUMN_NAMES_FIELD: &str = "has_column_names";
/// Multipart field naming the worksheet to analyze; absent for flat files.
pub const WORKSHEET_SELECTED_FIELD: &str = "worksheet_selected";
/// Value an HTML form posts for a checked checkbox.
pub const CHECKBOX_ON: &str = "on";

/// Non-file fields of a column-metadata request.
///
/// `has_column_names` defaults to true; `worksheet` is omitted from the
/// request entirely when `None` rather than sent as an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnsInfoRequest {
    pub has_column_names: bool,
    pub worksheet: Option<String>,
}

impl Default for ColumnsInfoRequest {
    fn default() -> Self {
        Self {
            has_column_names: true,
            worksheet: None,
        }
    }
}

impl ColumnsInfoRequest {
    /// The multipart fields to append alongside the file, in order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if self.has_column_names {
            fields.push((HAS_COLUMN_NAMES_FIELD, CHECKBOX_ON.to_string()));
        }
        if let Some(worksheet) = &self.worksheet {
            fields.push((WORKSHEET_SELECTED_FIELD, worksheet.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_header_row_and_no_worksheet() {
        let request = ColumnsInfoRequest::default();
        assert_eq!(request.fields(), vec![("has_column_names", "on".to_string())]);
    }

    #[test]
    fn worksheet_is_sent_when_present() {
        let request = ColumnsInfoRequest {
            has_column_names: true,
            worksheet: Some("Sheet2".to_string()),
        };
        assert_eq!(
            request.fields(),
            vec![
                ("has_column_names", "on".to_string()),
                ("worksheet_selected", "Sheet2".to_string()),
            ]
        );
    }

    #[test]
    fn header_flag_is_omitted_when_false() {
        let request = ColumnsInfoRequest {
            has_column_names: false,
            worksheet: None,
        };
        assert!(request.fields().is_empty());
    }
}
