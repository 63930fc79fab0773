//! Static parameterization of the upload forms: one [`FormConfig`] per
//! document type, plus the per-action policies (which column widget to
//! show, which option checkboxes apply, when a file may be omitted).

use common::model::action::ProcessAction;

use crate::api;
use crate::components::columns::DisplayMode;
use crate::util::files;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Events,
    Sidecars,
    Spreadsheets,
    Schemas,
    Strings,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub kind: ToolKind,
    pub title: &'static str,
    pub endpoint: &'static str,
    /// Multipart field the uploaded file travels in.
    pub file_field: &'static str,
    pub extensions: &'static [&'static str],
    pub extension_error: &'static str,
    pub missing_file_error: &'static str,
    pub actions: &'static [ProcessAction],
    /// Workbook support: worksheet dropdown plus header-row toggle.
    pub has_worksheets: bool,
    /// Tag-columns text box (spreadsheets only).
    pub has_tag_columns: bool,
    pub has_schema_select: bool,
}

pub const EVENTS_FORM: FormConfig = FormConfig {
    kind: ToolKind::Events,
    title: "Events",
    endpoint: api::EVENTS_SUBMIT_ROUTE,
    file_field: "events_file",
    extensions: files::TEXT_FILE_EXTENSIONS,
    extension_error: "Please upload a tsv events file (.tsv, .txt)",
    missing_file_error: "Events file is not specified.",
    actions: &[
        ProcessAction::Validate,
        ProcessAction::Assemble,
        ProcessAction::GenerateSidecar,
        ProcessAction::Remodel,
        ProcessAction::Search,
    ],
    has_worksheets: false,
    has_tag_columns: false,
    has_schema_select: true,
};

pub const SIDECARS_FORM: FormConfig = FormConfig {
    kind: ToolKind::Sidecars,
    title: "Sidecars",
    endpoint: api::SIDECARS_SUBMIT_ROUTE,
    file_field: "sidecar_file",
    extensions: files::SIDECAR_EXTENSIONS,
    extension_error: "Please upload a JSON sidecar file (.json)",
    missing_file_error: "Sidecar file is not specified.",
    actions: &[
        ProcessAction::Validate,
        ProcessAction::ToLong,
        ProcessAction::ToShort,
        ProcessAction::ExtractSpreadsheet,
        ProcessAction::MergeSpreadsheet,
    ],
    has_worksheets: false,
    has_tag_columns: false,
    has_schema_select: true,
};

pub const SPREADSHEETS_FORM: FormConfig = FormConfig {
    kind: ToolKind::Spreadsheets,
    title: "Spreadsheets",
    endpoint: api::SPREADSHEETS_SUBMIT_ROUTE,
    file_field: "spreadsheet_file",
    extensions: files::SPREADSHEET_EXTENSIONS,
    extension_error: "Please upload a spreadsheet file (.xlsx, .tsv, .txt)",
    missing_file_error: "Spreadsheet is not specified.",
    actions: &[
        ProcessAction::Validate,
        ProcessAction::ToLong,
        ProcessAction::ToShort,
    ],
    has_worksheets: true,
    has_tag_columns: true,
    has_schema_select: true,
};

pub const SCHEMAS_FORM: FormConfig = FormConfig {
    kind: ToolKind::Schemas,
    title: "Schemas",
    endpoint: api::SCHEMAS_SUBMIT_ROUTE,
    file_field: "schema_file",
    extensions: files::SCHEMA_EXTENSIONS,
    extension_error: "Please upload a schema file (.xml, .mediawiki)",
    missing_file_error: "Schema file is not specified.",
    actions: &[ProcessAction::Validate, ProcessAction::ConvertSchema],
    has_worksheets: false,
    has_tag_columns: false,
    has_schema_select: false,
};

/// Which column widget a form shows for an action, if any.
pub fn display_mode_for(kind: ToolKind, action: ProcessAction) -> Option<DisplayMode> {
    match kind {
        ToolKind::Events => match action {
            ProcessAction::GenerateSidecar => Some(DisplayMode::Categorical),
            _ => Some(DisplayMode::Flat),
        },
        ToolKind::Spreadsheets => Some(DisplayMode::Indexed),
        ToolKind::Sidecars | ToolKind::Schemas | ToolKind::Strings => None,
    }
}

/// Option checkboxes applicable to an action. A hidden option is also
/// unchecked, so it never leaks into the submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionOptions {
    pub check_for_warnings: bool,
    pub expand_defs: bool,
}

pub fn options_for(action: ProcessAction) -> ActionOptions {
    match action {
        ProcessAction::Validate => ActionOptions {
            check_for_warnings: true,
            expand_defs: false,
        },
        ProcessAction::Assemble | ProcessAction::ToLong | ProcessAction::ToShort => {
            ActionOptions {
                check_for_warnings: false,
                expand_defs: true,
            }
        }
        _ => ActionOptions::default(),
    }
}

/// Whether submission requires an uploaded file. Merging a sidecar into a
/// spreadsheet works from the spreadsheet side alone.
pub fn file_required(kind: ToolKind, action: ProcessAction) -> bool {
    !(kind == ToolKind::Sidecars && action == ProcessAction::MergeSpreadsheet)
}

/// Whether the schema selector applies to an action. Generating a sidecar
/// template is schema-independent.
pub fn schema_needed(action: ProcessAction) -> bool {
    action != ProcessAction::GenerateSidecar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_sidecar_uses_the_categorical_widget() {
        assert_eq!(
            display_mode_for(ToolKind::Events, ProcessAction::GenerateSidecar),
            Some(DisplayMode::Categorical)
        );
    }

    #[test]
    fn other_events_actions_use_the_flat_widget() {
        for action in [
            ProcessAction::Validate,
            ProcessAction::Assemble,
            ProcessAction::Remodel,
            ProcessAction::Search,
        ] {
            assert_eq!(
                display_mode_for(ToolKind::Events, action),
                Some(DisplayMode::Flat)
            );
        }
    }

    #[test]
    fn spreadsheets_always_use_the_indexed_widget() {
        for action in SPREADSHEETS_FORM.actions {
            assert_eq!(
                display_mode_for(ToolKind::Spreadsheets, *action),
                Some(DisplayMode::Indexed)
            );
        }
    }

    #[test]
    fn sidecars_and_schemas_have_no_column_widget() {
        assert_eq!(display_mode_for(ToolKind::Sidecars, ProcessAction::Validate), None);
        assert_eq!(display_mode_for(ToolKind::Schemas, ProcessAction::Validate), None);
    }

    #[test]
    fn validate_offers_warnings_but_not_defs() {
        let options = options_for(ProcessAction::Validate);
        assert!(options.check_for_warnings);
        assert!(!options.expand_defs);
    }

    #[test]
    fn conversions_offer_defs_but_not_warnings() {
        for action in [
            ProcessAction::Assemble,
            ProcessAction::ToLong,
            ProcessAction::ToShort,
        ] {
            let options = options_for(action);
            assert!(options.expand_defs);
            assert!(!options.check_for_warnings);
        }
    }

    #[test]
    fn merge_spreadsheet_does_not_require_a_sidecar_file() {
        assert!(!file_required(ToolKind::Sidecars, ProcessAction::MergeSpreadsheet));
        assert!(file_required(ToolKind::Sidecars, ProcessAction::Validate));
        assert!(file_required(ToolKind::Events, ProcessAction::GenerateSidecar));
    }
}
