use serde::{Deserialize, Serialize};

/// Every `command_option` value accepted by the processing endpoints.
///
/// The wire value is the snake_case string the server parses from the
/// submitted form; [`value`] and [`from_value`] round-trip it.
///
/// [`value`]: ProcessAction::value
/// [`from_value`]: ProcessAction::from_value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessAction {
    Validate,
    Assemble,
    GenerateSidecar,
    Remodel,
    Search,
    ToLong,
    ToShort,
    ExtractSpreadsheet,
    MergeSpreadsheet,
    ConvertSchema,
}

impl ProcessAction {
    pub fn value(self) -> &'static str {
        match self {
            ProcessAction::Validate => "validate",
            ProcessAction::Assemble => "assemble",
            ProcessAction::GenerateSidecar => "generate_sidecar",
            ProcessAction::Remodel => "remodel",
            ProcessAction::Search => "search",
            ProcessAction::ToLong => "to_long",
            ProcessAction::ToShort => "to_short",
            ProcessAction::ExtractSpreadsheet => "extract_spreadsheet",
            ProcessAction::MergeSpreadsheet => "merge_spreadsheet",
            ProcessAction::ConvertSchema => "convert_schema",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        let action = match value {
            "validate" => ProcessAction::Validate,
            "assemble" => ProcessAction::Assemble,
            "generate_sidecar" => ProcessAction::GenerateSidecar,
            "remodel" => ProcessAction::Remodel,
            "search" => ProcessAction::Search,
            "to_long" => ProcessAction::ToLong,
            "to_short" => ProcessAction::ToShort,
            "extract_spreadsheet" => ProcessAction::ExtractSpreadsheet,
            "merge_spreadsheet" => ProcessAction::MergeSpreadsheet,
            "convert_schema" => ProcessAction::ConvertSchema,
            _ => return None,
        };
        Some(action)
    }

    /// Label shown in the action dropdown.
    pub fn label(self) -> &'static str {
        match self {
            ProcessAction::Validate => "Validate",
            ProcessAction::Assemble => "Assemble annotations",
            ProcessAction::GenerateSidecar => "Generate sidecar template",
            ProcessAction::Remodel => "Execute remodel script",
            ProcessAction::Search => "Search",
            ProcessAction::ToLong => "Convert to long form",
            ProcessAction::ToShort => "Convert to short form",
            ProcessAction::ExtractSpreadsheet => "Extract spreadsheet",
            ProcessAction::MergeSpreadsheet => "Merge spreadsheet",
            ProcessAction::ConvertSchema => "Convert schema",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ProcessAction; 10] = [
        ProcessAction::Validate,
        ProcessAction::Assemble,
        ProcessAction::GenerateSidecar,
        ProcessAction::Remodel,
        ProcessAction::Search,
        ProcessAction::ToLong,
        ProcessAction::ToShort,
        ProcessAction::ExtractSpreadsheet,
        ProcessAction::MergeSpreadsheet,
        ProcessAction::ConvertSchema,
    ];

    #[test]
    fn wire_value_round_trips() {
        for action in ALL {
            assert_eq!(ProcessAction::from_value(action.value()), Some(action));
        }
        assert_eq!(ProcessAction::from_value("frobnicate"), None);
    }

    #[test]
    fn serde_matches_wire_value() {
        for action in ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.value()));
        }
    }
}
