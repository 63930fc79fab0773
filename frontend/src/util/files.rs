//! File-name helpers shared by the upload forms: extension gating, display
//! labels, and derivation of the default download name for results files.

/// Extensions accepted for flat tabular files (events and similar).
pub const TEXT_FILE_EXTENSIONS: &[&str] = &["tsv", "txt"];
/// Extensions accepted for spreadsheet uploads (workbook or flat).
pub const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "tsv", "txt"];
/// Extensions accepted for JSON sidecar uploads.
pub const SIDECAR_EXTENSIONS: &[&str] = &["json"];
/// Extensions accepted for schema uploads.
pub const SCHEMA_EXTENSIONS: &[&str] = &["xml", "mediawiki"];
/// Extensions accepted for a manually supplied schema version file.
pub const SCHEMA_XML_EXTENSIONS: &[&str] = &["xml"];

/// Lowercased extension of `name`, without the dot. `None` when the name has
/// no extension at all.
pub fn file_extension(name: &str) -> Option<String> {
    let base = base_name(name);
    let (_, ext) = base.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// True when the file's extension is one of `accepted` (case-insensitive).
pub fn has_valid_extension(name: &str, accepted: &[&str]) -> bool {
    match file_extension(name) {
        Some(ext) => accepted.contains(&ext.as_str()),
        None => false,
    }
}

/// Derives the default name for a downloaded results file:
/// `<stem><suffix>.txt`.
pub fn results_name(filename: &str, suffix: &str) -> String {
    let base = base_name(filename);
    let stem = match base.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => base,
    };
    format!("{stem}{suffix}.txt")
}

/// Last path component, tolerating both separators. Browsers hand back fake
/// paths like `C:\fakepath\events.tsv` from file inputs.
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("Events.TSV").as_deref(), Some("tsv"));
        assert_eq!(file_extension("book.xlsx").as_deref(), Some("xlsx"));
        assert_eq!(file_extension("no_extension"), None);
    }

    #[test]
    fn extension_gate() {
        assert!(has_valid_extension("sub-01_events.tsv", TEXT_FILE_EXTENSIONS));
        assert!(has_valid_extension("data.TXT", TEXT_FILE_EXTENSIONS));
        assert!(!has_valid_extension("data.xlsx", TEXT_FILE_EXTENSIONS));
        assert!(has_valid_extension("data.xlsx", SPREADSHEET_EXTENSIONS));
        assert!(!has_valid_extension("schema", SCHEMA_EXTENSIONS));
    }

    #[test]
    fn results_name_replaces_extension() {
        assert_eq!(results_name("events.tsv", "_processed"), "events_processed.txt");
        assert_eq!(
            results_name("C:\\fakepath\\book.xlsx", "_issues"),
            "book_issues.txt"
        );
        assert_eq!(results_name("noext", "_processed"), "noext_processed.txt");
    }

    #[test]
    fn base_name_strips_fake_path() {
        assert_eq!(base_name("C:\\fakepath\\events.tsv"), "events.tsv");
        assert_eq!(base_name("/tmp/upload/events.tsv"), "events.tsv");
        assert_eq!(base_name("events.tsv"), "events.tsv");
    }
}
