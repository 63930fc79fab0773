//! View models for the three column widgets.
//!
//! Everything here is pure data so the row-building rules are testable
//! without a DOM: row order always follows the column order of the file,
//! and every control name is derived from the positional index rather than
//! the column name, so files with duplicate column names still produce
//! independent controls.

use std::collections::HashMap;

/// Which column widget to build for the current processing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// A single header row of column names.
    Flat,
    /// One row per column with an include checkbox and a tag-prefix box.
    Indexed,
    /// One row per column with include/categorical checkboxes and the
    /// distinct-value count, for scaffolding a sidecar template.
    Categorical,
}

/// Row of the indexed (tag-prefix) table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRow {
    pub name: String,
    /// Name/id of the include checkbox, `column_<i>_check`.
    pub check_name: String,
    /// Name/id of the tag-prefix text box, `column_<i>_input`.
    pub input_name: String,
}

/// Row of the categorical (sidecar-template) table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalRow {
    pub name: String,
    /// Column name annotated with its distinct-value count.
    pub label: String,
    /// Name/id of the include checkbox, `column_<i>_use`.
    pub use_name: String,
    /// Name/id of the categorical checkbox, `column_<i>_category`.
    pub category_name: String,
    /// Name/id of the hidden field echoing the column name back to the
    /// server, `column_<i>_name`.
    pub name_field: String,
}

/// Rendered in place of a count the server did not supply.
pub const MISSING_COUNT: &str = "n/a";

pub fn indexed_rows(columns: &[String]) -> Vec<IndexedRow> {
    columns
        .iter()
        .enumerate()
        .map(|(i, name)| IndexedRow {
            name: name.clone(),
            check_name: format!("column_{i}_check"),
            input_name: format!("column_{i}_input"),
        })
        .collect()
}

pub fn categorical_rows(
    columns: &[String],
    counts: Option<&HashMap<String, u64>>,
) -> Vec<CategoricalRow> {
    columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let count = counts.and_then(|counts| counts.get(name));
            let label = match count {
                Some(count) => format!("{name} ({count})"),
                None => format!("{name} ({MISSING_COUNT})"),
            };
            CategoricalRow {
                name: name.clone(),
                label,
                use_name: format!("column_{i}_use"),
                category_name: format!("column_{i}_category"),
                name_field: format!("column_{i}_name"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn indexed_rows_follow_input_order() {
        let rows = indexed_rows(&names(&["onset", "duration", "trial_type"]));
        let row_names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(row_names, ["onset", "duration", "trial_type"]);
        assert_eq!(rows[0].check_name, "column_0_check");
        assert_eq!(rows[2].input_name, "column_2_input");
    }

    #[test]
    fn duplicate_names_get_distinct_controls() {
        let rows = indexed_rows(&names(&["x", "x"]));
        assert_eq!(rows.len(), 2);
        assert_ne!(rows[0].check_name, rows[1].check_name);
        assert_ne!(rows[0].input_name, rows[1].input_name);
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        assert!(indexed_rows(&[]).is_empty());
        assert!(categorical_rows(&[], None).is_empty());
    }

    #[test]
    fn categorical_rows_annotate_counts() {
        let mut counts = HashMap::new();
        counts.insert("a".to_string(), 3);
        let rows = categorical_rows(&names(&["a", "b"]), Some(&counts));
        assert_eq!(rows[0].label, "a (3)");
        assert_eq!(rows[1].label, "b (n/a)");
        assert_eq!(rows[0].use_name, "column_0_use");
        assert_eq!(rows[1].category_name, "column_1_category");
        assert_eq!(rows[1].name_field, "column_1_name");
    }

    #[test]
    fn categorical_rows_survive_missing_counts_entirely() {
        let rows = categorical_rows(&names(&["a", "b"]), None);
        assert_eq!(rows[0].label, "a (n/a)");
        assert_eq!(rows[1].label, "b (n/a)");
    }
}
