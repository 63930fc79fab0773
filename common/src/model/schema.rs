use serde::{Deserialize, Serialize};

/// Response of the schema-versions listing endpoint.
///
/// Either `schema_version_list` is present, or `message` explains why the
/// server could not produce one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaVersionList {
    pub schema_version_list: Option<Vec<String>>,
    pub message: Option<String>,
}

impl SchemaVersionList {
    pub fn versions(&self) -> &[String] {
        self.schema_version_list.as_deref().unwrap_or_default()
    }
}

/// Response of the version-from-file endpoint, used when the user uploads
/// their own schema XML instead of picking a published version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaVersionInfo {
    pub schema_version: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_list_round_trip() {
        let list: SchemaVersionList =
            serde_json::from_str(r#"{"schema_version_list": ["8.2.0", "8.1.0"]}"#).unwrap();
        assert_eq!(list.versions(), ["8.2.0", "8.1.0"]);
        assert!(list.message.is_none());
    }

    #[test]
    fn version_list_error_shape() {
        let list: SchemaVersionList =
            serde_json::from_str(r#"{"message": "no versions available"}"#).unwrap();
        assert!(list.versions().is_empty());
        assert_eq!(list.message.as_deref(), Some("no versions available"));
    }
}
