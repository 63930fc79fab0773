use serde::{Deserialize, Serialize};

/// Severity of a flash message, matching the `Category` response header the
/// processing endpoints attach to their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashCategory {
    Success,
    Warning,
    Error,
    Other,
}

impl FlashCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashCategory::Success => "success",
            FlashCategory::Warning => "warning",
            FlashCategory::Error => "error",
            FlashCategory::Other => "other",
        }
    }

    /// Parses a `Category` header value. Anything unrecognized maps to
    /// [`FlashCategory::Other`] so a misbehaving server cannot break the
    /// flash display.
    pub fn from_header(value: &str) -> Self {
        match value {
            "success" => FlashCategory::Success,
            "warning" => FlashCategory::Warning,
            "error" => FlashCategory::Error,
            _ => FlashCategory::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_parsing() {
        assert_eq!(FlashCategory::from_header("error"), FlashCategory::Error);
        assert_eq!(FlashCategory::from_header("success"), FlashCategory::Success);
        assert_eq!(FlashCategory::from_header("warning"), FlashCategory::Warning);
        assert_eq!(FlashCategory::from_header("info"), FlashCategory::Other);
        assert_eq!(FlashCategory::from_header(""), FlashCategory::Other);
    }
}
