//! Turning a results response body into a browser "save as" download.

use gloo_file::{Blob, ObjectUrl};
use regex::Regex;
use wasm_bindgen::JsCast;

/// Extracts the download filename from a `Content-Disposition` header.
///
/// Only `attachment` dispositions carry a usable name; quoted and bare
/// filename parameters are both accepted. Anything else falls back to
/// `default_name`.
pub fn filename_from_disposition(disposition: Option<&str>, default_name: &str) -> String {
    let Some(disposition) = disposition else {
        return default_name.to_string();
    };
    if !disposition.contains("attachment") {
        return default_name.to_string();
    }
    let pattern =
        Regex::new(r#"filename[^;=\n]*=\s*(?:"([^"\n]*)"|'([^'\n]*)'|([^;\n]*))"#).unwrap();
    let name = pattern.captures(disposition).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().trim().to_string())
    });
    match name {
        Some(name) if !name.is_empty() => name,
        _ => default_name.to_string(),
    }
}

/// Offers `bytes` to the user as a file named `name` by clicking a
/// synthetic anchor pointing at an object URL. No-op for an empty body.
pub fn trigger_download(bytes: &[u8], name: &str, content_type: &str) {
    if bytes.is_empty() {
        return;
    }
    let blob = Blob::new_with_options(bytes, Some(content_type));
    let url = ObjectUrl::from(blob);
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(element) = document.create_element("a") {
        let anchor: web_sys::HtmlAnchorElement = element.unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(name);
        anchor.click();
    }
    // The ObjectUrl revokes itself when dropped here.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_attachment_filename() {
        assert_eq!(
            filename_from_disposition(
                Some(r#"attachment; filename="issues_events.txt""#),
                "fallback.txt"
            ),
            "issues_events.txt"
        );
    }

    #[test]
    fn bare_attachment_filename() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename=report.txt"), "fallback.txt"),
            "report.txt"
        );
    }

    #[test]
    fn inline_disposition_falls_back() {
        assert_eq!(
            filename_from_disposition(Some("inline"), "fallback.txt"),
            "fallback.txt"
        );
    }

    #[test]
    fn missing_header_falls_back() {
        assert_eq!(filename_from_disposition(None, "fallback.txt"), "fallback.txt");
    }

    #[test]
    fn empty_filename_falls_back() {
        assert_eq!(
            filename_from_disposition(Some("attachment; filename="), "fallback.txt"),
            "fallback.txt"
        );
    }
}
