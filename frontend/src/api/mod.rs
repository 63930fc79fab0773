//! Thin adapters over the server endpoints. Everything here is a single
//! round trip; retry and recovery policy belongs to the calling component.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

pub mod columns;
pub mod schemas;
pub mod submit;

/// Column-metadata endpoint (multipart POST).
pub const COLUMNS_INFO_ROUTE: &str = "/columns_info_results";
/// Processing endpoints, one per document type (multipart POST).
pub const EVENTS_SUBMIT_ROUTE: &str = "/events_submit";
pub const SIDECARS_SUBMIT_ROUTE: &str = "/sidecars_submit";
pub const SPREADSHEETS_SUBMIT_ROUTE: &str = "/spreadsheets_submit";
pub const SCHEMAS_SUBMIT_ROUTE: &str = "/schemas_submit";
pub const STRINGS_SUBMIT_ROUTE: &str = "/strings_submit";
/// Published schema versions listing (GET).
pub const SCHEMA_VERSIONS_ROUTE: &str = "/schema_versions_results";
/// Version extraction for a manually uploaded schema (multipart POST).
pub const SCHEMA_VERSION_ROUTE: &str = "/schema_version_results";

/// Multipart field carrying the CSRF token, when the hosting page has one.
pub const CSRF_TOKEN_FIELD: &str = "csrf_token";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Net(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("browser error: {0}")]
    Js(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Js(format!("{value:?}"))
    }
}

/// CSRF token published by the hosting page as `<meta name="csrf-token">`,
/// if any. Pages served without one simply omit the field.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector("meta[name='csrf-token']")
        .ok()
        .flatten()?;
    let meta: web_sys::HtmlMetaElement = meta.dyn_into().ok()?;
    let content = meta.content();
    if content.is_empty() { None } else { Some(content) }
}
