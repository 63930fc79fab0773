//! Clients for the two schema-version endpoints: the published-versions
//! listing that fills the dropdown, and version extraction from a schema
//! file the user supplies.

use common::model::schema::{SchemaVersionInfo, SchemaVersionList};
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::{csrf_token, ApiError, CSRF_TOKEN_FIELD, SCHEMA_VERSIONS_ROUTE, SCHEMA_VERSION_ROUTE};

/// Multipart field carrying the user-supplied schema file.
pub const SCHEMA_PATH_FIELD: &str = "schema_path";

pub async fn fetch_schema_versions(
    include_prereleases: bool,
) -> Result<SchemaVersionList, ApiError> {
    let response = Request::get(SCHEMA_VERSIONS_ROUTE)
        .query([(
            "include_prereleases",
            if include_prereleases { "true" } else { "false" },
        )])
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<SchemaVersionList>().await?)
}

pub async fn fetch_schema_version(file: &File) -> Result<SchemaVersionInfo, ApiError> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(SCHEMA_PATH_FIELD, file, &file.name())?;
    if let Some(token) = csrf_token() {
        form.append_with_str(CSRF_TOKEN_FIELD, &token)?;
    }
    let response = Request::post(SCHEMA_VERSION_ROUTE)
        .body(form)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<SchemaVersionInfo>().await?)
}
