//! Client for the column-metadata endpoint.
//!
//! One multipart POST per call: the file bytes, an `on`/absent flag for
//! header-row interpretation, and the worksheet name when one is selected.
//! [`columns_info`] is the total wrapper the column panel uses — it never
//! fails, it reports through the flash callback and resolves to `None`.

use common::model::columns::ColumnsInfo;
use common::requests::{ColumnsInfoRequest, COLUMNS_FILE_FIELD};
use gloo_net::http::Request;
use web_sys::{AbortSignal, File, FormData};
use yew::Callback;

use super::{csrf_token, ApiError, COLUMNS_INFO_ROUTE, CSRF_TOKEN_FIELD};
use crate::components::flash::Flash;

/// Flashed when the request fails for any reason the server did not explain.
pub const GENERIC_FAILURE: &str = "File could not be processed.";

/// One round trip to the metadata endpoint.
pub async fn fetch_columns_info(
    file: &File,
    request: &ColumnsInfoRequest,
    signal: Option<&AbortSignal>,
) -> Result<ColumnsInfo, ApiError> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(COLUMNS_FILE_FIELD, file, &file.name())?;
    for (name, value) in request.fields() {
        form.append_with_str(name, &value)?;
    }
    if let Some(token) = csrf_token() {
        form.append_with_str(CSRF_TOKEN_FIELD, &token)?;
    }
    let response = Request::post(COLUMNS_INFO_ROUTE)
        .abort_signal(signal)
        .body(form)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<ColumnsInfo>().await?)
}

/// Fetches column metadata for `file`, surfacing every failure as a flash
/// write instead of an error.
///
/// - `file == None` resolves to `None` with no network call and no flash
///   write; a form without a file is not an error.
/// - A response carrying `message` flashes that exact message with severity
///   error and resolves to `None`, whatever the HTTP status was.
/// - Transport failures (non-2xx, network error, abort, unparsable body)
///   flash [`GENERIC_FAILURE`]; the underlying detail goes to the console.
/// - Success clears the flash location and resolves to the parsed info.
pub async fn columns_info(
    file: Option<File>,
    request: ColumnsInfoRequest,
    flash: Callback<Flash>,
    signal: Option<AbortSignal>,
) -> Option<ColumnsInfo> {
    let file = file?;
    match fetch_columns_info(&file, &request, signal.as_ref()).await {
        Ok(info) => {
            if let Some(message) = info.message.clone() {
                flash.emit(Flash::error(message));
                return None;
            }
            flash.emit(Flash::clear());
            Some(info)
        }
        Err(err) => {
            gloo_console::error!("columns info request failed:", err.to_string());
            flash.emit(Flash::error(GENERIC_FAILURE));
            None
        }
    }
}
