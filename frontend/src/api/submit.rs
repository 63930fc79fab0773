//! Submission of a processing form and handling of its response.
//!
//! The processing endpoints answer with a downloadable attachment (the
//! issues or conversion file) plus `Message`/`Category` headers describing
//! the outcome, or with an error status whose `Message` header explains the
//! failure. Either way the outcome lands in the submit flash slot; the
//! attachment, when present, is handed to the browser as a download.

use common::model::flash::FlashCategory;
use gloo_net::http::{Request, Response};
use web_sys::FormData;
use yew::Callback;

use super::{csrf_token, ApiError, CSRF_TOKEN_FIELD};
use crate::components::flash::Flash;
use crate::util::download::{filename_from_disposition, trigger_download};

/// Multipart field naming the selected processing action.
pub const COMMAND_OPTION_FIELD: &str = "command_option";

const MESSAGE_HEADER: &str = "Message";
const CATEGORY_HEADER: &str = "Category";
const UNKNOWN_ERROR: &str = "Unknown processing error occurred";

/// Posts `form` to `endpoint` and reports through `flash`. Total: every
/// outcome, including network failure, becomes exactly one flash write.
pub async fn submit_form(
    endpoint: &'static str,
    form: FormData,
    default_name: String,
    flash: Callback<Flash>,
) {
    if let Some(token) = csrf_token() {
        if form.append_with_str(CSRF_TOKEN_FIELD, &token).is_err() {
            gloo_console::error!("could not attach csrf token");
        }
    }
    match post_form(endpoint, form).await {
        Ok(response) if response.ok() => {
            flash.emit(handle_results(&response, &default_name).await);
        }
        Ok(response) => {
            let message = response
                .headers()
                .get(MESSAGE_HEADER)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            let category = response
                .headers()
                .get(CATEGORY_HEADER)
                .map(|value| FlashCategory::from_header(&value))
                .unwrap_or(FlashCategory::Error);
            flash.emit(Flash::new(
                format!("{message} [Status: {}]", response.status()),
                category,
            ));
        }
        Err(err) => {
            gloo_console::error!("form submission failed:", err.to_string());
            flash.emit(Flash::error(UNKNOWN_ERROR));
        }
    }
}

async fn post_form(endpoint: &'static str, form: FormData) -> Result<Response, ApiError> {
    Ok(Request::post(endpoint).body(form)?.send().await?)
}

/// Downloads the attachment when the body is non-empty, then converts the
/// `Message`/`Category` headers into the flash to show. A response with no
/// message clears the submit flash.
async fn handle_results(response: &Response, default_name: &str) -> Flash {
    let headers = response.headers();
    let content_type = headers
        .get("Content-Type")
        .unwrap_or_else(|| "text/plain".to_string());
    let disposition = headers.get("Content-Disposition");
    match response.binary().await {
        Ok(bytes) if !bytes.is_empty() => {
            let name = filename_from_disposition(disposition.as_deref(), default_name);
            trigger_download(&bytes, &name, &content_type);
        }
        Ok(_) => {}
        Err(err) => {
            gloo_console::error!("could not read results body:", err.to_string());
        }
    }
    match headers.get(MESSAGE_HEADER) {
        Some(message) => {
            let category = headers
                .get(CATEGORY_HEADER)
                .map(|value| FlashCategory::from_header(&value))
                .unwrap_or(FlashCategory::Success);
            Flash::new(message, category)
        }
        None => Flash::clear(),
    }
}
