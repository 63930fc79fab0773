//! Update logic for the column panel: issuing metadata requests, applying
//! responses, and discarding everything that arrives late.

use common::requests::ColumnsInfoRequest;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::Context;

use super::messages::Msg;
use super::state::ColumnsPanel;
use crate::api;

/// A metadata request that outlives this window is aborted and treated as
/// a transport failure.
const REQUEST_TIMEOUT_MS: u32 = 20_000;

pub fn update(panel: &mut ColumnsPanel, ctx: &Context<ColumnsPanel>, msg: Msg) -> bool {
    match msg {
        Msg::InfoLoaded { seq, info } => {
            if !panel.guard.is_current(seq) {
                gloo_console::debug!("discarding stale columns response");
                return false;
            }
            panel.abort = None;
            match info {
                Some(info) => {
                    panel.worksheets = info.worksheets().to_vec();
                    if let Some(selected) = info.worksheet_selected.clone() {
                        panel.worksheet = Some(selected);
                    }
                    panel.info = Some(info);
                }
                None => {
                    panel.info = None;
                }
            }
            true
        }
        Msg::RequestFlash { seq, flash } => {
            if panel.guard.is_current(seq) {
                ctx.props().flash.emit(flash);
            }
            false
        }
        Msg::WorksheetSelected(name) => {
            panel.worksheet = Some(name);
            request_columns(panel, ctx);
            true
        }
        Msg::HeaderToggled(has_column_names) => {
            panel.has_column_names = has_column_names;
            request_columns(panel, ctx);
            true
        }
    }
}

/// Starts a fresh metadata request for the current file, superseding (and
/// aborting) any request still in flight. With no file there is nothing to
/// describe and no request is made.
pub fn request_columns(panel: &mut ColumnsPanel, ctx: &Context<ColumnsPanel>) {
    let Some(file) = ctx.props().file.clone() else {
        panel.reset();
        return;
    };

    let seq = panel.guard.begin();
    if let Some(previous) = panel.abort.take() {
        previous.abort();
    }
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    panel.abort = controller.clone();

    let request = ColumnsInfoRequest {
        has_column_names: panel.has_column_names,
        worksheet: panel.worksheet.clone(),
    };
    let flash = ctx
        .link()
        .callback(move |flash| Msg::RequestFlash { seq, flash });
    let link = ctx.link().clone();
    spawn_local(async move {
        let timeout = controller.map(|controller| {
            Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort())
        });
        let info = api::columns::columns_info(Some(file), request, flash, signal).await;
        drop(timeout);
        link.send_message(Msg::InfoLoaded { seq, info });
    });
}
