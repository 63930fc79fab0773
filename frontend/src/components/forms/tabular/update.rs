//! Update logic for the generic upload form: extension gating on file
//! choice, option housekeeping on action change, and the client-side gates
//! that run before a submission is allowed out the door.

use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};
use yew::Context;

use common::model::action::ProcessAction;

use super::messages::Msg;
use super::state::TabularForm;
use crate::api;
use crate::api::submit::COMMAND_OPTION_FIELD;
use crate::components::flash::{apply_flash, Flash};
use crate::components::forms::config;
use crate::util::files;
use crate::util::validation::parse_tag_columns;

/// Suffix of the fallback download name for results files.
const RESULTS_SUFFIX: &str = "_processed";

pub fn update(form: &mut TabularForm, ctx: &Context<TabularForm>, msg: Msg) -> bool {
    let config = ctx.props().config;
    match msg {
        Msg::FileChosen(None) => {
            // The browser reports a cancelled picker as an empty selection.
            form.file = None;
            form.file_label.clear();
            form.clear_flashes();
            true
        }
        Msg::FileChosen(Some(file)) => {
            if !files::has_valid_extension(&file.name(), config.extensions) {
                form.clear(config);
                apply_flash(&mut form.input_flash, Flash::error(config.extension_error));
            } else {
                form.clear_flashes();
                form.file_label = files::base_name(&file.name()).to_string();
                form.file = Some(file);
            }
            true
        }
        Msg::ActionChanged(value) => {
            let Some(action) = ProcessAction::from_value(&value) else {
                return false;
            };
            form.action = action;
            // Hidden options must not linger checked in the form data.
            let options = config::options_for(action);
            if !options.check_for_warnings {
                form.check_for_warnings = false;
            }
            if !options.expand_defs {
                form.expand_defs = false;
            }
            true
        }
        Msg::SchemaChanged(selection) => {
            form.schema = selection;
            false
        }
        Msg::SchemaFlash(flash) => {
            apply_flash(&mut form.schema_flash, flash);
            true
        }
        Msg::ColumnsFlash(flash) => {
            apply_flash(&mut form.columns_flash, flash);
            true
        }
        Msg::WarningsToggled(checked) => {
            form.check_for_warnings = checked;
            true
        }
        Msg::ExpandDefsToggled(checked) => {
            form.expand_defs = checked;
            true
        }
        Msg::TagColumnsChanged(text) => {
            form.tag_columns = text;
            false
        }
        Msg::Submit => submit(form, ctx),
        Msg::SubmitFlash(flash) => {
            apply_flash(&mut form.submit_flash, flash);
            true
        }
        Msg::Clear => {
            form.clear(config);
            true
        }
    }
}

/// Runs the client-side gates and, if they pass, posts the native form's
/// fields plus the selected `command_option`.
fn submit(form: &mut TabularForm, ctx: &Context<TabularForm>) -> bool {
    let config = ctx.props().config;

    if config::file_required(config.kind, form.action) && form.file.is_none() {
        apply_flash(
            &mut form.input_flash,
            Flash::error(config.missing_file_error),
        );
        return true;
    }
    if config.has_schema_select
        && config::schema_needed(form.action)
        && form.schema.other_without_file()
    {
        apply_flash(
            &mut form.schema_flash,
            Flash::error("Schema version is not specified."),
        );
        return true;
    }
    if config.has_tag_columns {
        if let Err(err) = parse_tag_columns(&form.tag_columns) {
            apply_flash(&mut form.input_flash, Flash::error(err.to_string()));
            return true;
        }
    }

    let Some(element) = form.form_ref.cast::<HtmlFormElement>() else {
        return false;
    };
    let Ok(data) = FormData::new_with_form(&element) else {
        apply_flash(
            &mut form.submit_flash,
            Flash::error("Form could not be serialized."),
        );
        return true;
    };
    if data
        .append_with_str(COMMAND_OPTION_FIELD, form.action.value())
        .is_err()
    {
        apply_flash(
            &mut form.submit_flash,
            Flash::error("Form could not be serialized."),
        );
        return true;
    }

    let default_name = match &form.file {
        Some(file) => files::results_name(&file.name(), RESULTS_SUFFIX),
        None => format!("default{RESULTS_SUFFIX}.txt"),
    };

    form.clear_flashes();
    apply_flash(
        &mut form.submit_flash,
        Flash::success("File is being processed ..."),
    );
    let flash = ctx.link().callback(Msg::SubmitFlash);
    let endpoint = config.endpoint;
    spawn_local(async move {
        api::submit::submit_form(endpoint, data, default_name, flash).await;
    });
    true
}
