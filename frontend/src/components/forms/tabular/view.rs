//! View rendering for the generic upload form.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::TabularForm;
use crate::components::columns::ColumnsPanel;
use crate::components::flash::flash_region;
use crate::components::forms::config::{self, ActionOptions, FormConfig};
use crate::components::schema_select::SchemaSelect;

pub fn view(form: &TabularForm, ctx: &Context<TabularForm>) -> Html {
    let config = ctx.props().config;
    let link = ctx.link();
    let options = config::options_for(form.action);
    let mode = config::display_mode_for(config.kind, form.action);

    let on_file = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(input.files().and_then(|files| files.get(0)))
    });
    let on_action = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::ActionChanged(select.value())
    });

    let accept = config
        .extensions
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    html! {
        <form ref={form.form_ref.clone()} class="tool-form">
            <h2>{ config.title }</h2>

            <div class="file-row">
                <label for="upload_file">{ "File:" }</label>
                <input
                    type="file"
                    id="upload_file"
                    name={config.file_field}
                    accept={accept}
                    onchange={on_file}
                />
                <span class="display-name">{ &form.file_label }</span>
            </div>
            { flash_region("input_flash", &form.input_flash) }

            <div class="action-row">
                <label for="process_actions">{ "Action:" }</label>
                <select id="process_actions" onchange={on_action}>
                    {
                        for config.actions.iter().map(|action| html! {
                            <option
                                value={action.value()}
                                selected={*action == form.action}
                            >
                                { action.label() }
                            </option>
                        })
                    }
                </select>
            </div>

            {
                if config.has_schema_select && config::schema_needed(form.action) {
                    html! {
                        <>
                            <SchemaSelect
                                flash={link.callback(Msg::SchemaFlash)}
                                on_change={link.callback(Msg::SchemaChanged)}
                            />
                            { flash_region("schema_select_flash", &form.schema_flash) }
                        </>
                    }
                } else {
                    Html::default()
                }
            }

            { options_section(form, link, options) }
            { tag_columns_row(form, link, config) }

            {
                if mode.is_some() || config.has_worksheets {
                    html! {
                        <>
                            <ColumnsPanel
                                file={form.file.clone()}
                                mode={mode}
                                show_worksheet_select={config.has_worksheets}
                                show_header_toggle={config.has_worksheets}
                                flash={link.callback(Msg::ColumnsFlash)}
                            />
                            { flash_region("column_info_flash", &form.columns_flash) }
                        </>
                    }
                } else {
                    Html::default()
                }
            }

            <div class="submit-row">
                <button type="button" onclick={link.callback(|_| Msg::Submit)}>
                    { "Process" }
                </button>
                <button type="button" onclick={link.callback(|_| Msg::Clear)}>
                    { "Clear" }
                </button>
            </div>
            { flash_region("submit_flash", &form.submit_flash) }
        </form>
    }
}

/// The options panel; an option hidden for the current action is simply not
/// rendered, so it cannot reach the submitted form data.
fn options_section(form: &TabularForm, link: &Scope<TabularForm>, options: ActionOptions) -> Html {
    if !options.check_for_warnings && !options.expand_defs {
        return Html::default();
    }
    html! {
        <div id="options_section">
            {
                if options.check_for_warnings {
                    let onchange = link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::WarningsToggled(input.checked())
                    });
                    html! {
                        <label id="check_for_warnings_option">
                            <input
                                type="checkbox"
                                name="check_for_warnings"
                                checked={form.check_for_warnings}
                                {onchange}
                            />
                            { "Check for warnings" }
                        </label>
                    }
                } else {
                    Html::default()
                }
            }
            {
                if options.expand_defs {
                    let onchange = link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::ExpandDefsToggled(input.checked())
                    });
                    html! {
                        <label id="expand_defs_option">
                            <input
                                type="checkbox"
                                name="expand_defs"
                                checked={form.expand_defs}
                                {onchange}
                            />
                            { "Expand definitions" }
                        </label>
                    }
                } else {
                    Html::default()
                }
            }
        </div>
    }
}

fn tag_columns_row(form: &TabularForm, link: &Scope<TabularForm>, config: &FormConfig) -> Html {
    if !config.has_tag_columns {
        return Html::default();
    }
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::TagColumnsChanged(input.value())
    });
    html! {
        <div class="tag-columns-row">
            <label for="tag_columns">{ "Tag columns (comma-separated numbers):" }</label>
            <input
                type="text"
                id="tag_columns"
                name="tag_columns"
                value={form.tag_columns.clone()}
                {oninput}
            />
        </div>
    }
}
