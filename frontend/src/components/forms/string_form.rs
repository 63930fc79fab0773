//! Free-text variant of the upload forms: a HED tag string typed into a
//! textarea instead of an uploaded file, processed by the strings endpoint.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, FormData, HtmlFormElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::prelude::*;

use common::model::action::ProcessAction;

use crate::api;
use crate::api::submit::COMMAND_OPTION_FIELD;
use crate::components::flash::{apply_flash, flash_region, Flash};
use crate::components::schema_select::{SchemaSelect, SchemaSelection};

const STRING_ACTIONS: &[ProcessAction] = &[
    ProcessAction::Validate,
    ProcessAction::ToLong,
    ProcessAction::ToShort,
];

/// Download name used when the server returns results without naming them.
const STRING_RESULTS_NAME: &str = "string_results.txt";

pub enum Msg {
    TextChanged(String),
    ActionChanged(String),
    SchemaChanged(SchemaSelection),
    SchemaFlash(Flash),
    Submit,
    SubmitFlash(Flash),
    Clear,
}

pub struct StringForm {
    form_ref: NodeRef,
    text: String,
    action: ProcessAction,
    schema: SchemaSelection,
    input_flash: Option<Flash>,
    schema_flash: Option<Flash>,
    submit_flash: Option<Flash>,
}

impl Component for StringForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form_ref: NodeRef::default(),
            text: String::new(),
            action: ProcessAction::Validate,
            schema: SchemaSelection::default(),
            input_flash: None,
            schema_flash: None,
            submit_flash: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TextChanged(text) => {
                self.text = text;
                false
            }
            Msg::ActionChanged(value) => {
                if let Some(action) = ProcessAction::from_value(&value) {
                    self.action = action;
                }
                true
            }
            Msg::SchemaChanged(selection) => {
                self.schema = selection;
                false
            }
            Msg::SchemaFlash(flash) => {
                apply_flash(&mut self.schema_flash, flash);
                true
            }
            Msg::Submit => self.submit(ctx),
            Msg::SubmitFlash(flash) => {
                apply_flash(&mut self.submit_flash, flash);
                true
            }
            Msg::Clear => {
                self.text.clear();
                self.action = ProcessAction::Validate;
                self.input_flash = None;
                self.schema_flash = None;
                self.submit_flash = None;
                if let Some(element) = self.form_ref.cast::<HtmlFormElement>() {
                    element.reset();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let oninput = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::TextChanged(area.value())
        });
        let on_action = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::ActionChanged(select.value())
        });

        html! {
            <form ref={self.form_ref.clone()} class="tool-form">
                <h2>{ "Strings" }</h2>

                <div class="string-row">
                    <label for="string_input">{ "HED string:" }</label>
                    <textarea
                        id="string_input"
                        name="string_input"
                        rows="4"
                        cols="80"
                        value={self.text.clone()}
                        {oninput}
                    />
                </div>
                { flash_region("string_flash", &self.input_flash) }

                <div class="action-row">
                    <label for="process_actions">{ "Action:" }</label>
                    <select id="process_actions" onchange={on_action}>
                        {
                            for STRING_ACTIONS.iter().map(|action| html! {
                                <option
                                    value={action.value()}
                                    selected={*action == self.action}
                                >
                                    { action.label() }
                                </option>
                            })
                        }
                    </select>
                </div>

                <SchemaSelect
                    flash={link.callback(Msg::SchemaFlash)}
                    on_change={link.callback(Msg::SchemaChanged)}
                />
                { flash_region("schema_select_flash", &self.schema_flash) }

                <div class="submit-row">
                    <button type="button" onclick={link.callback(|_| Msg::Submit)}>
                        { "Process" }
                    </button>
                    <button type="button" onclick={link.callback(|_| Msg::Clear)}>
                        { "Clear" }
                    </button>
                </div>
                { flash_region("string_submit_flash", &self.submit_flash) }
            </form>
        }
    }
}

impl StringForm {
    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        if self.text.trim().is_empty() {
            apply_flash(
                &mut self.input_flash,
                Flash::error("HED string is not specified."),
            );
            return true;
        }
        if self.schema.other_without_file() {
            apply_flash(
                &mut self.schema_flash,
                Flash::error("Schema version is not specified."),
            );
            return true;
        }
        let Some(element) = self.form_ref.cast::<HtmlFormElement>() else {
            return false;
        };
        let Ok(data) = FormData::new_with_form(&element) else {
            apply_flash(
                &mut self.submit_flash,
                Flash::error("Form could not be serialized."),
            );
            return true;
        };
        if data
            .append_with_str(COMMAND_OPTION_FIELD, self.action.value())
            .is_err()
        {
            apply_flash(
                &mut self.submit_flash,
                Flash::error("Form could not be serialized."),
            );
            return true;
        }

        self.input_flash = None;
        self.schema_flash = None;
        apply_flash(
            &mut self.submit_flash,
            Flash::success("String is being processed ..."),
        );
        let flash = ctx.link().callback(Msg::SubmitFlash);
        spawn_local(async move {
            api::submit::submit_form(
                api::STRINGS_SUBMIT_ROUTE,
                data,
                STRING_RESULTS_NAME.to_string(),
                flash,
            )
            .await;
        });
        true
    }
}
