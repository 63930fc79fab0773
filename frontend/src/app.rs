use yew::prelude::*;

use crate::components::forms::config::{
    FormConfig, ToolKind, EVENTS_FORM, SCHEMAS_FORM, SIDECARS_FORM, SPREADSHEETS_FORM,
};
use crate::components::forms::{StringForm, TabularForm};

const TOOLS: &[ToolKind] = &[
    ToolKind::Events,
    ToolKind::Sidecars,
    ToolKind::Spreadsheets,
    ToolKind::Schemas,
    ToolKind::Strings,
];

fn tool_title(kind: ToolKind) -> &'static str {
    match kind {
        ToolKind::Events => "Events",
        ToolKind::Sidecars => "Sidecars",
        ToolKind::Spreadsheets => "Spreadsheets",
        ToolKind::Schemas => "Schemas",
        ToolKind::Strings => "Strings",
    }
}

fn tool_config(kind: ToolKind) -> Option<&'static FormConfig> {
    match kind {
        ToolKind::Events => Some(&EVENTS_FORM),
        ToolKind::Sidecars => Some(&SIDECARS_FORM),
        ToolKind::Spreadsheets => Some(&SPREADSHEETS_FORM),
        ToolKind::Schemas => Some(&SCHEMAS_FORM),
        ToolKind::Strings => None,
    }
}

pub enum Msg {
    ToolSelected(ToolKind),
}

/// Root of the application: one tool form mounted at a time, picked from a
/// navigation bar. Switching tools remounts the form, discarding its state,
/// like navigating between the pages of a multi-page site.
pub struct App {
    active: ToolKind,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            active: ToolKind::Events,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToolSelected(kind) => {
                self.active = kind;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="hed-tools">
                <nav class="tool-nav">
                    {
                        for TOOLS.iter().map(|kind| {
                            let kind = *kind;
                            let class = if kind == self.active { "active" } else { "" };
                            html! {
                                <button
                                    class={classes!("tool-tab", class)}
                                    onclick={link.callback(move |_| Msg::ToolSelected(kind))}
                                >
                                    { tool_title(kind) }
                                </button>
                            }
                        })
                    }
                </nav>
                {
                    match tool_config(self.active) {
                        Some(config) => html! {
                            <TabularForm key={config.title} config={config} />
                        },
                        None => html! { <StringForm /> },
                    }
                }
            </div>
        }
    }
}
