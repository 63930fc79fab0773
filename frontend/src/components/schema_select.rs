//! HED schema version selector: a dropdown fed by the versions endpoint,
//! with an `Other` entry that reveals a manual schema upload. The uploaded
//! file's version is echoed back through the version-from-file endpoint.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use common::model::schema::{SchemaVersionInfo, SchemaVersionList};

use crate::api;
use crate::components::flash::Flash;
use crate::util::files;

/// Dropdown entry that stands for "I will upload my own schema".
pub const OTHER_VERSION_OPTION: &str = "Other";

const VERSIONS_UNAVAILABLE: &str =
    "Server could not retrieve HED schema versions. Please provide your own.";

/// What the host form needs to know about the current schema choice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaSelection {
    pub version: String,
    pub has_file: bool,
}

impl SchemaSelection {
    /// True when `Other` is selected but no schema file has been supplied;
    /// submission must be blocked in that state.
    pub fn other_without_file(&self) -> bool {
        self.version == OTHER_VERSION_OPTION && !self.has_file
    }
}

#[derive(Properties, PartialEq)]
pub struct SchemaSelectProps {
    /// Flash slot for schema-selection messages, owned by the host form.
    pub flash: Callback<Flash>,
    /// Fired whenever the selection changes, so the form can gate submit.
    pub on_change: Callback<SchemaSelection>,
}

pub enum Msg {
    VersionsLoaded(Option<SchemaVersionList>),
    VersionPicked(String),
    PrereleasesToggled(bool),
    FilePicked(Option<File>),
    FileVersion(Option<SchemaVersionInfo>),
}

pub struct SchemaSelect {
    versions: Vec<String>,
    selection: SchemaSelection,
    include_prereleases: bool,
    file_label: String,
}

impl SchemaSelect {
    fn load_versions(&self, ctx: &Context<Self>) {
        let include_prereleases = self.include_prereleases;
        let link = ctx.link().clone();
        spawn_local(async move {
            let list = api::schemas::fetch_schema_versions(include_prereleases)
                .await
                .ok();
            link.send_message(Msg::VersionsLoaded(list));
        });
    }

    fn emit_change(&self, ctx: &Context<Self>) {
        ctx.props().on_change.emit(self.selection.clone());
    }
}

impl Component for SchemaSelect {
    type Message = Msg;
    type Properties = SchemaSelectProps;

    fn create(ctx: &Context<Self>) -> Self {
        let select = Self {
            versions: Vec::new(),
            selection: SchemaSelection::default(),
            include_prereleases: false,
            file_label: String::new(),
        };
        select.load_versions(ctx);
        select
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::VersionsLoaded(Some(list)) => {
                if let Some(message) = list.message.clone() {
                    ctx.props().flash.emit(Flash::error(message));
                    return false;
                }
                self.versions = list.versions().to_vec();
                if self.selection.version.is_empty() {
                    if let Some(first) = self.versions.first() {
                        self.selection.version = first.clone();
                        self.emit_change(ctx);
                    }
                }
                true
            }
            Msg::VersionsLoaded(None) => {
                ctx.props().flash.emit(Flash::error(VERSIONS_UNAVAILABLE));
                false
            }
            Msg::VersionPicked(version) => {
                self.selection.version = version;
                ctx.props().flash.emit(Flash::clear());
                self.emit_change(ctx);
                true
            }
            Msg::PrereleasesToggled(include) => {
                self.include_prereleases = include;
                self.load_versions(ctx);
                false
            }
            Msg::FilePicked(None) => {
                self.selection.has_file = false;
                self.file_label.clear();
                self.emit_change(ctx);
                true
            }
            Msg::FilePicked(Some(file)) => {
                if !files::has_valid_extension(&file.name(), files::SCHEMA_XML_EXTENSIONS) {
                    ctx.props()
                        .flash
                        .emit(Flash::error("Please upload a valid schema file (.xml)"));
                    return false;
                }
                self.selection.has_file = true;
                self.file_label = files::base_name(&file.name()).to_string();
                self.emit_change(ctx);
                let link = ctx.link().clone();
                spawn_local(async move {
                    let info = api::schemas::fetch_schema_version(&file).await.ok();
                    link.send_message(Msg::FileVersion(info));
                });
                true
            }
            Msg::FileVersion(Some(info)) => {
                if let Some(version) = info.schema_version {
                    ctx.props()
                        .flash
                        .emit(Flash::success(format!("Using HED version {version}")));
                } else if let Some(message) = info.message {
                    ctx.props().flash.emit(Flash::error(message));
                }
                false
            }
            Msg::FileVersion(None) => {
                ctx.props()
                    .flash
                    .emit(Flash::error("Could not get version number from HED XML file."));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_version = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::VersionPicked(select.value())
        });
        let on_prereleases = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::PrereleasesToggled(input.checked())
        });
        let on_file = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FilePicked(input.files().and_then(|files| files.get(0)))
        });

        html! {
            <div id="schema_pulldown_section">
                <label for="schema_version">{ "HED version:" }</label>
                <select id="schema_version" name="schema_version" onchange={on_version}>
                    {
                        for self.versions.iter().map(|version| html! {
                            <option
                                value={version.clone()}
                                selected={*version == self.selection.version}
                            >
                                { version }
                            </option>
                        })
                    }
                    <option
                        value={OTHER_VERSION_OPTION}
                        selected={self.selection.version == OTHER_VERSION_OPTION}
                    >
                        { OTHER_VERSION_OPTION }
                    </option>
                </select>
                <label class="prerelease-toggle">
                    <input
                        type="checkbox"
                        id="include_prereleases"
                        checked={self.include_prereleases}
                        onchange={on_prereleases}
                    />
                    { "Include prereleases" }
                </label>
                {
                    if self.selection.version == OTHER_VERSION_OPTION {
                        html! {
                            <div id="schema_other_version">
                                <input
                                    type="file"
                                    id="schema_path"
                                    name="schema_path"
                                    accept=".xml"
                                    onchange={on_file}
                                />
                                <span id="schema_display_name">{ &self.file_label }</span>
                            </div>
                        }
                    } else {
                        Html::default()
                    }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_without_file_blocks_submission() {
        let selection = SchemaSelection {
            version: OTHER_VERSION_OPTION.to_string(),
            has_file: false,
        };
        assert!(selection.other_without_file());
    }

    #[test]
    fn picked_version_or_supplied_file_is_fine() {
        let picked = SchemaSelection {
            version: "8.2.0".to_string(),
            has_file: false,
        };
        assert!(!picked.other_without_file());
        let supplied = SchemaSelection {
            version: OTHER_VERSION_OPTION.to_string(),
            has_file: true,
        };
        assert!(!supplied.other_without_file());
    }
}
