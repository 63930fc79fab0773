//! State of the generic upload form: the chosen file, the selected action,
//! option toggles, and one flash slot per message location.

use common::model::action::ProcessAction;
use web_sys::File;
use yew::NodeRef;

use crate::components::flash::Flash;
use crate::components::forms::config::FormConfig;
use crate::components::schema_select::SchemaSelection;

pub struct TabularForm {
    /// The native `<form>` element; submission serializes its named inputs.
    pub form_ref: NodeRef,
    pub file: Option<File>,
    pub file_label: String,
    pub action: ProcessAction,
    pub schema: SchemaSelection,
    pub check_for_warnings: bool,
    pub expand_defs: bool,
    /// Raw text of the tag-columns box (spreadsheets only).
    pub tag_columns: String,
    pub input_flash: Option<Flash>,
    pub schema_flash: Option<Flash>,
    pub columns_flash: Option<Flash>,
    pub submit_flash: Option<Flash>,
}

impl TabularForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            form_ref: NodeRef::default(),
            file: None,
            file_label: String::new(),
            action: config.actions[0],
            schema: SchemaSelection::default(),
            check_for_warnings: false,
            expand_defs: false,
            tag_columns: String::new(),
            input_flash: None,
            schema_flash: None,
            columns_flash: None,
            submit_flash: None,
        }
    }

    pub fn clear_flashes(&mut self) {
        self.input_flash = None;
        self.schema_flash = None;
        self.columns_flash = None;
        self.submit_flash = None;
    }

    /// Back to the freshly mounted state, keeping the schema selection the
    /// child component still holds.
    pub fn clear(&mut self, config: &FormConfig) {
        self.file = None;
        self.file_label.clear();
        self.action = config.actions[0];
        self.check_for_warnings = false;
        self.expand_defs = false;
        self.tag_columns.clear();
        self.clear_flashes();
        if let Some(element) = self.form_ref.cast::<web_sys::HtmlFormElement>() {
            element.reset();
        }
    }
}
