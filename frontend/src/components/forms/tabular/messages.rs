use web_sys::File;

use crate::components::flash::Flash;
use crate::components::schema_select::SchemaSelection;

pub enum Msg {
    FileChosen(Option<File>),
    ActionChanged(String),
    SchemaChanged(SchemaSelection),
    SchemaFlash(Flash),
    ColumnsFlash(Flash),
    WarningsToggled(bool),
    ExpandDefsToggled(bool),
    TagColumnsChanged(String),
    Submit,
    SubmitFlash(Flash),
    Clear,
}
