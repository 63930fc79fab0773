use web_sys::File;
use yew::{Callback, Properties};

use super::table::DisplayMode;
use crate::components::flash::Flash;

#[derive(Properties, PartialEq)]
pub struct ColumnsPanelProps {
    /// The tabular file to describe; `None` renders nothing and fetches
    /// nothing.
    pub file: Option<File>,
    /// Widget to build, per the host form's current action; `None` when the
    /// action needs no column information.
    pub mode: Option<DisplayMode>,
    /// Whether to offer a worksheet dropdown for workbook files.
    #[prop_or_default]
    pub show_worksheet_select: bool,
    /// Whether to offer the header-row toggle.
    #[prop_or_default]
    pub show_header_toggle: bool,
    /// Flash slot for this panel, owned by the host form.
    pub flash: Callback<Flash>,
}
