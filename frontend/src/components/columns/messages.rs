use common::model::columns::ColumnsInfo;

use crate::components::flash::Flash;

pub enum Msg {
    /// A metadata request finished. `seq` identifies the request so stale
    /// responses can be discarded.
    InfoLoaded {
        seq: u64,
        info: Option<ColumnsInfo>,
    },
    /// Flash emitted by the request tagged `seq`; dropped if superseded.
    RequestFlash { seq: u64, flash: Flash },
    WorksheetSelected(String),
    HeaderToggled(bool),
}
