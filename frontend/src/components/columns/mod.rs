//! Column metadata panel: fetches the column description of the host
//! form's tabular file and renders one of three widgets, keyed by the
//! form's current processing action.
//!
//! Lifecycle: a fresh metadata request is issued whenever the file or the
//! display mode changes, and whenever the worksheet or header-row inputs
//! change. Responses are tagged with a sequence number; only the response
//! of the most recently issued request is ever applied, and superseded
//! requests are aborted outright.

use yew::prelude::*;

mod messages;
mod props;
mod state;
pub mod table;
mod update;
mod view;

pub use messages::Msg;
pub use props::ColumnsPanelProps;
pub use state::ColumnsPanel;
pub use table::DisplayMode;

impl Component for ColumnsPanel {
    type Message = Msg;
    type Properties = ColumnsPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ColumnsPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().file != old_props.file {
            // New file: the old table and worksheet names no longer apply.
            self.info = None;
            self.worksheet = None;
            self.worksheets.clear();
            self.refresh(ctx);
        } else if ctx.props().mode != old_props.mode {
            self.refresh(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && ctx.props().file.is_some() {
            self.refresh(ctx);
        }
    }
}

impl ColumnsPanel {
    /// Re-fetches for the current props, or clears when no widget is wanted.
    fn refresh(&mut self, ctx: &Context<Self>) {
        if ctx.props().mode.is_none() {
            self.reset();
        } else {
            update::request_columns(self, ctx);
        }
    }
}
