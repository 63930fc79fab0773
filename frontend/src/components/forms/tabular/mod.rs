//! Generic tabular-upload form: the one component behind the events,
//! sidecar, spreadsheet, and schema tools. A [`FormConfig`] supplies the
//! endpoint, the accepted extensions, the action list, and the column
//! widget policy; everything else is shared.
//!
//! [`FormConfig`]: crate::components::forms::config::FormConfig

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TabularFormProps;
pub use state::TabularForm;

impl Component for TabularForm {
    type Message = Msg;
    type Properties = TabularFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        TabularForm::new(ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
