use yew::prelude::*;

use crate::components::forms::config::FormConfig;

/// Properties of the generic upload form. The whole form is driven by one
/// static configuration record; give the component a `key` when swapping
/// configurations so it remounts with fresh state.
#[derive(Properties, PartialEq, Clone)]
pub struct TabularFormProps {
    pub config: &'static FormConfig,
}
