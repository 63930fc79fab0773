//! Location-scoped flash messages. Each form owns a handful of flash slots
//! (file input, schema selection, column panel, submission) and renders them
//! with [`flash_region`]; an empty message clears the slot.

use common::model::flash::FlashCategory;
use yew::{classes, html, Html};

#[derive(Debug, Clone, PartialEq)]
pub struct Flash {
    pub message: String,
    pub category: FlashCategory,
}

impl Flash {
    pub fn new(message: impl Into<String>, category: FlashCategory) -> Self {
        Self {
            message: message.into(),
            category,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, FlashCategory::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, FlashCategory::Success)
    }

    /// The "clear this location" write: an empty success message.
    pub fn clear() -> Self {
        Self::new("", FlashCategory::Success)
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

/// Stores `flash` into a slot, treating an empty message as a clear.
pub fn apply_flash(slot: &mut Option<Flash>, flash: Flash) {
    *slot = if flash.is_empty() { None } else { Some(flash) };
}

/// Renders one flash slot. An empty slot renders nothing.
pub fn flash_region(id: &'static str, slot: &Option<Flash>) -> Html {
    match slot {
        Some(flash) => html! {
            <div id={id} class={classes!("flash", flash.category.as_str())}>
                { &flash.message }
            </div>
        },
        None => Html::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_the_slot() {
        let mut slot = Some(Flash::error("bad file"));
        apply_flash(&mut slot, Flash::clear());
        assert!(slot.is_none());
    }

    #[test]
    fn error_overwrites_previous_message() {
        let mut slot = Some(Flash::success("ok"));
        apply_flash(&mut slot, Flash::error("nope"));
        assert_eq!(slot.unwrap().message, "nope");
    }
}
