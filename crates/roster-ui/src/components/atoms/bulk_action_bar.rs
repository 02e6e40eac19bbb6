//! Bulk action bar shown above a table while rows are selected.
//!
//! # Design
//! - Render nothing without a selection so callers can mount it unconditionally.
//! - Action buttons arrive as children; the bar owns only the count and clear control.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    pub selected_count: usize,
    /// Plural noun for the count, e.g. "students".
    pub noun: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_clear: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    if props.selected_count == 0 {
        return html! {};
    }
    html! {
        <div class={classes!("bulk-actions", "alert", props.class.clone())} aria-busy={props.busy.to_string()}>
            <span class="font-medium">
                {format!("{} {} selected", props.selected_count, props.noun)}
            </span>
            <div class="bulk-buttons flex gap-2">
                { for props.children.iter() }
            </div>
            <button class="btn btn-ghost btn-sm" type="button" onclick={props.on_clear.clone()}>
                {"Clear"}
            </button>
        </div>
    }
}
