//! Empty state panel for tables.
//!
//! # Design
//! - Copy is prop-driven; a filtered list gets a hint to widen the filters.
//! - Optional actions render only when provided.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub filtered: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <div class={classes!("empty-state", "py-10", "text-center", props.class.clone())}>
            <h4 class="font-semibold">{props.title.clone()}</h4>
            if props.filtered {
                <p class="text-base-content/60">{"Try a different search or status filter."}</p>
            }
            if has_actions {
                <div class="empty-actions mt-3">{ for props.children.iter() }</div>
            }
        </div>
    }
}
