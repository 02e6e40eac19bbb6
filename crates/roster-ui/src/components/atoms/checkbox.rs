//! Row and header selection checkbox.
//!
//! # Design
//! - `indeterminate` is a DOM property, not an attribute, so it is pushed through a node ref.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectCheckboxProps {
    pub checked: bool,
    #[prop_or_default]
    pub indeterminate: bool,
    pub label: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(SelectCheckbox)]
pub(crate) fn select_checkbox(props: &SelectCheckboxProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |indeterminate: &bool| {
                if let Some(input) = node.cast::<web_sys::HtmlInputElement>() {
                    input.set_indeterminate(*indeterminate);
                }
                || ()
            },
            props.indeterminate,
        );
    }
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: Event| on_toggle.emit(()))
    };
    html! {
        <input
            ref={node}
            type="checkbox"
            class="checkbox checkbox-sm"
            checked={props.checked}
            disabled={props.disabled}
            aria-label={props.label.clone()}
            {onchange}
        />
    }
}
