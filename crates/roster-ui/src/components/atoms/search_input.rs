//! Debounced search input for list toolbars.
//!
//! # Design
//! - Keep local input state for immediate typing feedback.
//! - Emit debounced values; an external value change (back button) resyncs the field.

use crate::core::config::SEARCH_DEBOUNCE_MS;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchInputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(SEARCH_DEBOUNCE_MS)]
    pub debounce_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_search: Callback<String>,
}

#[function_component(SearchInput)]
pub(crate) fn search_input(props: &SearchInputProps) -> Html {
    let value_state = use_state(|| props.value.to_string());
    let debounce = props.debounce_ms;
    let timer = use_mut_ref(|| None as Option<Timeout>);

    {
        let value_state = value_state.clone();
        let timer = timer.clone();
        use_effect_with_deps(
            move |incoming: &AttrValue| {
                let next = incoming.to_string();
                if *value_state != next {
                    timer.borrow_mut().take();
                    value_state.set(next);
                }
                || ()
            },
            props.value.clone(),
        );
    }

    {
        let timer = timer.clone();
        use_effect_with_deps(
            move |()| move || drop(timer.borrow_mut().take()),
            (),
        );
    }

    let oninput = {
        let on_search = props.on_search.clone();
        let value_state = value_state.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let next = input.value();
            value_state.set(next.clone());
            if debounce == 0 {
                on_search.emit(next);
                return;
            }
            let on_search = on_search.clone();
            *timer.borrow_mut() = Some(Timeout::new(debounce, move || on_search.emit(next)));
        })
    };

    html! {
        <label class={classes!("input", "input-bordered", "flex", "items-center", "gap-2", props.class.clone())}>
            <span class="iconify lucide--search size-3.5"></span>
            <input
                class="grow"
                type="search"
                placeholder={props.placeholder.clone()}
                aria-label={props.placeholder.clone()}
                value={AttrValue::from((*value_state).clone())}
                {oninput}
            />
        </label>
    }
}
