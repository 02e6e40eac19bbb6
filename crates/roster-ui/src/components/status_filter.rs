use crate::core::query::StatusFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StatusFilterProps {
    pub value: StatusFilter,
    pub on_change: Callback<StatusFilter>,
}

/// Segmented All / Active / Inactive control.
#[function_component(StatusFilterControl)]
pub(crate) fn status_filter_control(props: &StatusFilterProps) -> Html {
    html! {
        <div class="join" role="group" aria-label="Status filter">
            {for StatusFilter::ALL.iter().map(|status| {
                let status = *status;
                let selected = status == props.value;
                let onclick = props.on_change.reform(move |_: MouseEvent| status);
                html! {
                    <button
                        type="button"
                        class={classes!("join-item", "btn", selected.then_some("btn-active"))}
                        aria-pressed={selected.to_string()}
                        {onclick}
                    >
                        {status.label()}
                    </button>
                }
            })}
        </div>
    }
}
