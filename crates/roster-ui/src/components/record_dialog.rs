//! Modal create/edit dialog and its form fields.
//!
//! # Design
//! - The dialog owns layout, the error line and the submit/cancel buttons; fields are children.
//! - Fields report raw strings; parsing happens when the form is submitted.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RecordDialogProps {
    pub title: AttrValue,
    pub submit_label: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub busy: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RecordDialog)]
pub(crate) fn record_dialog(props: &RecordDialogProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    html! {
        <div class="modal modal-open" role="dialog" aria-modal="true" aria-label={props.title.clone()}>
            <form class="modal-box max-w-2xl" {onsubmit}>
                <h3 class="text-lg font-bold">{props.title.clone()}</h3>
                <div class="grid grid-cols-1 gap-3 py-4 md:grid-cols-2">
                    { for props.children.iter() }
                </div>
                if let Some(error) = &props.error {
                    <div class="alert alert-error text-sm" role="alert">{error.clone()}</div>
                }
                <div class="modal-action">
                    <button class="btn btn-ghost" type="button" onclick={on_cancel} disabled={props.busy}>
                        {"Cancel"}
                    </button>
                    <button class="btn btn-primary" type="submit" disabled={props.busy}>
                        {if props.busy { "Saving..." } else { props.submit_label.as_str() }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FormFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub required: bool,
    pub on_input: Callback<String>,
}

#[function_component(FormField)]
pub(crate) fn form_field(props: &FormFieldProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };
    html! {
        <label class="form-control w-full">
            <span class="label-text">
                {props.label.clone()}
                if props.required { {" *"} }
            </span>
            <input
                class="input input-bordered w-full"
                type={props.input_type.clone()}
                value={props.value.clone()}
                required={props.required}
                {oninput}
            />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ActiveToggleProps {
    pub checked: bool,
    pub on_change: Callback<bool>,
}

#[function_component(ActiveToggle)]
pub(crate) fn active_toggle(props: &ActiveToggleProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_change.emit(input.checked());
            }
        })
    };
    html! {
        <label class="label cursor-pointer justify-start gap-3">
            <input type="checkbox" class="toggle toggle-success" checked={props.checked} {onchange} />
            <span class="label-text">{"Active"}</span>
        </label>
    }
}
