//! Result banner for CSV import and invite runs.

use crate::core::banner::{Banner, BannerTone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ResultBannerProps {
    pub banner: Banner,
    pub on_dismiss: Callback<()>,
}

#[function_component(ResultBanner)]
pub(crate) fn result_banner(props: &ResultBannerProps) -> Html {
    let tone = match props.banner.tone() {
        BannerTone::Success => "alert-success",
        BannerTone::Warning => "alert-warning",
        BannerTone::Error => "alert-error",
    };
    let errors = props.banner.errors();
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    html! {
        <div class={classes!("alert", tone, "items-start")} role="alert">
            <div class="grow">
                if let Banner::Error(message) = &props.banner {
                    <p>{message.clone()}</p>
                } else {
                    <p class="font-medium">{props.banner.counters().join(", ")}</p>
                }
                if !errors.is_empty() {
                    <ul class="mt-2 list-disc pl-5 text-sm">
                        {for errors.iter().map(|error| html! { <li>{error.clone()}</li> })}
                    </ul>
                }
            </div>
            <button class="btn btn-ghost btn-xs" type="button" aria-label="Dismiss" {onclick}>{"✕"}</button>
        </div>
    }
}
