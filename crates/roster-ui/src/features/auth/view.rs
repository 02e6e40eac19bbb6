//! Login page.
//!
//! # Design
//! - One form toggles between sign-in and registration; the fields are kept across toggles.
//! - A successful response is persisted before the store sees the session.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::persist_session;
use crate::components::record_dialog::FormField;
use crate::core::auth::{AuthMode, LoginForm, Session};
use crate::core::error::{GENERIC_FAILURE, INVALID_CREDENTIALS};
use crate::core::store::{app_dispatch, sign_in};
use crate::features::auth::api::authenticate;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let client = use_context::<ApiCtx>().map(|ctx| ctx.client);
    let navigator = use_navigator();
    let form = use_state(LoginForm::default);
    let busy = use_state(|| false);
    let error = use_state(|| None as Option<String>);

    let field = |apply: fn(&mut LoginForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_toggle_mode = {
        let form = form.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.mode = next.mode.toggled();
            form.set(next);
            error.set(None);
        })
    };
    let onsubmit = {
        let form = form.clone();
        let busy = busy.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            let Some(client) = client.clone() else {
                return;
            };
            let request = form.request();
            let fallback = match form.mode {
                AuthMode::SignIn => INVALID_CREDENTIALS,
                AuthMode::Register => GENERIC_FAILURE,
            };
            let busy = busy.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            busy.set(true);
            error.set(None);
            yew::platform::spawn_local(async move {
                match authenticate(&client, &request).await {
                    Ok(response) => {
                        let session = Session::from(response);
                        persist_session(&session);
                        client.set_token(Some(session.token.clone()));
                        app_dispatch().reduce_mut(|store| sign_in(store, session));
                        busy.set(false);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Students);
                        }
                    }
                    Err(err) => {
                        console::warn!("authentication failed", err.to_string());
                        error.set(Some(err.display_message(fallback)));
                        busy.set(false);
                    }
                }
            });
        })
    };

    let mode = form.mode;
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <form class="card-body" {onsubmit}>
                    <h1 class="card-title text-2xl">{mode.title()}</h1>
                    if mode == AuthMode::Register {
                        <FormField label="Name" required={true} value={form.name.clone()} on_input={field(|form, value| form.name = value)} />
                    }
                    <FormField label="Email" input_type="email" required={true} value={form.email.clone()} on_input={field(|form, value| form.email = value)} />
                    <FormField label="Password" input_type="password" required={true} value={form.password.clone()} on_input={field(|form, value| form.password = value)} />
                    if let Some(message) = (*error).clone() {
                        <p class="text-sm text-error" role="alert">{message}</p>
                    }
                    <button class="btn btn-primary mt-2" type="submit" disabled={*busy}>
                        {if *busy { "Please wait..." } else { mode.submit_label() }}
                    </button>
                    <button class="btn btn-link btn-sm" type="button" onclick={on_toggle_mode}>
                        {mode.switch_prompt()}
                    </button>
                </form>
            </div>
        </div>
    }
}
