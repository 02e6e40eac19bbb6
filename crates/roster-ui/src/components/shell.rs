use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::clear_session;
use crate::core::auth::Session;
use crate::core::store::{AppStore, app_dispatch, sign_out};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let user_label = use_selector(|store: &AppStore| {
        store.session.current.as_ref().map(Session::label)
    });
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        clear_session();
        if let Some(ctx) = api_ctx.as_ref() {
            ctx.client.set_token(None);
        }
        app_dispatch().reduce_mut(sign_out);
        if let Some(navigator) = navigator.as_ref() {
            navigator.push(&Route::Login);
        }
    });

    html! {
        <div class="app-shell min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow-sm">
                <div class="flex-1 gap-4">
                    <strong class="text-lg">{"Roster"}</strong>
                    <nav class="flex gap-1">
                        {nav_item(Route::Students, "Students", &props.active)}
                        {nav_item(Route::Staff, "Staff", &props.active)}
                    </nav>
                </div>
                <div class="flex-none items-center gap-3">
                    if let Some(label) = (*user_label).clone() {
                        <span class="text-sm text-base-content/70">{label}</span>
                    }
                    <button class="btn btn-ghost btn-sm" type="button" onclick={on_logout}>{"Sign out"}</button>
                </div>
            </header>
            <main class="mx-auto max-w-7xl p-4 md:p-6">
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(route: Route, label: &str, active: &Route) -> Html {
    let classes = classes!(
        "btn",
        "btn-ghost",
        "btn-sm",
        if *active == route {
            Some("btn-active")
        } else {
            None
        }
    );
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
