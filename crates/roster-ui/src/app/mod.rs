use crate::app::api::ApiCtx;
use crate::components::atoms::EmptyState;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, app_dispatch, dismiss_toast, sign_in, sign_out};
use crate::features::auth::view::LoginPage;
use crate::features::staff::view::StaffPage;
use crate::features::students::view::StudentsPage;
use gloo::console;
use gloo::utils::window;
use preferences::{api_base_url, clear_session, load_session};
pub(crate) use routes::Route;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

const LOGIN_PATH: &str = "/login";

#[function_component(RosterApp)]
pub fn roster_app() -> Html {
    let dispatch = app_dispatch();
    let api_ctx = use_memo(
        |_| {
            let token = app_dispatch()
                .get()
                .session
                .current
                .as_ref()
                .map(|session| session.token.clone());
            ApiCtx::new(api_base_url(), token)
        },
        (),
    );
    let signed_in = use_selector(|store: &AppStore| store.session.is_signed_in());
    let toasts = use_selector(|store: &AppStore| store.toasts.items().to_vec());

    {
        let client = api_ctx.client.clone();
        use_effect_with_deps(
            move |_| {
                let weak = Rc::downgrade(&client);
                client.set_session_expired_hook(Callback::from(move |()| {
                    console::warn!("signing out after expired session");
                    clear_session();
                    if let Some(client) = weak.upgrade() {
                        client.set_token(None);
                    }
                    app_dispatch().reduce_mut(sign_out);
                    if let Err(err) = window().location().set_href(LOGIN_PATH) {
                        console::error!("login redirect failed", err);
                    }
                }));
                || ()
            },
            (),
        );
    }

    let dismiss = Callback::from(move |id: u64| dispatch.reduce_mut(|store| dismiss_toast(store, id)));
    let signed_in = *signed_in;

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={move |route: Route| {
                    if route.requires_session() && !signed_in {
                        return html! { <Redirect<Route> to={Route::Login} /> };
                    }
                    match route {
                        Route::Home | Route::Login if signed_in => html! { <Redirect<Route> to={Route::Students} /> },
                        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
                        Route::Login => html! { <LoginPage /> },
                        Route::Students => html! {
                            <AppShell active={Route::Students}><StudentsPage /></AppShell>
                        },
                        Route::Staff => html! {
                            <AppShell active={Route::Staff}><StaffPage /></AppShell>
                        },
                        Route::NotFound => html! {
                            <EmptyState title="Page not found">
                                <Link<Route> to={Route::Home} classes="btn btn-primary btn-sm">{"Back to the console"}</Link<Route>>
                            </EmptyState>
                        },
                    }
                }} />
                <ToastHost toasts={(*toasts).clone()} on_dismiss={dismiss} />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(session) = load_session() {
        app_dispatch().reduce_mut(|store| sign_in(store, session));
    }
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<RosterApp>::with_root(root).render();
    } else {
        yew::Renderer::<RosterApp>::new().render();
    }
}
