//! List controller hook shared by the record views.
//!
//! # Design
//! - Read the query from the URL on every render; write it back with `replace` only.
//! - Drive fetches through the store cache so late responses never reach the screen.
//! - Own the arrow-key listener so paging follows the same URL path as clicks.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::core::cache::Resolution;
use crate::core::error::GENERIC_FAILURE;
use crate::core::keyboard::{KeyPress, page_for_key};
use crate::core::list_state::ListState;
use crate::core::query::{ListPatch, ListQuery};
use crate::core::store::{AppStore, StoreRecord, app_dispatch};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Render-time handle to one record list.
pub(crate) struct RecordList<T: StoreRecord> {
    pub query: Rc<ListQuery<T::Column>>,
    pub state: Rc<ListState<T>>,
    pub on_patch: Callback<ListPatch<T::Column>>,
    pub on_sort: Callback<T::Column>,
    pub on_toggle_row: Callback<i64>,
    pub on_toggle_all: Callback<()>,
    pub on_clear_selection: Callback<()>,
}

#[hook]
pub(crate) fn use_record_list<T>(route: Route, dialog_open: bool) -> RecordList<T>
where
    T: StoreRecord + DeserializeOwned,
{
    let api_ctx = use_context::<ApiCtx>();
    let navigator = use_navigator();
    let raw_query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();
    let query = use_memo(
        |raw: &String| ListQuery::<T::Column>::from_query_str(raw),
        raw_query.clone(),
    );
    let state = use_selector(|store: &AppStore| T::list(store).clone());
    let dispatch = app_dispatch();

    {
        let dispatch = dispatch.clone();
        let client = api_ctx.map(|ctx| ctx.client);
        use_effect_with_deps(
            move |(query, _generation): &(ListQuery<T::Column>, u64)| {
                let mut ticket = None;
                dispatch.reduce_mut(|store| {
                    let list = T::list_mut(store);
                    list.observe_query(query.clone());
                    ticket = list.begin_fetch();
                });
                if let (Some(ticket), Some(client)) = (ticket, client) {
                    yew::platform::spawn_local(async move {
                        match client.list::<T, T::Column>(T::KIND, &ticket.key().query).await {
                            Ok(page) => dispatch.reduce_mut(|store| {
                                let resolution = T::list_mut(store).apply_page(&ticket, page);
                                if resolution != Resolution::Applied {
                                    console::log!(
                                        "list response not displayed",
                                        T::KIND.plural(),
                                        format!("{resolution:?}")
                                    );
                                }
                            }),
                            Err(err) if err.is_session_expired() => {}
                            Err(err) => {
                                console::error!("list fetch failed", T::KIND.plural(), err.to_string());
                                let message = err.display_message(GENERIC_FAILURE);
                                dispatch.reduce_mut(|store| {
                                    T::list_mut(store).fetch_failed(&ticket, message);
                                });
                            }
                        }
                    });
                }
                || ()
            },
            ((*query).clone(), state.cache.generation()),
        );
    }

    let write_query = {
        let route = route.clone();
        Callback::from(move |next: ListQuery<T::Column>| {
            let Some(navigator) = navigator.as_ref() else {
                return;
            };
            let pairs = next.merge_pairs(&raw_query);
            if pairs.is_empty() {
                navigator.replace(&route);
            } else if let Err(err) = navigator.replace_with_query(&route, &pairs) {
                console::error!("url update failed", err.to_string());
            }
        })
    };
    let on_patch = {
        let query = query.clone();
        let write_query = write_query.clone();
        Callback::from(move |patch: ListPatch<T::Column>| write_query.emit(query.apply(patch)))
    };
    let on_sort = {
        let query = query.clone();
        Callback::from(move |column: T::Column| write_query.emit(query.toggle_sort(column)))
    };
    let on_toggle_row = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: i64| dispatch.reduce_mut(|store| T::list_mut(store).toggle_row(id)))
    };
    let on_toggle_all = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(|store| T::list_mut(store).toggle_all()))
    };
    let on_clear_selection = Callback::from(move |()| {
        dispatch.reduce_mut(|store| T::list_mut(store).selection.clear());
    });

    {
        let on_patch = on_patch.clone();
        use_effect_with_deps(
            move |(query, total_pages, dialog_open): &(ListQuery<T::Column>, u32, bool)| {
                let page = query.page;
                let total_pages = *total_pages;
                let dialog_open = *dialog_open;
                let listener = EventListener::new(&window(), "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                        return;
                    };
                    let key = event.key();
                    let tag = event
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .map(|element| element.tag_name());
                    let press = KeyPress {
                        key: &key,
                        target_tag: tag.as_deref(),
                        dialog_open,
                    };
                    if let Some(next) = page_for_key(press, page, total_pages) {
                        on_patch.emit(ListPatch::page(next));
                    }
                });
                move || drop(listener)
            },
            ((*query).clone(), state.total_pages(), dialog_open),
        );
    }

    RecordList {
        query,
        state,
        on_patch,
        on_sort,
        on_toggle_row,
        on_toggle_all,
        on_clear_selection,
    }
}
