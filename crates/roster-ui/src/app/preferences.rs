//! Persistence and environment helpers for the app shell.

use crate::core::auth::Session;
use crate::core::config::{
    API_BASE_OVERRIDE_KEY, TOKEN_KEY, USER_KEY, derive_api_base_url, normalize_override,
};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

/// API base URL: an explicit override from storage, else derived from the page location.
pub(crate) fn api_base_url() -> String {
    if let Some(value) = LocalStorage::get::<String>(API_BASE_OVERRIDE_KEY)
        .ok()
        .and_then(|value| normalize_override(&value))
    {
        return value;
    }
    let location = window().location();
    derive_api_base_url(
        &location.protocol().unwrap_or_default(),
        &location.hostname().unwrap_or_default(),
        &location.port().unwrap_or_default(),
    )
}

/// Restore the persisted session; a partial or corrupt pair is cleared.
pub(crate) fn load_session() -> Option<Session> {
    let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
    let user = LocalStorage::raw().get_item(USER_KEY).ok().flatten();
    if token.is_none() && user.is_none() {
        return None;
    }
    let session = Session::restore(token, user);
    if session.is_none() {
        console::warn!("discarding incomplete stored session");
        clear_session();
    }
    session
}

pub(crate) fn persist_session(session: &Session) {
    set_storage(TOKEN_KEY, &session.token);
    match serde_json::to_string(&session.user) {
        Ok(json) => {
            if let Err(err) = LocalStorage::raw().set_item(USER_KEY, &json) {
                log_storage_error("set", USER_KEY, &format!("{err:?}"));
            }
        }
        Err(err) => log_storage_error("serialize", USER_KEY, &err.to_string()),
    }
}

pub(crate) fn clear_session() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
