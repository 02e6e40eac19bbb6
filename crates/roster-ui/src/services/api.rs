//! HTTP client for the Roster REST API.
//!
//! # Design
//! - One client per app boot; the bearer token is swapped in place on sign in/out.
//! - Every non-success response is classified into [`ApiError`] here, once.
//! - A 401 outside `/auth/*` fires the installed session-expiry hook before the error returns.

use crate::core::error::ApiError;
use crate::core::query::ListQuery;
use crate::core::resource::{ResourceKind, SortColumn};
use gloo::console;
use gloo_net::http::{Request, Response};
use roster_api_models::{BulkRequest, MessageBody, PageResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use wasm_bindgen::JsValue;
use yew::Callback;

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

pub(crate) struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
    on_session_expired: RefCell<Option<Callback<()>>>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(token),
            on_session_expired: RefCell::new(None),
        }
    }

    pub(crate) fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    pub(crate) fn set_session_expired_hook(&self, hook: Callback<()>) {
        *self.on_session_expired.borrow_mut() = Some(hook);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> Request {
        let url = self.url(path);
        let request = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        match self.token.borrow().as_deref() {
            Some(token) => request.header("Authorization", &format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send(&self, path: &str, request: Request) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|err| {
            console::error!("request failed", path, err.to_string());
            ApiError::Network(err.to_string())
        })?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(path, status, &body);
        if error.is_session_expired() {
            console::warn!("session expired", path);
            let hook = self.on_session_expired.borrow().clone();
            if let Some(hook) = hook {
                hook.emit(());
            }
        } else {
            console::warn!("request rejected", path, status);
        }
        Err(error)
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        serde_json::from_str(&text).map_err(|err| {
            console::error!("response decode failed", path, err.to_string());
            ApiError::Decode(err.to_string())
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(path, self.request(Method::Get, path)).await?;
        Self::decode(path, response).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .request(method, path)
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = self.send(path, request).await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(Method::Post, path, body).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(Method::Put, path, body).await
    }

    pub(crate) async fn patch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(path, self.request(Method::Patch, path)).await?;
        Self::decode(path, response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(path, self.request(Method::Delete, path)).await?;
        Ok(())
    }

    /// POST a multipart body (CSV import).
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .request(Method::Post, path)
            .body(JsValue::from(form));
        let response = self.send(path, request).await?;
        Self::decode(path, response).await
    }

    /// GET raw bytes (CSV export).
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(path, self.request(Method::Get, path)).await?;
        response
            .binary()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    pub(crate) async fn list<T, C>(
        &self,
        kind: ResourceKind,
        query: &ListQuery<C>,
    ) -> Result<PageResponse<T>, ApiError>
    where
        T: DeserializeOwned,
        C: SortColumn,
    {
        let path = format!("{}?{}", kind.base_path(), query.api_query());
        self.get_json(&path).await
    }

    pub(crate) async fn create<T>(&self, kind: ResourceKind, record: &T) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.post_json(kind.base_path(), record).await
    }

    pub(crate) async fn update<T>(
        &self,
        kind: ResourceKind,
        id: i64,
        record: &T,
    ) -> Result<T, ApiError>
    where
        T: Serialize + DeserializeOwned,
    {
        self.put_json(&kind.item_path(id), record).await
    }

    pub(crate) async fn remove(&self, kind: ResourceKind, id: i64) -> Result<(), ApiError> {
        self.delete(&kind.item_path(id)).await
    }

    pub(crate) async fn toggle_active<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        id: i64,
    ) -> Result<T, ApiError> {
        self.patch_json(&kind.toggle_active_path(id)).await
    }

    /// Bulk delete/activate/deactivate.
    pub(crate) async fn bulk(
        &self,
        kind: ResourceKind,
        action: &str,
        ids: Vec<i64>,
    ) -> Result<MessageBody, ApiError> {
        self.post_json(&kind.bulk_path(action), &BulkRequest { ids })
            .await
    }
}
