//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Sign in/out swaps the token in place instead of rebuilding the client.

use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for the views.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a context for `base_url`, optionally carrying a restored token.
    pub(crate) fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base_url, token)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
