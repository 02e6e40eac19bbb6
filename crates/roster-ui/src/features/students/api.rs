//! API helpers for the student-only endpoints.
//!
//! # Design
//! - Keep HTTP calls localized to the feature layer.
//! - Reuse the shared ApiClient for auth and error classification.

use crate::core::banner::Banner;
use crate::core::error::ApiError;
use crate::core::resource::ResourceKind;
use crate::features::students::state::{StudentQuery, export_query};
use crate::services::api::ApiClient;
use roster_api_models::{BulkInviteResult, BulkRequest, ImportResult, StudentStats};
use wasm_bindgen::JsValue;

const STATS_PATH: &str = "/students/stats";
const IMPORT_PATH: &str = "/students/import/csv";
const EXPORT_PATH: &str = "/students/export/csv";

pub(crate) async fn fetch_stats(client: &ApiClient) -> Result<StudentStats, ApiError> {
    client.get_json(STATS_PATH).await
}

/// Invite the selected students. A 400 with a message becomes an error banner.
pub(crate) async fn send_invites(client: &ApiClient, ids: Vec<i64>) -> Result<Banner, ApiError> {
    let path = ResourceKind::Students.bulk_path("send-invite");
    match client
        .post_json::<_, BulkInviteResult>(&path, &BulkRequest { ids })
        .await
    {
        Ok(result) => Ok(Banner::from(result)),
        Err(ApiError::Rejected {
            status: 400,
            message: Some(message),
        }) => Ok(Banner::Error(message)),
        Err(err) => Err(err),
    }
}

/// Upload a CSV file as multipart field `file`.
pub(crate) async fn import_csv(client: &ApiClient, file: web_sys::File) -> Result<ImportResult, ApiError> {
    let form = web_sys::FormData::new().map_err(|err| ApiError::Network(js_message(&err)))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|err| ApiError::Network(js_message(&err)))?;
    client.post_form(IMPORT_PATH, form).await
}

/// CSV bytes for the current search and status filter.
pub(crate) async fn export_csv(client: &ApiClient, query: &StudentQuery) -> Result<Vec<u8>, ApiError> {
    let params = export_query(query);
    let path = if params.is_empty() {
        EXPORT_PATH.to_string()
    } else {
        format!("{EXPORT_PATH}?{params}")
    };
    client.get_bytes(&path).await
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
