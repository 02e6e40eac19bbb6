//! Typed failures for REST calls.
//!
//! # Design
//! - Classification happens once, from path + status + body, so views only match on variants.
//! - A 401 means bad credentials on the auth endpoints and an expired session everywhere else.
//! - Server messages are surfaced verbatim; callers supply the fallback text.

use crate::core::auth::is_auth_path;
use roster_api_models::ErrorBody;
use thiserror::Error;

/// Message shown when login/register returns 401 without a body.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Generic fallback for unexpected failures.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Failure of a REST call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// 401 from `/auth/*`.
    #[error("{message}")]
    InvalidCredentials {
        /// Text shown on the login form.
        message: String,
    },
    /// 401 from any other endpoint; the session has been torn down.
    #[error("session expired")]
    SessionExpired,
    /// Other 4xx; the request was refused as sent.
    #[error("request rejected ({status})")]
    Rejected {
        /// HTTP status.
        status: u16,
        /// Server message, if any.
        message: Option<String>,
    },
    /// 5xx or an unexpected status.
    #[error("server error ({status})")]
    Server {
        /// HTTP status.
        status: u16,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response for `path`.
    #[must_use]
    pub fn from_response(path: &str, status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| server_message(&body));
        match status {
            401 if is_auth_path(path) => Self::InvalidCredentials {
                message: message.unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
            },
            401 => Self::SessionExpired,
            400..=499 => Self::Rejected { status, message },
            _ => Self::Server { status },
        }
    }

    /// Text to show the user, using `fallback` when the server gave none.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        match self {
            Self::InvalidCredentials { message }
            | Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::SessionExpired => "Session expired, please sign in again".to_string(),
            Self::Rejected { message: None, .. }
            | Self::Server { .. }
            | Self::Network(_)
            | Self::Decode(_) => fallback.to_string(),
        }
    }

    /// Whether the session was torn down by this failure.
    #[must_use]
    pub const fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

fn server_message(body: &ErrorBody) -> Option<String> {
    let message = body.message()?;
    let details = body
        .details
        .as_ref()
        .filter(|details| !details.is_empty())
        .map(|details| {
            details
                .iter()
                .map(|(field, problem)| format!("{field}: {problem}"))
                .collect::<Vec<_>>()
                .join("; ")
        });
    Some(details.map_or_else(|| message.to_string(), |details| format!("{message} ({details})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_401_is_invalid_credentials_with_default_text() {
        let error = ApiError::from_response("/auth/login", 401, "");
        assert_eq!(
            error,
            ApiError::InvalidCredentials {
                message: INVALID_CREDENTIALS.to_string()
            }
        );
        assert_eq!(error.display_message(GENERIC_FAILURE), INVALID_CREDENTIALS);
        assert!(!error.is_session_expired());
    }

    #[test]
    fn resource_401_is_session_expiry() {
        let error = ApiError::from_response("/students?page=0", 401, r#"{"error":"Unauthorized"}"#);
        assert!(error.is_session_expired());
    }

    #[test]
    fn rejection_surfaces_server_text_verbatim() {
        let error = ApiError::from_response(
            "/students",
            400,
            r#"{"status":400,"error":"Email already exists"}"#,
        );
        assert_eq!(error.display_message("Failed to create"), "Email already exists");
        assert!(matches!(error, ApiError::Rejected { status: 400, .. }));
    }

    #[test]
    fn validation_details_are_appended() {
        let error = ApiError::from_response(
            "/staff/3",
            400,
            r#"{"error":"Validation Failed","details":{"email":"Invalid email format"}}"#,
        );
        assert_eq!(
            error.display_message("Failed to update"),
            "Validation Failed (email: Invalid email format)"
        );
    }

    #[test]
    fn unreadable_bodies_use_fallback() {
        let rejected = ApiError::from_response("/staff", 404, "<html>");
        assert_eq!(rejected.display_message("Failed to delete"), "Failed to delete");
        let server = ApiError::from_response("/staff", 500, "");
        assert_eq!(server, ApiError::Server { status: 500 });
        assert_eq!(server.display_message(GENERIC_FAILURE), GENERIC_FAILURE);
        assert_eq!(
            ApiError::Network("offline".into()).display_message("Import failed"),
            "Import failed"
        );
    }
}
