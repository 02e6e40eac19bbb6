//! Static configuration for the console plus the API base URL resolver.
//!
//! # Design
//! - Keep every tunable in one place so views never hard-code timings or keys.
//! - Resolve the API base from plain strings so it can be tested natively.

/// Allowed rows-per-page values, smallest first.
pub const PAGE_SIZES: [u32; 3] = [10, 25, 50];
/// Rows per page when the URL does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Delay before a search keystroke is committed to the URL.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;
/// Lifetime of a toast before it auto-dismisses.
pub const TOAST_LIFETIME_MS: u32 = 4_000;
/// File name offered for the student CSV export.
pub const EXPORT_FILENAME: &str = "students.csv";
/// Cached list pages kept per record type before the oldest are evicted.
pub const CACHE_CAPACITY: usize = 32;
/// Highest page index the API accepts (a signed 32-bit int server-side).
pub const MAX_PAGE: u32 = i32::MAX as u32;
/// Path prefix shared by the auth endpoints.
pub const AUTH_PATH_PREFIX: &str = "/auth/";

/// LocalStorage key for the bearer token.
pub const TOKEN_KEY: &str = "roster.auth.token";
/// LocalStorage key for the serialized user profile.
pub const USER_KEY: &str = "roster.auth.user";
/// LocalStorage key for an explicit API base URL override.
pub const API_BASE_OVERRIDE_KEY: &str = "roster.api_base_url";

const UI_DEV_PORT: &str = "3000";
const API_PORT: &str = "8080";
const FALLBACK_API_BASE: &str = "http://localhost:8080/api";

/// Derive the API base URL from the page location parts.
///
/// The dev server port maps to the API port; any other port is kept. The
/// result always ends with `/api` and never with a trailing slash.
#[must_use]
pub fn derive_api_base_url(protocol: &str, host: &str, port: &str) -> String {
    if host.trim().is_empty() {
        return FALLBACK_API_BASE.to_string();
    }
    let protocol = protocol.trim_end_matches(':');
    let protocol = if protocol.is_empty() { "http" } else { protocol };
    let port = match port {
        "" => None,
        UI_DEV_PORT => Some(API_PORT),
        other => Some(other),
    };
    port.map_or_else(
        || format!("{protocol}://{host}/api"),
        |port| format!("{protocol}://{host}:{port}/api"),
    )
}

/// Normalise a user-supplied override; blank values are ignored.
#[must_use]
pub fn normalize_override(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
